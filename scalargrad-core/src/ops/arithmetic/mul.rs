// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{apply_op, Operand};
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

// --- Backward Operation ---

/// Backward pass structure for multiplication.
///
/// Stores the forward values of both operands: \( \frac{\partial ab}{\partial a} = b \)
/// and \( \frac{\partial ab}{\partial b} = a \).
#[derive(Debug)]
struct MulBackward {
    a: Scalar,
    b: Scalar,
    a_value: f64,
    b_value: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![self.b_value * grad_output, self.a_value * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two operands: `a * b`.
///
/// `b` may be a node or a numeric literal (promoted to a constant leaf).
pub fn mul_op<'a>(a: &Scalar, b: impl Into<Operand<'a>>) -> Scalar {
    let b = b.into().into_scalar();
    let a_value = a.value();
    let b_value = b.value();
    apply_op(
        a_value * b_value,
        OpKind::Mul,
        MulBackward {
            a: a.clone(),
            b,
            a_value,
            b_value,
        },
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
