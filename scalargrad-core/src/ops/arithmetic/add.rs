// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{apply_op, Operand};
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

// --- Backward Operation ---

/// Backward pass structure for addition.
///
/// \( \frac{\partial (a+b)}{\partial a} = \frac{\partial (a+b)}{\partial b} = 1 \):
/// the output gradient flows unchanged to both operands.
#[derive(Debug)]
struct AddBackward {
    a: Scalar,
    b: Scalar,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two operands: `a + b`.
///
/// `b` may be a node or a numeric literal (promoted to a constant leaf).
/// Passing the same node twice (`add_op(&x, &x)`) is allowed; both operand
/// slots receive the output gradient.
pub fn add_op<'a>(a: &Scalar, b: impl Into<Operand<'a>>) -> Scalar {
    let b = b.into().into_scalar();
    let value = a.value() + b.value();
    apply_op(
        value,
        OpKind::Add,
        AddBackward {
            a: a.clone(),
            b,
        },
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
