// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_op;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

// --- LnBackward Definition ---

/// Backward pass structure for the natural logarithm.
///
/// Stores the input value, needed to compute the gradient \( 1/a \).
#[derive(Debug)]
struct LnBackward {
    a: Scalar,
    a_value: f64,
}

impl BackwardOp for LnBackward {
    /// Computes the gradient for \( z = \ln(a) \):
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    ///
    /// The contribution is added to `a` like every other rule, so a logarithm
    /// node reused downstream accumulates correctly.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![grad_output / self.a_value])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone()]
    }
}

// --- ln_op Implementation ---

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// # Errors
/// Returns `ScalarGradError::LogDomain` if the input is not strictly positive
/// (NaN included). No node is created in that case and the input is left
/// untouched.
pub fn ln_op(a: &Scalar) -> Result<Scalar, ScalarGradError> {
    let a_value = a.value();
    if !(a_value > 0.0) {
        return Err(ScalarGradError::LogDomain { value: a_value });
    }
    Ok(apply_op(
        a_value.ln(),
        OpKind::Ln,
        LnBackward {
            a: a.clone(),
            a_value,
        },
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
