// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_op;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

/// Backward pass structure for the hyperbolic tangent.
///
/// \( \frac{d \tanh a}{da} = 1 - \tanh^2 a \), computed from the output value.
#[derive(Debug)]
struct TanhBackward {
    a: Scalar,
    out_value: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![(1.0 - self.out_value * self.out_value) * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone()]
    }
}

/// Applies the hyperbolic tangent.
///
/// Uses `f64::tanh`, which saturates to ±1 for large inputs instead of
/// overflowing.
pub fn tanh_op(a: &Scalar) -> Scalar {
    let out_value = a.value().tanh();
    apply_op(
        out_value,
        OpKind::Tanh,
        TanhBackward {
            a: a.clone(),
            out_value,
        },
    )
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
