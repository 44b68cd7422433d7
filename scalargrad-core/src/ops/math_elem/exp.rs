// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_op;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

// --- ExpBackward Definition ---

/// Backward pass structure for \( z = e^a \).
///
/// \( \frac{dz}{da} = e^a = z \), so only the output value is kept.
#[derive(Debug)]
struct ExpBackward {
    a: Scalar,
    out_value: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![self.out_value * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone()]
    }
}

// --- exp_op Implementation ---

/// Computes \( e^a \).
///
/// Large inputs overflow to `+inf`; no clamping is applied.
pub fn exp_op(a: &Scalar) -> Scalar {
    let out_value = a.value().exp();
    apply_op(
        out_value,
        OpKind::Exp,
        ExpBackward {
            a: a.clone(),
            out_value,
        },
    )
}
