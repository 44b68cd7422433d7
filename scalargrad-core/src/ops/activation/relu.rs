// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_op;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

/// Backward pass structure for ReLU.
///
/// The local gradient is 1 where the input is strictly positive, 0 elsewhere
/// (0 is used as the subgradient at the kink).
#[derive(Debug)]
struct ReluBackward {
    a: Scalar,
    a_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        let local_grad = if self.a_value > 0.0 { 1.0 } else { 0.0 };
        Ok(vec![local_grad * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone()]
    }
}

/// Applies the Rectified Linear Unit: `max(0, a)`.
pub fn relu_op(a: &Scalar) -> Scalar {
    let a_value = a.value();
    apply_op(
        a_value.max(0.0),
        OpKind::Relu,
        ReluBackward {
            a: a.clone(),
            a_value,
        },
    )
}
