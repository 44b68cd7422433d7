use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf `Scalar` must have an associated
/// `BackwardOp` implementation. It is stored in the output node's `grad_fn`
/// field, bound at construction, and is invoked by [`Scalar::backward`] to
/// propagate gradients according to the chain rule.
///
/// The implementation owns its operands (strong handles), which keeps every
/// parent alive as long as one of its children is.
pub trait BackwardOp: Debug {
    /// Computes the contributions of the output gradient to each input.
    ///
    /// If the operation is \( out = f(in_1, ..., in_n) \), this returns
    /// \( \frac{dL}{dout} \cdot \frac{\partial out}{\partial in_i} \) for every
    /// input. The caller *adds* each contribution to the matching input.
    ///
    /// # Arguments
    /// * `grad_output`: gradient flowing into the output node (dL/dOut).
    ///
    /// # Returns
    /// One contribution per input, in the order of [`BackwardOp::inputs`].
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError>;

    /// Returns the input nodes (the parents) in operand order.
    ///
    /// Duplicates are allowed and each occurrence receives its own
    /// contribution.
    fn inputs(&self) -> Vec<Scalar>;
}
