//! Autograd: the graph-level half of the engine.
//!
//! Nodes record their backward rule when an operation builds them (see
//! [`crate::ops`]); this module sorts the graph and drives the backward pass.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;

use crate::error::ScalarGradError;
use crate::scalar::Scalar;

/// Runs the backward pass from `root`. See [`Scalar::backward`].
pub fn backward(root: &Scalar) -> Result<(), ScalarGradError> {
    root.backward()
}

/// Resets the gradient of every node reachable from `root`.
///
/// Gradients are never reset implicitly: call this (or
/// [`crate::nn::Module::zero_grad`]) between two backward passes over the same
/// graph.
pub fn zero_grad_graph(root: &Scalar) {
    root.zero_grad_graph()
}
