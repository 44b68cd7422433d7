use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::NodeId;
use log::{debug, trace};
use std::collections::HashMap;

impl Scalar {
    /// Adds `grad_to_add` into this node's gradient accumulator.
    ///
    /// Accumulation is always additive, so a node reached through several
    /// paths ends up with the sum of every contribution.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.data.try_borrow_mut().map_err(|_| {
            ScalarGradError::BackwardError(
                "Failed to borrow node mutably during gradient accumulation".to_string(),
            )
        })?;
        guard.grad += grad_to_add;
        Ok(())
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes the derivative of this node with respect to every node it
    /// depends on:
    /// 1. the graph is sorted topologically (parents before children),
    /// 2. this node is seeded with a gradient of `1.0`,
    /// 3. nodes are visited in reverse order; each backward rule turns the
    ///    node's gradient into contributions that are *added* to its parents.
    ///
    /// Gradients are not reset beforehand. Calling `backward` twice on the
    /// same graph leaves every accumulator at exactly twice its single-pass
    /// value; use [`Scalar::zero_grad_graph`] between passes.
    ///
    /// # Errors
    /// Returns `ScalarGradError::BackwardError` if a backward rule yields a
    /// number of gradients different from its number of inputs, or if a node
    /// is already borrowed.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: root {} over {} nodes",
            self.id(),
            sorted_nodes.len()
        );

        // Gradients flowing during this pass only, keyed by node identity.
        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(self.id(), 1.0);

        for node in sorted_nodes.iter().rev() {
            let upstream_grad = grad_map.remove(&node.id()).unwrap_or(0.0);
            node.acc_grad(upstream_grad)?;

            let Some(grad_fn) = node.grad_fn() else {
                continue;
            };
            let input_grads = grad_fn.backward(upstream_grad)?;
            let inputs = grad_fn.inputs();
            if input_grads.len() != inputs.len() {
                return Err(ScalarGradError::BackwardError(format!(
                    "BackwardOp returned {} gradients, but expected {} (for op: {:?})",
                    input_grads.len(),
                    inputs.len(),
                    grad_fn
                )));
            }
            trace!(
                "backward: node {} ({}) grad {} -> {:?}",
                node.id(),
                node.op(),
                upstream_grad,
                input_grads
            );

            for (input, grad_to_add) in inputs.iter().zip(input_grads) {
                *grad_map.entry(input.id()).or_insert(0.0) += grad_to_add;
            }
        }

        Ok(())
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.data.borrow_mut().grad = 0.0;
    }

    /// Resets the gradient of every node reachable from this one (this node
    /// included).
    pub fn zero_grad_graph(&self) {
        let nodes = topological_sort(self);
        debug!("zero_grad_graph: resetting {} nodes", nodes.len());
        for node in nodes {
            node.zero_grad();
        }
    }
}
