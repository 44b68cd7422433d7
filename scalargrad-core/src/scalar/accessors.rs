// src/scalar/accessors.rs
use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use crate::scalar_data::{NodeId, OpKind};
use std::rc::Rc;

impl Scalar {
    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the current gradient accumulator.
    ///
    /// Reads `0.0` until a backward pass reaches this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    /// Returns the tag of the operation that produced this node.
    pub fn op(&self) -> OpKind {
        self.read_data().op
    }

    /// True if this node has no parents.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns the direct inputs of this node, in operand order.
    ///
    /// Duplicates are kept: the parents of `&x + &x` are `[x, x]`.
    pub fn parents(&self) -> Vec<Scalar> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    /// True if both handles name the same node.
    pub fn same_node(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Returns a clone of the `Rc` pointing to the backward rule (`grad_fn`).
    pub(crate) fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }
}
