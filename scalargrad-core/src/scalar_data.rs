// src/scalar_data.rs
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// Allocation-time identity of a node in the computation graph.
///
/// Two nodes holding the same value are still distinct nodes; every traversal
/// deduplicates on `NodeId`, never on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag of the primitive operation that produced a node.
///
/// Negation, subtraction and division are composites: the node they return
/// carries the tag of its last primitive (`Mul`, `Add` and `Mul` respectively).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    /// Power by a constant exponent.
    Pow(f64),
    Exp,
    Ln,
    Tanh,
    Relu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, "leaf"),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(p) => write!(f, "**{}", p),
            OpKind::Exp => write!(f, "exp"),
            OpKind::Ln => write!(f, "ln"),
            OpKind::Tanh => write!(f, "tanh"),
            OpKind::Relu => write!(f, "relu"),
        }
    }
}

/// Internal storage and metadata for a `Scalar` node.
///
/// Wrapped in `Rc<RefCell<ScalarData>>` by [`crate::Scalar`] so that a node can
/// be shared by every downstream node using it, while its gradient stays
/// mutable during the backward pass.
pub struct ScalarData {
    /// Identity used by graph traversal.
    pub(crate) id: NodeId,
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Gradient accumulator. Only ever added to, except by an explicit reset.
    pub(crate) grad: f64,
    pub(crate) op: OpKind,
    /// Backward rule of the operation that produced this node; holds the
    /// parents. Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ScalarData {
    /// Creates the data of a leaf node (no parents, zero gradient).
    pub(crate) fn new_leaf(value: f64) -> Self {
        ScalarData {
            id: NodeId::next(),
            value,
            grad: 0.0,
            op: OpKind::Leaf,
            grad_fn: None,
        }
    }

    /// Creates the data of an operation output.
    pub(crate) fn new_op(value: f64, op: OpKind, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ScalarData {
            id: NodeId::next(),
            value,
            grad: 0.0,
            op,
            grad_fn: Some(grad_fn),
        }
    }
}

/// Releases the ancestors of a dropped node without recursion.
///
/// The default drop would free `grad_fn`, then its parents, then their
/// `grad_fn`, and so on, one set of stack frames per node: a long chain
/// overflows the call stack. Instead, parents that this node keeps alive on
/// its own are moved onto an explicit stack and detached from their own
/// `grad_fn` before being released.
impl Drop for ScalarData {
    fn drop(&mut self) {
        let Some(grad_fn) = self.grad_fn.take() else {
            return;
        };
        let mut pending: Vec<Scalar> = Vec::new();
        release_grad_fn(grad_fn, &mut pending);

        while let Some(node) = pending.pop() {
            // Another handle keeps this node (and its ancestors) alive.
            if Rc::strong_count(&node.data) > 1 {
                continue;
            }
            let grad_fn = match node.data.try_borrow_mut() {
                Ok(mut data) => data.grad_fn.take(),
                Err(_) => None,
            };
            if let Some(grad_fn) = grad_fn {
                release_grad_fn(grad_fn, &mut pending);
            }
            // `node` now has no grad_fn, so dropping it stops here.
        }
    }
}

// Moves the inputs of a backward rule onto `pending` if the rule is about to
// be freed, then drops it.
fn release_grad_fn(grad_fn: Rc<dyn BackwardOp>, pending: &mut Vec<Scalar>) {
    if Rc::strong_count(&grad_fn) == 1 {
        pending.extend(grad_fn.inputs());
    }
}

impl fmt::Debug for ScalarData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarData")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .finish()
    }
}
