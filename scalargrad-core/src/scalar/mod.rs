// src/scalar/mod.rs

use crate::autograd::BackwardOp;
use crate::scalar_data::{OpKind, ScalarData};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod math_methods;
mod traits;

pub use create::{constant, leaf};

/// A node of the computation graph holding one `f64`.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally:
/// 1.  **Shared Ownership:** a node used by several downstream operations is
///     referenced by all of them (diamond-shaped graphs). Cloning a `Scalar`
///     is a cheap handle copy; both handles name the same node.
/// 2.  **Interior Mutability:** the gradient accumulator is updated during the
///     backward pass through shared handles.
///
/// The graph is single-threaded: `Scalar` is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Wraps freshly built node data.
    pub(crate) fn from_data(data: ScalarData) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Creates the output node of an operation.
    ///
    /// The parents are owned by `grad_fn`, which must already exist: this is
    /// what keeps the graph acyclic.
    pub(crate) fn from_op(value: f64, op: OpKind, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Scalar::from_data(ScalarData::new_op(value, op, grad_fn))
    }

    /// Immutable access to the node data.
    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }
}
