//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Scalar`] is one node of a computation graph built as expressions
//! are evaluated. [`Scalar::backward`] walks that graph in reverse topological
//! order and accumulates the derivative of the root into every node. The
//! [`nn`] module composes neurons, layers and multi-layer perceptrons on top.
//!
//! ```
//! use scalargrad_core::Scalar;
//!
//! let x = Scalar::new(3.0);
//! let y = &x * &x;
//! y.backward().unwrap();
//! assert_eq!(y.value(), 9.0);
//! assert_eq!(x.grad(), 6.0);
//! ```

// Core modules
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod scalar_data;

pub mod nn;
pub mod utils;

pub mod error;

pub use error::ScalarGradError;
pub use ops::activation::Activation;
pub use scalar::Scalar;
pub use scalar_data::{NodeId, OpKind};
// Re-export traits required by public functions/structs
pub use num_traits;
