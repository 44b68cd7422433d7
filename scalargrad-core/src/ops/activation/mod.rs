// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions applied to a neuron's affine combination.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent.
//! - [`relu_op`]: Rectified Linear Unit.
//!
//! [`Activation`] selects one of them (or `exp` / `ln`) at runtime, by name,
//! which is how the `nn` layers are configured.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;

use crate::error::ScalarGradError;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::scalar::Scalar;
use std::fmt;
use std::str::FromStr;

/// Unary operation applied at the output of a neuron, resolved at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Exp,
    /// Natural logarithm; fails on non-positive inputs.
    Ln,
    /// No activation: the affine combination is returned as is.
    Identity,
}

impl Activation {
    /// Applies the activation to a node.
    ///
    /// # Errors
    /// Only `Activation::Ln` can fail, with `ScalarGradError::LogDomain`.
    pub fn apply(&self, x: &Scalar) -> Result<Scalar, ScalarGradError> {
        match self {
            Activation::Tanh => Ok(tanh_op(x)),
            Activation::Relu => Ok(relu_op(x)),
            Activation::Exp => Ok(exp_op(x)),
            Activation::Ln => ln_op(x),
            Activation::Identity => Ok(x.clone()),
        }
    }

    /// Canonical name, accepted back by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Exp => "exp",
            Activation::Ln => "log",
            Activation::Identity => "linear",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    /// Parses an activation name, case-insensitively.
    ///
    /// Accepted: `tanh`, `relu`, `exp`, `log`/`ln`, `linear`/`identity`/`none`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "exp" => Ok(Activation::Exp),
            "log" | "ln" => Ok(Activation::Ln),
            "linear" | "identity" | "none" => Ok(Activation::Identity),
            _ => Err(ScalarGradError::UnknownActivation(name.to_string())),
        }
    }
}
