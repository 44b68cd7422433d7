// src/ops/mod.rs

//! # Operation catalog
//!
//! Every differentiable operation lives here, one file per operation. Each file
//! defines the forward function (`*_op`) and a `*Backward` struct implementing
//! [`BackwardOp`], which owns the operands and knows how to turn the output
//! gradient into contributions for them.
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div
//! - [`math_elem`]: exp, ln
//! - [`activation`]: tanh, relu and runtime activation selection
//! - [`comparison`]: gt (no graph edge)

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;
use std::rc::Rc;

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;

/// An operand of a binary operation: an existing node or a numeric literal.
///
/// Literals are promoted to anonymous constant leaves when the operation
/// builds its node, so `add_op(&x, 2.0)` and `add_op(&x, &y)` go through the
/// same code path.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Node(&'a Scalar),
    Constant(f64),
}

impl Operand<'_> {
    /// Forward value of the operand.
    pub fn value(&self) -> f64 {
        match self {
            Operand::Node(node) => node.value(),
            Operand::Constant(value) => *value,
        }
    }

    /// Returns the operand as a node, allocating a constant leaf for literals.
    pub fn into_scalar(self) -> Scalar {
        match self {
            Operand::Node(node) => node.clone(),
            Operand::Constant(value) => Scalar::constant(value),
        }
    }
}

impl<'a> From<&'a Scalar> for Operand<'a> {
    fn from(node: &'a Scalar) -> Self {
        Operand::Node(node)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Constant(f64::from(value))
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Constant(f64::from(value))
    }
}

/// Builds the output node of an operation from its forward value and its
/// backward rule.
pub(crate) fn apply_op<B>(value: f64, op: OpKind, backward: B) -> Scalar
where
    B: BackwardOp + 'static,
{
    Scalar::from_op(value, op, Rc::new(backward))
}

// Re-export key functions
pub use activation::{relu_op, tanh_op, Activation};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use comparison::gt_op;
pub use math_elem::{exp_op, ln_op};
