// src/scalar/create.rs

use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;

impl Scalar {
    /// Creates a leaf node: no parents, operation `Leaf`, gradient 0.
    ///
    /// Leaves are the inputs and trainable parameters of an expression.
    /// Always succeeds, whatever the value.
    pub fn new(value: f64) -> Self {
        Scalar::from_data(ScalarData::new_leaf(value))
    }

    /// Creates an anonymous constant leaf.
    ///
    /// Used when a numeric literal appears as an operand (`&x + 2.0`). It is
    /// a regular leaf and also receives a gradient during backward.
    pub fn constant(value: f64) -> Self {
        Scalar::new(value)
    }
}

/// Creates a leaf node with the given value. See [`Scalar::new`].
pub fn leaf(value: f64) -> Scalar {
    Scalar::new(value)
}

/// Creates an anonymous constant leaf. See [`Scalar::constant`].
pub fn constant(value: f64) -> Scalar {
    Scalar::constant(value)
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::constant(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::constant(f64::from(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::constant(f64::from(value))
    }
}
