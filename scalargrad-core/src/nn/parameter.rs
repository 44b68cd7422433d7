use crate::scalar::Scalar;
use std::fmt;
use std::ops::Deref;

/// A trainable leaf of a [`Module`](crate::nn::Module).
///
/// Derefs to the wrapped [`Scalar`], so a parameter is used in expressions
/// like any other node (`&*weight * &x`).
#[derive(Clone)]
pub struct Parameter(Scalar);

impl Parameter {
    /// Creates a new parameter holding a fresh leaf with the given value.
    pub fn new(value: f64) -> Self {
        Parameter(Scalar::new(value))
    }

    /// Returns a handle to the underlying node.
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Replaces the parameter with a fresh leaf holding `value`.
    ///
    /// Node values are immutable, so an update allocates a new node (with a
    /// new identity and a zero gradient). Graphs built before the update keep
    /// referring to the previous node.
    pub fn set_value(&mut self, value: f64) {
        self.0 = Scalar::new(value);
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Scalar {
        self.0
    }
}

// Allow accessing the underlying Scalar immutably via Deref.
impl Deref for Parameter {
    type Target = Scalar;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}
