use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, tanh_op, Activation};
use crate::ops::arithmetic::{div_op, pow_op};
use crate::ops::comparison::gt_op;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::ops::Operand;
use crate::scalar::Scalar;
use num_traits::ToPrimitive;

impl Scalar {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow<E: ToPrimitive>(&self, exponent: E) -> Result<Scalar, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Divides this node by a node or a literal. See [`div_op`].
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Scalar, ScalarGradError> {
        div_op(self, rhs)
    }

    /// `e^self`. See [`exp_op`].
    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }

    /// Natural logarithm. See [`ln_op`].
    pub fn log(&self) -> Result<Scalar, ScalarGradError> {
        ln_op(self)
    }

    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }

    /// Rectified linear unit. See [`relu_op`].
    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }

    /// Applies an activation chosen at runtime.
    pub fn activate(&self, activation: Activation) -> Result<Scalar, ScalarGradError> {
        activation.apply(self)
    }

    /// Value comparison `self > other`; creates no graph edge.
    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        gt_op(self, other)
    }
}
