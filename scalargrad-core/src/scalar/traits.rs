// src/scalar/traits.rs

use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

// --- Arithmetic operators ---
//
// Addition, subtraction, multiplication and negation cannot fail, so they are
// exposed as operators. Each binary operator accepts owned or borrowed nodes on
// both sides, and an `f64` literal on either side (auto-promoted to a constant
// leaf).

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<&Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&Scalar::constant(self), rhs)
            }
        }

        impl $trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&Scalar::constant(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}

// --- Folding ---

impl Sum for Scalar {
    /// Sums nodes left to right. An empty iterator yields a constant `0.0`.
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.reduce(|acc, x| &acc + &x)
            .unwrap_or_else(Scalar::zero)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::constant(1.0)
    }
}

// --- Formatting ---

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Scalar(id={}, value={}, grad={}, op={})",
                guard.id, guard.value, guard.grad, guard.op
            ),
            Err(_) => write!(f, "Scalar(<borrowed>)"),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(f, "Scalar({} | grad = {})", guard.value, guard.grad),
            Err(_) => write!(f, "Scalar(<borrowed>)"),
        }
    }
}
