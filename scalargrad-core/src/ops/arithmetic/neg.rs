// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::scalar::Scalar;

/// Negates a node: `-a`, built as `a * -1`.
///
/// The returned node is a `Mul` node; its gradient rule is the one of
/// multiplication.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(a, -1.0)
}
