// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;
use crate::scalar::Scalar;

/// Subtracts `b` from `a`, built as `a + (-b)`.
///
/// `b` may be a node or a numeric literal (promoted to a constant leaf).
pub fn sub_op<'a>(a: &Scalar, b: impl Into<Operand<'a>>) -> Scalar {
    let b = b.into().into_scalar();
    add_op(a, &neg_op(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScalarGradError;

    #[test]
    fn test_sub_forward_backward() -> Result<(), ScalarGradError> {
        let a = Scalar::new(5.0);
        let b = Scalar::new(2.0);
        let c = sub_op(&a, &b);
        assert_eq!(c.value(), 3.0);
        c.backward()?;
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_operators_with_literals() -> Result<(), ScalarGradError> {
        let a = Scalar::new(1.5);
        let c = &a - 0.5;
        assert_eq!(c.value(), 1.0);
        let d = 2.0 - &a;
        assert_eq!(d.value(), 0.5);
        d.backward()?;
        assert_eq!(a.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_self_is_zero_with_cancelling_grads() -> Result<(), ScalarGradError> {
        let x = Scalar::new(7.0);
        let y = &x - &x;
        assert_eq!(y.value(), 0.0);
        y.backward()?;
        assert_eq!(x.grad(), 0.0);
        Ok(())
    }
}
