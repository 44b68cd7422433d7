// scalargrad-core/src/ops/comparison/gt.rs

use crate::ops::Operand;

/// Compares forward values: `a > b`.
///
/// Either side may be a node or a literal. No node is created and nothing
/// participates in differentiation.
pub fn gt_op<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> bool {
    a.into().value() > b.into().value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Scalar;

    #[test]
    fn test_gt_nodes_and_literals() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(1.0);
        assert!(gt_op(&a, &b));
        assert!(!gt_op(&b, &a));
        assert!(a.gt(1.5));
        assert!(!a.gt(2.0));
        assert!(gt_op(3.0, &a));
    }

    #[test]
    fn test_gt_creates_no_edge() {
        let a = Scalar::new(2.0);
        let _ = a.gt(1.0);
        assert!(a.is_leaf());
        assert_eq!(a.grad(), 0.0);
    }
}
