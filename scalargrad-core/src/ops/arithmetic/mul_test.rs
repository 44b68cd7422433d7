// scalargrad-core/src/ops/arithmetic/mul_test.rs

use super::mul_op;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;

#[test]
fn test_mul_forward_backward() -> Result<(), ScalarGradError> {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.value(), 6.0);
    assert_eq!(c.op(), OpKind::Mul);
    c.backward()?;
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_square_by_self_multiplication() -> Result<(), ScalarGradError> {
    let x = Scalar::new(3.0);
    let y = &x * &x;
    assert_eq!(y.value(), 9.0);
    y.backward()?;
    assert_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_mul_literal_on_both_sides() -> Result<(), ScalarGradError> {
    let x = Scalar::new(-4.0);
    let y = &x * 0.5;
    let z = 3.0 * &y;
    assert_eq!(z.value(), -6.0);
    z.backward()?;
    assert_eq!(y.grad(), 3.0);
    assert_eq!(x.grad(), 1.5);
    Ok(())
}

#[test]
fn test_mul_chain_rule() -> Result<(), ScalarGradError> {
    // loss = a * b + a; d/da = b + 1, d/db = a
    let a = Scalar::new(3.0);
    let b = Scalar::new(2.0);
    let loss = &(&a * &b) + &a;
    loss.backward()?;
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 3.0);
    Ok(())
}
