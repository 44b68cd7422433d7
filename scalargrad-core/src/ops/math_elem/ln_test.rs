// scalargrad-core/src/ops/math_elem/ln_test.rs

use super::ln_op;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_basic() -> Result<(), ScalarGradError> {
    let a = Scalar::new(std::f64::consts::E);
    let b = ln_op(&a)?;
    assert_relative_eq!(b.value(), 1.0, epsilon = 1e-12);
    assert_eq!(b.op(), OpKind::Ln);
    Ok(())
}

#[test]
fn test_ln_backward() -> Result<(), ScalarGradError> {
    let a = Scalar::new(4.0);
    let b = a.log()?;
    b.backward()?;
    assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_ln_reused_node_accumulates() -> Result<(), ScalarGradError> {
    // z = ln(x) * ln(x) => dz/dx = 2 ln(x) / x
    let x = Scalar::new(2.0);
    let y = x.log()?;
    let z = &y * &y;
    z.backward()?;
    assert_relative_eq!(x.grad(), 2.0 * 2.0f64.ln() / 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_ln_non_positive_fails() {
    let a = Scalar::new(-1.0);
    assert_eq!(
        ln_op(&a).unwrap_err(),
        ScalarGradError::LogDomain { value: -1.0 }
    );
    assert_eq!(a.value(), -1.0);
    assert_eq!(a.grad(), 0.0);

    let zero = Scalar::new(0.0);
    assert_eq!(
        ln_op(&zero).unwrap_err(),
        ScalarGradError::LogDomain { value: 0.0 }
    );
}

#[test]
fn test_ln_nan_fails() {
    let a = Scalar::new(f64::NAN);
    assert!(matches!(ln_op(&a), Err(ScalarGradError::LogDomain { .. })));
}
