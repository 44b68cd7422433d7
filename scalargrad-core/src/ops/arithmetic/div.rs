// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::Operand;
use crate::scalar::Scalar;

/// Divides `a` by `b`, built as `a * b ** -1`.
///
/// `b` may be a node or a numeric literal (promoted to a constant leaf).
///
/// # Errors
/// Returns `ScalarGradError::DivisionByZero` if the divisor's value is exactly
/// zero. The check happens before any node is allocated.
pub fn div_op<'a>(a: &Scalar, b: impl Into<Operand<'a>>) -> Result<Scalar, ScalarGradError> {
    let b = b.into();
    if b.value() == 0.0 {
        return Err(ScalarGradError::DivisionByZero);
    }
    let reciprocal = pow_op(&b.into_scalar(), -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
