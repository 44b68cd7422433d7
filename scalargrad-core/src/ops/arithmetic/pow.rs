// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_op;
use crate::scalar::Scalar;
use crate::scalar_data::OpKind;
use num_traits::ToPrimitive;

// --- Backward Operation ---

/// Backward pass structure for `a ** p` with a constant exponent.
///
/// \( \frac{d\,a^p}{da} = p \cdot a^{p-1} \). The exponent is not a node, so it
/// receives no gradient.
#[derive(Debug)]
struct PowBackward {
    a: Scalar,
    a_value: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // a^0 is constant; avoids 0 * inf at a == 0.
        let local_grad = if self.exponent == 0.0 {
            0.0
        } else {
            self.exponent * self.a_value.powf(self.exponent - 1.0)
        };
        Ok(vec![local_grad * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.a.clone()]
    }
}

// --- Forward Operation ---

/// Raises a node to a constant power: `a ** exponent`.
///
/// The exponent is a plain number (any `ToPrimitive` type: `2`, `0.5`,
/// `-1.0`...). A node cannot be used as exponent, since there is no rule to
/// differentiate with respect to it.
///
/// # Errors
/// * `InvalidExponent` if the exponent is not representable as a finite `f64`.
/// * `DivisionByZero` if `a` is zero and the exponent is negative.
/// * `PowDomain` if `a` is negative and the exponent is not an integer.
///
/// On error no node is created.
pub fn pow_op<E: ToPrimitive>(a: &Scalar, exponent: E) -> Result<Scalar, ScalarGradError> {
    let exponent = exponent
        .to_f64()
        .filter(|p| p.is_finite())
        .ok_or_else(|| {
            ScalarGradError::InvalidExponent(
                "exponent must be a finite real constant".to_string(),
            )
        })?;
    let a_value = a.value();

    if a_value == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::DivisionByZero);
    }
    if a_value < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::PowDomain {
            base: a_value,
            exponent,
        });
    }

    Ok(apply_op(
        a_value.powf(exponent),
        OpKind::Pow(exponent),
        PowBackward {
            a: a.clone(),
            a_value,
            exponent,
        },
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
