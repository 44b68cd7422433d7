use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::utils::testing::leaves;
use approx::{abs_diff_eq, relative_eq};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite-difference step must be strictly positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

// Errors raised while evaluating the function under test.
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds an expression from leaves created for `inputs`. The
/// analytical gradient of every input (one backward pass on fresh leaves) must
/// match \( \frac{f(v+\epsilon) - f(v-\epsilon)}{2\epsilon} \) within
/// `tolerance`, either absolutely or relatively.
///
/// # Errors
/// Returns the first failing input as `GradientMismatch`, or the error that
/// prevented the comparison.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Forward and backward pass on fresh leaves ---
    let input_leaves = leaves(inputs);
    let output = func(&input_leaves)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = input_leaves.iter().map(Scalar::grad).collect();

    // --- 2. Numerical gradient, one input at a time ---
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let perturbed = leaves(values);
        Ok(func(&perturbed)?.value())
    };

    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut values_plus = inputs.to_vec();
        values_plus[i] += epsilon;
        let loss_plus = evaluate(&values_plus)?;

        let mut values_minus = inputs.to_vec();
        values_minus[i] -= epsilon;
        let loss_minus = evaluate(&values_minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );
        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance);
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
