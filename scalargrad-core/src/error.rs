use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Logarithm domain error: ln({value}) requires a strictly positive argument")]
    LogDomain { value: f64 },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Power domain error: {base} ** {exponent} is not a real number")]
    PowDomain { base: f64, exponent: f64 },

    #[error("Invalid exponent: {0}")]
    InvalidExponent(String),

    #[error("Unknown activation '{0}'")]
    UnknownActivation(String),

    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Backward pass error: {0}")]
    BackwardError(String),
}
