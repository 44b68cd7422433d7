use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Initialization scheme for parameters.
///
/// Values are drawn from a caller-provided RNG so that a seeded
/// `rand::rngs::StdRng` makes a network reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform in `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter gets the same value.
    Constant(f64),
}

impl Default for Init {
    /// Uniform in `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks that the scheme can be sampled.
    ///
    /// # Errors
    /// `ScalarGradError::InvalidConfig` if bounds are not finite, `low >= high`,
    /// or the standard deviation is negative or not finite.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low >= high {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "normal init requires a finite mean and std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "constant init requires a finite value, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, ScalarGradError> {
        self.validate()?;
        let values = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|e| ScalarGradError::InvalidConfig(e.to_string()))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Constant(value) => vec![value; n],
        };
        Ok(values)
    }
}
