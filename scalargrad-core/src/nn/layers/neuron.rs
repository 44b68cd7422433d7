use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use crate::scalar::Scalar;
use rand::Rng;

/// A single neuron: `activation(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias drawn from `init`.
    ///
    /// # Errors
    /// `ScalarGradError::InvalidConfig` if `init` cannot be sampled.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let mut values = init.sample_n(n_inputs + 1, rng)?;
        let bias = values.pop().unwrap_or_default();
        Ok(Self::from_values(values, bias, activation))
    }

    /// Creates a neuron with explicit weight and bias values.
    pub fn from_values(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    /// Number of inputs expected by `forward`.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes the neuron output as a single node.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `inputs.len()` differs from the number of weights.
    /// * Any error of the activation (`LogDomain` for `Activation::Ln`).
    pub fn output(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        // b + Σ wᵢ·xᵢ
        let affine = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.scalar().clone(), |acc, (w, x)| &acc + &(&**w * x));
        self.activation.apply(&affine)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        Ok(vec![self.output(inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.weights
            .iter_mut()
            .chain(std::iter::once(&mut self.bias))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w))
            .chain(std::iter::once(("b".to_string(), &self.bias)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_forward_linear() -> Result<(), ScalarGradError> {
        let neuron = Neuron::from_values(vec![2.0, -1.0], 0.5, Activation::Identity);
        let x = [Scalar::new(1.0), Scalar::new(3.0)];
        let out = neuron.output(&x)?;
        // 0.5 + 2*1 - 1*3
        assert_relative_eq!(out.value(), -0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_neuron_backward_tanh() -> Result<(), ScalarGradError> {
        let neuron = Neuron::from_values(vec![-3.0, 1.0], 6.881_373_587_019_543, Activation::Tanh);
        let x = [Scalar::new(2.0), Scalar::new(0.0)];
        let out = neuron.output(&x)?;
        let t = out.value();
        assert_relative_eq!(t, 0.881_373_587_019_543f64.tanh(), epsilon = 1e-12);
        out.backward()?;

        let local = 1.0 - t * t;
        assert_relative_eq!(neuron.weights()[0].grad(), local * 2.0, epsilon = 1e-12);
        assert_relative_eq!(neuron.weights()[1].grad(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(neuron.bias().grad(), local, epsilon = 1e-12);
        assert_relative_eq!(x[0].grad(), local * -3.0, epsilon = 1e-12);
        assert_relative_eq!(x[1].grad(), local * 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_neuron_input_mismatch() {
        let neuron = Neuron::from_values(vec![1.0, 1.0, 1.0], 0.0, Activation::Tanh);
        let err = neuron.forward(&[Scalar::new(1.0)]).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::DimensionMismatch {
                expected: 3,
                actual: 1,
                operation: "Neuron::forward".to_string(),
            }
        );
    }

    #[test]
    fn test_neuron_parameters() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(3);
        let neuron = Neuron::new(4, Activation::Relu, Init::default(), &mut rng)?;
        assert_eq!(neuron.n_inputs(), 4);
        assert_eq!(neuron.num_parameters(), 5);
        let names: Vec<String> = neuron
            .named_parameters()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["w0", "w1", "w2", "w3", "b"]);
        Ok(())
    }
}
