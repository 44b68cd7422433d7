use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use crate::scalar::Scalar;
use rand::Rng;

/// A fully connected layer: `n_outputs` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates a layer of `n_outputs` neurons with `n_inputs` inputs each.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_inputs })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidConfig` if the neurons do not all share `n_inputs`.
    pub fn from_neurons(n_inputs: usize, neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer expects neurons with {} inputs, found one with {}",
                n_inputs,
                bad.n_inputs()
            )));
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.output(inputs)).collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.neurons
            .iter_mut()
            .flat_map(|n| n.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }
}
