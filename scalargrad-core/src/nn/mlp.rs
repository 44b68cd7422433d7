use crate::error::ScalarGradError;
use crate::nn::config::MlpConfig;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use log::debug;
use rand::Rng;

/// Multi-layer perceptron: a stack of [`Layer`]s, each feeding the next.
///
/// Layer `i` has `sizes[i]` inputs and `sizes[i + 1]` outputs, where `sizes`
/// is `[n_inputs]` followed by the configured layer sizes.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds an MLP with tanh activations and uniform `[-1, 1)` parameters.
    ///
    /// # Errors
    /// `InvalidConfig` if `n_inputs` is zero or `layer_sizes` is empty or
    /// contains a zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Mlp::from_config(&MlpConfig::new(n_inputs, layer_sizes), rng)
    }

    /// Builds an MLP from a validated configuration.
    pub fn from_config<R: Rng + ?Sized>(
        config: &MlpConfig,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut layers = Vec::with_capacity(config.num_layers());
        let mut fan_in = config.n_inputs;
        for (i, &size) in config.layer_sizes.iter().enumerate() {
            layers.push(Layer::new(
                fan_in,
                size,
                config.activation(i),
                config.init(i),
                &mut *rng,
            )?);
            fan_in = size;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp: {} inputs, layers {:?}, {} parameters",
            config.n_inputs,
            config.layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Builds an MLP from existing layers.
    ///
    /// # Errors
    /// `InvalidConfig` if there are no layers or consecutive layers do not
    /// connect.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].n_outputs() != pair[1].n_inputs() {
                return Err(ScalarGradError::InvalidConfig(format!(
                    "layer {} produces {} outputs but layer {} expects {} inputs",
                    i,
                    pair[0].n_outputs(),
                    i + 1,
                    pair[1].n_inputs()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", i, name), p))
            })
            .collect()
    }
}
