use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::ops::activation::Activation;

/// Describes the shape and per-layer settings of an [`Mlp`](crate::nn::Mlp).
///
/// `activations` and `initializers` are either empty (defaults apply to every
/// layer: tanh and uniform `[-1, 1)`) or hold exactly one entry per layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MlpConfig {
    pub n_inputs: usize,
    pub layer_sizes: Vec<usize>,
    pub activations: Vec<Activation>,
    pub initializers: Vec<Init>,
}

impl MlpConfig {
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Self {
        MlpConfig {
            n_inputs,
            layer_sizes: layer_sizes.to_vec(),
            activations: Vec::new(),
            initializers: Vec::new(),
        }
    }

    /// Sets one activation per layer.
    pub fn with_activations(mut self, activations: &[Activation]) -> Self {
        self.activations = activations.to_vec();
        self
    }

    /// Sets one activation per layer, by name (`"tanh"`, `"relu"`, ...).
    ///
    /// # Errors
    /// `UnknownActivation` for the first name that does not parse.
    pub fn with_activation_names(mut self, names: &[&str]) -> Result<Self, ScalarGradError> {
        self.activations = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Activation>, _>>()?;
        Ok(self)
    }

    /// Sets one initializer per layer.
    pub fn with_initializers(mut self, initializers: &[Init]) -> Self {
        self.initializers = initializers.to_vec();
        self
    }

    /// Uses the same initializer for every layer.
    pub fn with_init(mut self, init: Init) -> Self {
        self.initializers = vec![init; self.layer_sizes.len()];
        self
    }

    pub fn num_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Activation of layer `i`, tanh when none were given.
    pub fn activation(&self, i: usize) -> Activation {
        self.activations.get(i).copied().unwrap_or_default()
    }

    /// Initializer of layer `i`, uniform `[-1, 1)` when none were given.
    pub fn init(&self, i: usize) -> Init {
        self.initializers.get(i).copied().unwrap_or_default()
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// `InvalidConfig` when there are no inputs, no layers, an empty layer,
    /// per-layer lists of the wrong length, or an initializer that cannot be
    /// sampled.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer {} has no neurons",
                i
            )));
        }
        let n_layers = self.layer_sizes.len();
        if !self.activations.is_empty() && self.activations.len() != n_layers {
            return Err(ScalarGradError::InvalidConfig(format!(
                "expected {} activations (one per layer), got {}",
                n_layers,
                self.activations.len()
            )));
        }
        if !self.initializers.is_empty() && self.initializers.len() != n_layers {
            return Err(ScalarGradError::InvalidConfig(format!(
                "expected {} initializers (one per layer), got {}",
                n_layers,
                self.initializers.len()
            )));
        }
        for init in &self.initializers {
            init.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MlpConfig::new(3, &[4, 4, 1]);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.num_layers(), 3);
        assert_eq!(config.activation(2), Activation::Tanh);
        assert_eq!(config.init(0), Init::default());
    }

    #[test]
    fn test_activation_names() -> Result<(), ScalarGradError> {
        let config = MlpConfig::new(2, &[8, 1]).with_activation_names(&["relu", "linear"])?;
        assert_eq!(config.activations, vec![Activation::Relu, Activation::Identity]);
        assert_eq!(config.validate(), Ok(()));

        let err = MlpConfig::new(2, &[1]).with_activation_names(&["softmax"]);
        assert_eq!(
            err,
            Err(ScalarGradError::UnknownActivation("softmax".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            MlpConfig::default(),
            MlpConfig::new(0, &[1]),
            MlpConfig::new(2, &[]),
            MlpConfig::new(2, &[3, 0, 1]),
            MlpConfig::new(2, &[3, 1]).with_activations(&[Activation::Relu]),
            MlpConfig::new(2, &[3]).with_initializers(&[Init::default(), Init::default()]),
            MlpConfig::new(2, &[3]).with_init(Init::Uniform { low: 1.0, high: 0.0 }),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ScalarGradError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
