use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::scalar::Scalar;
use log::debug;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module turns a slice of input nodes into output nodes using only the
/// engine's operations, and exposes its trainable parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: the input nodes. Raw numbers can be wrapped with
    ///   [`Scalar::new`].
    ///
    /// # Returns
    /// The output nodes, or a `ScalarGradError` (wrong input count, domain
    /// error in the activation).
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError>;

    /// Returns all learnable parameters of the module, sub-modules included.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Mutable access to the parameters, for caller-side updates.
    fn parameters_mut(&mut self) -> Vec<&mut Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layer0.neuron1.w2"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Total number of parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter.
    ///
    /// The engine never resets gradients on its own; call this between two
    /// backward passes.
    fn zero_grad(&self) {
        let params = self.parameters();
        debug!("zero_grad: resetting {} parameters", params.len());
        for param in params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock module for tests
    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
            Ok(inputs.iter().map(|x| x * &*self.param).collect())
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
            vec![&mut self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            vec![("param".to_string(), &self.param)]
        }
    }

    #[test]
    fn test_module_zero_grad() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Parameter::new(2.0),
        };
        let out = module.forward(&[Scalar::new(5.0)])?;
        out[0].backward()?;
        assert_eq!(module.param.grad(), 5.0);
        assert_eq!(module.num_parameters(), 1);

        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        Ok(())
    }
}
