use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Init, Layer, Mlp, MlpConfig, Module, Neuron};
use scalargrad_core::{Activation, Scalar, ScalarGradError};

mod common;
use common::{init_logger, inputs};

#[test]
fn test_mlp_output_depends_on_every_parameter() -> Result<(), ScalarGradError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(2024);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    let out = mlp.forward(&inputs(&[2.0, 3.0, -1.0]))?;
    assert_eq!(out.len(), 1);
    assert!(out[0].value().abs() < 1.0);

    out[0].backward()?;
    let touched = mlp.parameters().iter().filter(|p| p.grad() != 0.0).count();
    assert_eq!(touched, mlp.num_parameters());
    Ok(())
}

#[test]
fn test_module_zero_grad_resets_parameters() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(1);
    let mlp = Mlp::new(2, &[3, 1], &mut rng)?;
    let out = mlp.forward(&inputs(&[0.5, -0.5]))?;
    out[0].backward()?;
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_relu_network_from_names() -> Result<(), ScalarGradError> {
    let config = MlpConfig::new(2, &[3, 1])
        .with_activation_names(&["relu", "linear"])?
        .with_init(Init::Normal {
            mean: 0.0,
            std: 0.5,
        });
    let mlp = Mlp::from_config(&config, &mut StdRng::seed_from_u64(77))?;
    let out = mlp.forward(&inputs(&[1.0, 2.0]))?;
    assert_eq!(out.len(), 1);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(2, &[], &mut rng),
        Err(ScalarGradError::InvalidConfig(_))
    ));
    assert!(matches!(
        MlpConfig::new(2, &[1]).with_activation_names(&["gelu"]),
        Err(ScalarGradError::UnknownActivation(_))
    ));
}

#[test]
fn test_hand_built_network() -> Result<(), ScalarGradError> {
    let hidden = Layer::from_neurons(
        2,
        vec![
            Neuron::from_values(vec![1.0, -1.0], 0.0, Activation::Relu),
            Neuron::from_values(vec![0.5, 0.5], 1.0, Activation::Relu),
        ],
    )?;
    let output = Layer::from_neurons(
        2,
        vec![Neuron::from_values(vec![2.0, -3.0], 0.5, Activation::Identity)],
    )?;
    let mlp = Mlp::from_layers(vec![hidden, output])?;

    let x = inputs(&[3.0, 1.0]);
    let out = mlp.forward(&x)?;
    // hidden = [relu(2), relu(3)] = [2, 3]; out = 0.5 + 4 - 9
    assert_eq!(out[0].value(), -4.5);

    out[0].backward()?;
    // d out / d x0 = 2 * 1 + (-3) * 0.5
    assert_eq!(x[0].grad(), 0.5);
    // d out / d x1 = 2 * (-1) + (-3) * 0.5
    assert_eq!(x[1].grad(), -3.5);
    Ok(())
}

#[test]
fn test_sgd_step_reduces_loss() -> Result<(), ScalarGradError> {
    init_logger();
    let mut mlp = Mlp::new(2, &[4, 1], &mut StdRng::seed_from_u64(5))?;
    let xs = [[1.0, -1.0], [-0.5, 0.5], [0.3, 0.9]];
    let ys = [1.0, -1.0, 0.5];

    let loss_of = |mlp: &Mlp| -> Result<Scalar, ScalarGradError> {
        let mut terms = Vec::with_capacity(xs.len());
        for (x, y) in xs.iter().zip(ys) {
            let out = mlp.forward(&inputs(x))?;
            terms.push((&out[0] - y).pow(2)?);
        }
        Ok(terms.into_iter().sum())
    };

    let before = loss_of(&mlp)?;
    before.backward()?;
    for param in mlp.parameters_mut() {
        let updated = param.value() - 0.01 * param.grad();
        param.set_value(updated);
    }
    let after = loss_of(&mlp)?;
    assert!(after.value() < before.value());
    Ok(())
}
