//! # Training a small MLP with scalargrad
//!
//! Fits a 3-4-4-1 tanh network to four labelled points with plain gradient
//! descent. The loop lives entirely on the caller side:
//! 1. forward pass over the dataset,
//! 2. sum of squared errors as the loss,
//! 3. `backward` on the loss,
//! 4. an SGD step through `parameters_mut` / `set_value`,
//! 5. `zero_grad` before the next epoch.
//!
//! Run with `cargo run --example basic_mlp` (set `RUST_LOG=debug` to see the
//! engine's logs).

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{Scalar, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mut mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("MLP with {} parameters", mlp.num_parameters());

    let learning_rate = 0.05;
    let num_epochs = 50;

    for epoch in 0..num_epochs {
        // --- Forward pass and loss ---
        let mut predictions = Vec::with_capacity(xs.len());
        let mut errors = Vec::with_capacity(xs.len());
        for (x, &y) in xs.iter().zip(ys.iter()) {
            let inputs: Vec<Scalar> = x.iter().copied().map(Scalar::new).collect();
            let out = mlp.forward(&inputs)?.remove(0);
            errors.push((&out - y).pow(2)?);
            predictions.push(out);
        }
        let loss: Scalar = errors.into_iter().sum();

        // --- Backward pass ---
        mlp.zero_grad();
        loss.backward()?;

        // --- SGD step ---
        for param in mlp.parameters_mut() {
            let updated = param.value() - learning_rate * param.grad();
            param.set_value(updated);
        }

        if epoch % 10 == 0 || epoch == num_epochs - 1 {
            let preds: Vec<f64> = predictions.iter().map(Scalar::value).collect();
            println!("Epoch {:>3}: loss = {:.6}, predictions = {:.3?}", epoch, loss.value(), preds);
        }
    }

    for (name, param) in mlp.named_parameters().into_iter().take(4) {
        println!("{} = {:.4}", name, param.value());
    }

    Ok(())
}
