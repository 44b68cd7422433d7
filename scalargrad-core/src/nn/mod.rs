// src/nn/mod.rs
// Neural-network composition on top of the scalar engine: neurons, layers, MLP.

pub mod config;
pub mod init;
pub mod layers;
pub mod mlp;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use config::MlpConfig;
pub use init::Init;
pub use layers::{Layer, Neuron};
pub use mlp::Mlp;
pub use module::Module;
pub use parameter::Parameter;
