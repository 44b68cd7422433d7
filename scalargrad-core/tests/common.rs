use std::sync::Once;

static INIT: Once = Once::new();

// Installs env_logger once per test binary; RUST_LOG controls the output.
#[allow(dead_code)]
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// Leaves for raw input values.
#[allow(unused_imports)]
pub use scalargrad_core::utils::testing::leaves as inputs;

#[allow(dead_code)]
pub const EPSILON: f64 = 1e-6;
#[allow(dead_code)]
pub const TOLERANCE: f64 = 1e-4;
