use crate::scalar::Scalar;

/// Checks a node's value and gradient against expected numbers.
/// Panics with the offending field if either differs by more than `tolerance`.
pub fn check_scalar_near(
    actual: &Scalar,
    expected_value: f64,
    expected_grad: f64,
    tolerance: f64,
) {
    let value = actual.value();
    let diff = (value - expected_value).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            value,
            expected_value,
            diff,
            tolerance
        );
    }

    let grad = actual.grad();
    let diff = (grad - expected_grad).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            grad,
            expected_grad,
            diff,
            tolerance
        );
    }
}

/// Builds one leaf per value, in order.
pub fn leaves(values: &[f64]) -> Vec<Scalar> {
    values.iter().copied().map(Scalar::new).collect()
}
