use scalargrad_core::autograd::{check_grad, GradCheckError};
use scalargrad_core::{Activation, Scalar, ScalarGradError};

mod common;
use common::{init_logger, EPSILON, TOLERANCE};

fn assert_grads_match<F>(func: F, points: &[&[f64]])
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    init_logger();
    for point in points {
        if let Err(e) = check_grad(&func, point, EPSILON, TOLERANCE) {
            panic!("gradient check failed at {:?}: {}", point, e);
        }
    }
}

#[test]
fn test_add_mul() {
    assert_grads_match(
        |v| Ok(&(&v[0] * &v[1]) + &v[0]),
        &[&[1.0, 2.0], &[-3.5, 0.25], &[0.0, -7.0]],
    );
}

#[test]
fn test_sub_neg() {
    assert_grads_match(
        |v| Ok(-(&v[0] - &(&v[1] * 4.0))),
        &[&[1.0, 2.0], &[-0.3, 5.0]],
    );
}

#[test]
fn test_pow() {
    for p in [2.0, 3.0, 0.5, -1.0, -2.5] {
        assert_grads_match(move |v| v[0].pow(p), &[&[0.7], &[1.9], &[3.2]]);
    }
    // Integer exponents accept negative bases.
    assert_grads_match(|v| v[0].pow(3), &[&[-1.3]]);
}

#[test]
fn test_div() {
    assert_grads_match(|v| v[0].div(&v[1]), &[&[1.0, 2.0], &[-4.0, 0.5], &[3.0, -1.5]]);
    assert_grads_match(|v| v[0].div(4.0), &[&[2.0]]);
}

#[test]
fn test_exp_ln() {
    assert_grads_match(|v| Ok(v[0].exp()), &[&[-2.0], &[0.0], &[1.5]]);
    assert_grads_match(|v| v[0].log(), &[&[0.1], &[1.0], &[12.0]]);
    assert_grads_match(|v| v[0].exp().log(), &[&[0.4]]);
}

#[test]
fn test_tanh_relu() {
    assert_grads_match(|v| Ok(v[0].tanh()), &[&[-1.2], &[0.0], &[0.8]]);
    // Away from the kink at 0.
    assert_grads_match(|v| Ok(v[0].relu()), &[&[-0.5], &[0.5]]);
}

#[test]
fn test_composition() {
    // A single neuron with a squared error on top.
    assert_grads_match(
        |v| {
            let affine = &(&(&v[0] * &v[1]) + &(&v[2] * &v[3])) + &v[4];
            let out = affine.activate(Activation::Tanh)?;
            (&out - 0.5).pow(2)
        },
        &[&[0.3, -1.1, 0.8, 0.4, 0.1], &[-2.0, 0.5, 1.0, 1.0, -0.2]],
    );
}

#[test]
fn test_shared_subexpression() {
    // x is used through three different paths.
    assert_grads_match(
        |v| {
            let x = &v[0];
            let s = x.exp();
            let t = &(x * x) + &s;
            Ok(&t * &s.tanh())
        },
        &[&[0.2], &[-0.9]],
    );
}

#[test]
fn test_domain_error_reported_as_forward_failure() {
    let result = check_grad(|v| v[0].log(), &[0.0], EPSILON, TOLERANCE);
    assert_eq!(
        result,
        Err(GradCheckError::ForwardPassError(ScalarGradError::LogDomain {
            value: 0.0
        }))
    );
}
