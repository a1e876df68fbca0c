//! L2 regularization strength.

use super::quiet_params;
use rstest::rstest;
use softmax_classifier::testing::two_blobs;
use softmax_classifier::{seeded_rng, SoftmaxClassifier};

fn trained_sq_norm(reg: f32) -> f64 {
    let (x, y) = two_blobs(50, 0.5, 11);
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &quiet_params(0.1, reg, 1000, 50), &mut seeded_rng(11))
        .unwrap();
    clf.linear().unwrap().weights_sq_norm()
}

#[test]
fn strong_reg_shrinks_weights() {
    let weak = trained_sq_norm(1e-4);
    let strong = trained_sq_norm(1.0);
    assert!(strong < weak, "reg=1.0 gave {strong}, reg=1e-4 gave {weak}");
}

#[rstest]
#[case(0.0, 0.01)]
#[case(0.01, 0.1)]
#[case(0.1, 1.0)]
fn norm_is_monotone_in_reg(#[case] lower: f32, #[case] higher: f32) {
    assert!(trained_sq_norm(higher) < trained_sq_norm(lower));
}

#[test]
fn reg_term_appears_in_loss() {
    let (x, y) = two_blobs(20, 0.5, 12);
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &quiet_params(0.1, 0.0, 200, 20), &mut seeded_rng(12))
        .unwrap();

    let sq_norm = clf.linear().unwrap().weights_sq_norm();
    let plain = clf
        .loss(x.view(), y.view(), 0.0, Default::default())
        .unwrap()
        .loss;
    let penalized = clf
        .loss(x.view(), y.view(), 2.0, Default::default())
        .unwrap()
        .loss;
    assert!((penalized - plain - sq_norm).abs() < 1e-4 * sq_norm.max(1.0));
}
