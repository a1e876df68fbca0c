//! Bias gradient reductions.
//!
//! `BiasGradient::Aggregate` sums every entry of the score gradient and
//! applies that scalar to all classes. Rows of `probs - onehot` sum to zero,
//! so the update is ~0 and the bias never leaves its zero initialization.
//! These tests pin that behavior down next to the per-class default.

use super::quiet_params;
use ndarray::{s, Array1};
use softmax_classifier::testing::gaussian_blobs;
use softmax_classifier::{seeded_rng, BiasGradient, SoftmaxClassifier, SoftmaxParams};

/// Clusters away from the origin so a bias helps.
fn shifted_clusters() -> (ndarray::Array2<f32>, ndarray::Array1<usize>) {
    let centers: [&[f32]; 3] = [&[5.0, 5.0], &[7.0, 5.0], &[6.0, 7.0]];
    gaussian_blobs(&centers, 40, 0.4, 21)
}

fn params(bias_gradient: BiasGradient) -> SoftmaxParams {
    SoftmaxParams {
        bias_gradient,
        ..quiet_params(0.05, 1e-4, 800, 40)
    }
}

#[test]
fn aggregate_bias_stays_at_zero() {
    let (x, y) = shifted_clusters();
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &params(BiasGradient::Aggregate), &mut seeded_rng(21))
        .unwrap();

    let bias = clf.bias().unwrap();
    assert!(bias.iter().all(|b| b.abs() < 1e-4), "bias moved: {bias}");
    assert!(bias.iter().all(|&b| (b - bias[0]).abs() < 1e-6));
}

#[test]
fn per_class_bias_moves_independently() {
    let (x, y) = shifted_clusters();
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &params(BiasGradient::PerClass), &mut seeded_rng(21))
        .unwrap();

    let bias = clf.bias().unwrap();
    let spread = bias.iter().cloned().fold(f32::MIN, f32::max)
        - bias.iter().cloned().fold(f32::MAX, f32::min);
    assert!(spread > 1e-3, "per-class bias did not separate: {bias}");
    // Per-class gradients sum to zero across classes.
    assert!(bias.sum().abs() < 1e-4);
}

#[test]
fn aggregate_gradient_is_uniform_across_classes() {
    let (x, _) = shifted_clusters();
    let mut clf = SoftmaxClassifier::new();
    clf.initialize(2, 3, &mut seeded_rng(23)).unwrap();

    // Only class 0, so the per-class gradient is far from zero.
    let first_cluster = x.slice(s![..40, ..]);
    let zeros = Array1::<usize>::zeros(40);

    let out = clf
        .loss(first_cluster, zeros.view(), 0.0, BiasGradient::Aggregate)
        .unwrap();
    assert!(out.d_bias.iter().all(|&g| g == out.d_bias[0]));
    assert!(out.d_bias[0].abs() < 1e-5);

    let out = clf
        .loss(first_cluster, zeros.view(), 0.0, BiasGradient::PerClass)
        .unwrap();
    assert!(out.d_bias[0] < -0.5);
    assert!(out.d_bias[1] > 0.2);
    assert!(out.d_bias[2] > 0.2);
}
