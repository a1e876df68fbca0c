//! End-to-end fit on two Gaussian clusters.

use super::quiet_params;
use ndarray::array;
use softmax_classifier::testing::{assert_rows_are_distributions, two_blobs, DEFAULT_TOLERANCE};
use softmax_classifier::{
    seeded_rng, MetricFn, MulticlassAccuracy, MulticlassLogLoss, SoftmaxClassifier,
};

#[test]
fn two_blobs_are_separated() {
    let (x, y) = two_blobs(50, 0.5, 42);
    let params = quiet_params(0.1, 1e-4, 1000, 50);

    let mut clf = SoftmaxClassifier::new();
    let history = clf
        .train(x.view(), y.view(), &params, &mut seeded_rng(42))
        .unwrap();
    assert_eq!(history.len(), 1000);

    let held_out = array![[-3.0f32, -3.0], [3.0, 3.0]];
    assert_eq!(clf.predict(held_out.view()).unwrap(), array![0, 1]);

    let accuracy = clf.evaluate(x.view(), y.view(), &MulticlassAccuracy).unwrap();
    assert!(accuracy >= 0.95, "training accuracy {accuracy}");
}

#[test]
fn three_clusters_in_three_dimensions() {
    let centers: [&[f32]; 3] = [&[4.0, 0.0, 0.0], &[0.0, 4.0, 0.0], &[0.0, 0.0, 4.0]];
    let (x, y) = softmax_classifier::testing::gaussian_blobs(&centers, 60, 0.7, 7);
    let params = quiet_params(0.1, 1e-4, 1500, 64);

    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &params, &mut seeded_rng(7)).unwrap();
    assert_eq!(clf.n_classes(), Some(3));
    assert_eq!(clf.n_features(), Some(3));

    let probs = clf.predict_proba(x.view()).unwrap();
    assert_eq!(probs.dim(), (180, 3));
    assert_rows_are_distributions(probs.view(), DEFAULT_TOLERANCE);

    let accuracy = MulticlassAccuracy.compute(probs.view(), y.view());
    assert!(accuracy >= 0.95, "training accuracy {accuracy}");
    let logloss = MulticlassLogLoss.compute(probs.view(), y.view());
    assert!(logloss < (3.0f64).ln(), "logloss {logloss} no better than uniform");
}

#[test]
fn predict_is_pure() {
    let (x, y) = two_blobs(20, 0.5, 3);
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &quiet_params(0.1, 1e-4, 100, 20), &mut seeded_rng(3))
        .unwrap();

    let weights = clf.weights().unwrap().to_owned();
    let bias = clf.bias().unwrap().to_owned();
    let first = clf.predict(x.view()).unwrap();
    let second = clf.predict(x.view()).unwrap();

    assert_eq!(first, second);
    assert_eq!(weights, clf.weights().unwrap());
    assert_eq!(bias, clf.bias().unwrap());
}

#[test]
fn predict_output_shape_and_range() {
    let (x, y) = two_blobs(10, 0.5, 4);
    let mut clf = SoftmaxClassifier::new();
    clf.train(x.view(), y.view(), &quiet_params(0.1, 1e-4, 50, 10), &mut seeded_rng(4))
        .unwrap();

    let queries = array![[0.0f32, 0.0], [1.0, -1.0], [-5.0, 5.0], [10.0, 10.0], [-10.0, -10.0]];
    let preds = clf.predict(queries.view()).unwrap();
    assert_eq!(preds.len(), 5);
    assert!(preds.iter().all(|&c| c < 2));

    let empty = ndarray::Array2::<f32>::zeros((0, 2));
    assert_eq!(clf.predict(empty.view()).unwrap().len(), 0);
}
