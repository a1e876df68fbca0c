//! Loss history behavior across training runs.

use super::{head_tail_means, quiet_params};
use softmax_classifier::testing::two_blobs;
use softmax_classifier::{seeded_rng, SoftmaxClassifier};

#[test]
fn history_length_matches_iterations() {
    let (x, y) = two_blobs(10, 0.5, 0);
    for n_iters in [1, 7, 250] {
        let mut clf = SoftmaxClassifier::new();
        let history = clf
            .train(x.view(), y.view(), &quiet_params(1e-3, 1e-5, n_iters, 8), &mut seeded_rng(0))
            .unwrap();
        assert_eq!(history.len(), n_iters);
        assert!(history.iter().all(|l| l.is_finite() && *l >= 0.0));
    }
}

#[test]
fn initial_loss_is_near_log_c() {
    let (x, y) = two_blobs(50, 0.5, 1);
    let mut clf = SoftmaxClassifier::new();
    let history = clf
        .train(x.view(), y.view(), &quiet_params(1e-3, 1e-5, 1, 100), &mut seeded_rng(1))
        .unwrap();
    // Tiny initial weights give near-uniform probabilities.
    assert!((history[0] - (2.0f64).ln()).abs() < 0.05, "first loss {}", history[0]);
}

#[test]
fn loss_decreases_on_separable_data() {
    let (x, y) = two_blobs(50, 0.5, 2);
    let mut clf = SoftmaxClassifier::new();
    let history = clf
        .train(x.view(), y.view(), &quiet_params(0.1, 1e-4, 600, 50), &mut seeded_rng(2))
        .unwrap();

    let (head, tail) = head_tail_means(&history, 0.1);
    assert!(tail < head, "tail mean {tail} not below head mean {head}");
}

#[test]
fn same_seed_reproduces_everything() {
    let (x, y) = two_blobs(30, 0.8, 5);
    let params = quiet_params(0.05, 1e-3, 200, 16);

    let mut a = SoftmaxClassifier::new();
    let mut b = SoftmaxClassifier::new();
    let history_a = a.train(x.view(), y.view(), &params, &mut seeded_rng(99)).unwrap();
    let history_b = b.train(x.view(), y.view(), &params, &mut seeded_rng(99)).unwrap();

    assert_eq!(history_a, history_b);
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.bias(), b.bias());
}

#[test]
fn different_seeds_give_different_runs() {
    let (x, y) = two_blobs(30, 0.8, 5);
    let params = quiet_params(0.05, 1e-3, 50, 16);

    let mut a = SoftmaxClassifier::new();
    let mut b = SoftmaxClassifier::new();
    let history_a = a.train(x.view(), y.view(), &params, &mut seeded_rng(1)).unwrap();
    let history_b = b.train(x.view(), y.view(), &params, &mut seeded_rng(2)).unwrap();
    assert_ne!(history_a, history_b);
}

#[test]
fn second_call_continues_training() {
    let (x, y) = two_blobs(50, 0.5, 6);
    let params = quiet_params(0.1, 1e-4, 300, 50);
    let mut rng = seeded_rng(6);

    let mut clf = SoftmaxClassifier::new();
    let first = clf.train(x.view(), y.view(), &params, &mut rng).unwrap();
    let second = clf.train(x.view(), y.view(), &params, &mut rng).unwrap();

    // A restart would begin near ln 2 again.
    assert!(second[0] < first[0] * 0.5, "second run starts at {}", second[0]);
    let (_, first_tail) = head_tail_means(&first, 0.1);
    let (_, second_tail) = head_tail_means(&second, 0.1);
    assert!(second_tail <= first_tail * 1.1);
}

#[test]
fn oversized_batch_still_trains() {
    let (x, y) = two_blobs(5, 0.5, 8);
    let mut clf = SoftmaxClassifier::new();
    let history = clf
        .train(x.view(), y.view(), &quiet_params(0.1, 1e-4, 100, 64), &mut seeded_rng(8))
        .unwrap();
    assert_eq!(history.len(), 100);
    assert!(history.last().unwrap() < &history[0]);
}
