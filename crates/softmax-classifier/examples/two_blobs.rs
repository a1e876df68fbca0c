//! Train a softmax classifier on two Gaussian clusters and report metrics.
//!
//! ```sh
//! cargo run -p softmax-classifier --example two_blobs
//! ```

use ndarray::{array, Axis};
use softmax_classifier::testing::{split_indices, two_blobs};
use softmax_classifier::{
    seeded_rng, MetricFn, MulticlassAccuracy, MulticlassLogLoss, SoftmaxClassifier, SoftmaxParams,
    Verbosity,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let (x, y) = two_blobs(100, 0.8, 42);
    let (train_idx, valid_idx) = split_indices(x.nrows(), 0.2, 42);
    let (x_train, y_train) = (x.select(Axis(0), &train_idx), y.select(Axis(0), &train_idx));
    let (x_valid, y_valid) = (x.select(Axis(0), &valid_idx), y.select(Axis(0), &valid_idx));

    let params = SoftmaxParams::builder()
        .learning_rate(0.1)
        .reg(1e-4)
        .n_iters(1000)
        .batch_size(50)
        .verbosity(Verbosity::Info)
        .build()?;

    let mut clf = SoftmaxClassifier::new();
    let mut rng = seeded_rng(42);
    let history = clf.train(x_train.view(), y_train.view(), &params, &mut rng)?;

    println!("Trained {} iterations", history.len());
    println!("  first loss: {:.4}", history[0]);
    println!("  last loss:  {:.4}", history[history.len() - 1]);

    let metrics: [&dyn MetricFn; 2] = [&MulticlassAccuracy, &MulticlassLogLoss];
    for (split, xs, ys) in [("train", &x_train, &y_train), ("valid", &x_valid, &y_valid)] {
        let probs = clf.predict_proba(xs.view())?;
        for metric in metrics {
            println!("  {split} {}: {:.4}", metric.name(), metric.compute(probs.view(), ys.view()));
        }
    }

    let queries = array![[-3.0f32, -3.0], [3.0, 3.0], [0.0, 0.0]];
    let preds = clf.predict(queries.view())?;
    for (row, pred) in queries.rows().into_iter().zip(preds.iter()) {
        println!("  predict({}, {}) = {}", row[0], row[1], pred);
    }

    Ok(())
}
