//! softmax-classifier: a linear multi-class classifier trained by mini-batch SGD.
//!
//! Scores are `X·W + b`, turned into class probabilities with a numerically
//! stable softmax. Training minimizes mean cross-entropy plus an L2 penalty
//! `0.5 * reg * ||W||²`, sampling batches with replacement.
//!
//! # Key Types
//!
//! - [`SoftmaxClassifier`] - Lazily initialized model with train/predict
//! - [`SoftmaxParams`] - Hyperparameters with a validating builder
//! - [`SoftmaxLoss`] - Loss and gradients for one batch
//! - [`MetricFn`] - Evaluation metrics
//!
//! # Training
//!
//! ```
//! use softmax_classifier::testing::two_blobs;
//! use softmax_classifier::{seeded_rng, MulticlassAccuracy, SoftmaxClassifier, SoftmaxParams};
//!
//! let (x, y) = two_blobs(50, 0.5, 0);
//! let params = SoftmaxParams::builder()
//!     .learning_rate(0.1)
//!     .reg(1e-4)
//!     .n_iters(1000)
//!     .batch_size(50)
//!     .build()
//!     .unwrap();
//!
//! let mut clf = SoftmaxClassifier::new();
//! let history = clf.train(x.view(), y.view(), &params, &mut seeded_rng(0)).unwrap();
//! assert_eq!(history.len(), 1000);
//!
//! let accuracy = clf.evaluate(x.view(), y.view(), &MulticlassAccuracy).unwrap();
//! assert!(accuracy >= 0.95);
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod error;
pub mod inference;
pub mod model;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::ClassifierError;
pub use model::{Hyperparams, SoftmaxClassifier};
pub use repr::LinearParams;

pub use training::{
    BiasGradient, LossAndGradients, MetricFn, MulticlassAccuracy, MulticlassLogLoss,
    ParamValidationError, SoftmaxLoss, SoftmaxParams, Verbosity,
};

pub use utils::seeded_rng;
