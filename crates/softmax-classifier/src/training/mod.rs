//! Training infrastructure for the softmax classifier.
//!
//! - [`SoftmaxParams`], [`BiasGradient`]: hyperparameters with a validating builder
//! - [`SoftmaxLoss`]: forward/backward pass producing [`LossAndGradients`]
//! - [`BatchSampler`]: with-replacement mini-batch sampling
//! - [`SoftmaxTrainer`]: the SGD loop
//! - [`TrainingLogger`], [`Verbosity`]: progress logging via `tracing`
//! - [`MetricFn`], [`MulticlassAccuracy`], [`MulticlassLogLoss`]: evaluation

mod logger;
mod metrics;
mod objective;
mod params;
mod sampling;
mod trainer;

pub use logger::{TrainingLogger, Verbosity, PROGRESS_INTERVAL};
pub use metrics::{MetricFn, MulticlassAccuracy, MulticlassLogLoss};
pub use objective::{LossAndGradients, SoftmaxLoss};
pub use params::{BiasGradient, ParamValidationError, SoftmaxParams, SoftmaxParamsBuilder};
pub use sampling::{Batch, BatchSampler};
pub use trainer::SoftmaxTrainer;
