//! Mini-batch SGD trainer for linear softmax models.
//!
//! Each iteration samples a batch with replacement, evaluates the softmax
//! cross-entropy loss and its gradients, records the loss, and takes a plain
//! gradient step (no momentum, no decay).

use ndarray::{ArrayView1, ArrayView2};
use rand::Rng;

use crate::repr::LinearParams;

use super::logger::TrainingLogger;
use super::objective::SoftmaxLoss;
use super::params::SoftmaxParams;
use super::sampling::BatchSampler;

/// Stochastic gradient descent trainer for [`LinearParams`].
#[derive(Debug, Clone)]
pub struct SoftmaxTrainer {
    params: SoftmaxParams,
}

impl SoftmaxTrainer {
    /// Create a trainer. Parameters are assumed to be validated.
    pub fn new(params: SoftmaxParams) -> Self {
        Self { params }
    }

    /// Run `n_iters` SGD steps on `model`, in place.
    ///
    /// `features` is `[n_samples, n_features]` with `n_features ==
    /// model.n_features()`, and every label is `< model.n_classes()`.
    /// Callers check both.
    ///
    /// Returns the loss of every iteration, in order (length `n_iters`).
    pub fn train<R: Rng + ?Sized>(
        &self,
        model: &mut LinearParams,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        rng: &mut R,
    ) -> Vec<f64> {
        let n_samples = features.nrows();
        let SoftmaxParams {
            learning_rate,
            reg,
            n_iters,
            batch_size,
            bias_gradient,
            verbosity,
        } = self.params;

        debug_assert_eq!(labels.len(), n_samples);
        debug_assert_eq!(features.ncols(), model.n_features());

        let objective = SoftmaxLoss::new(bias_gradient);
        let sampler = BatchSampler::new(batch_size);

        let mut logger = TrainingLogger::new(verbosity);
        logger.start_training(n_samples, n_iters, batch_size);

        let mut loss_history = Vec::with_capacity(n_iters);

        for iteration in 0..n_iters {
            let batch = sampler.sample(features, labels, rng);

            let step = objective.loss_and_gradients(
                model,
                batch.features.view(),
                batch.labels.view(),
                reg,
            );
            loss_history.push(step.loss);

            model.step(step.d_weights.view(), step.d_bias.view(), learning_rate);

            logger.log_iteration(iteration, step.loss, || model.weights_sq_norm());
        }

        logger.finish_training(loss_history.last().copied());
        loss_history
    }
}

// ============================================================================
// Tests
// ============================================================================
