//! Softmax cross-entropy objective with L2 weight penalty.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::inference::{softmax_shifted_inplace, LinearPredict};
use crate::repr::LinearParams;

use super::params::BiasGradient;

/// Loss value and parameter gradients for one batch.
#[derive(Debug, Clone)]
pub struct LossAndGradients {
    /// `data_loss + reg_loss`.
    pub loss: f64,
    /// Gradient w.r.t. the weights, shape `[n_features, n_classes]`.
    pub d_weights: Array2<f32>,
    /// Gradient w.r.t. the bias, length `n_classes`.
    pub d_bias: Array1<f32>,
}

/// Softmax cross-entropy loss for multiclass classification.
///
/// For a batch of `n` samples with labels `y`:
/// - Loss: `-(1/n) Σ ln p[i, y_i] + 0.5 * reg * Σ W²`
/// - Score gradient: `dscores = (p - onehot(y)) / n`
/// - Weight gradient: `Xᵀ · dscores + reg * W`
/// - Bias gradient: reduced from `dscores` per [`BiasGradient`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftmaxLoss {
    pub bias_gradient: BiasGradient,
}

impl SoftmaxLoss {
    pub fn new(bias_gradient: BiasGradient) -> Self {
        Self { bias_gradient }
    }

    /// Forward and backward pass over one batch.
    ///
    /// `labels` must lie in `[0, n_classes)` and `features` must have
    /// `n_features` columns; callers validate both. An empty batch yields zero
    /// data loss and zero data gradient.
    pub fn loss_and_gradients(
        &self,
        params: &LinearParams,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        reg: f32,
    ) -> LossAndGradients {
        let n_rows = features.nrows();
        let n_classes = params.n_classes();
        debug_assert_eq!(labels.len(), n_rows);
        debug_assert_eq!(features.ncols(), params.n_features());

        let reg_loss = 0.5 * reg as f64 * params.weights_sq_norm();

        // Forward: max-shifted scores -> probabilities.
        let mut probs = params.shifted_scores(features);
        softmax_shifted_inplace(probs.view_mut());

        let data_loss = if n_rows == 0 {
            0.0
        } else {
            let log_likelihood: f64 = labels
                .iter()
                .enumerate()
                .map(|(i, &label)| {
                    debug_assert!(label < n_classes, "label {} >= n_classes {}", label, n_classes);
                    (probs[[i, label]] as f64).ln()
                })
                .sum();
            -log_likelihood / n_rows as f64
        };

        // Backward. `probs` is moved into the gradient buffer, so nothing else
        // can observe it once it is overwritten.
        let mut d_scores = probs;
        if n_rows > 0 {
            for (mut row, &label) in d_scores.rows_mut().into_iter().zip(labels.iter()) {
                row[label] -= 1.0;
            }
            d_scores /= n_rows as f32;
        }

        let mut d_weights = features.t().dot(&d_scores);
        d_weights.scaled_add(reg, &params.weights());

        let d_bias = match self.bias_gradient {
            BiasGradient::PerClass => d_scores.sum_axis(Axis(0)),
            BiasGradient::Aggregate => Array1::from_elem(n_classes, d_scores.sum()),
        };

        LossAndGradients {
            loss: data_loss + reg_loss,
            d_weights,
            d_bias,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
