//! Classification metrics.
//!
//! Metrics take probabilities `[n_samples, n_classes]` and integer labels.

use ndarray::{ArrayView1, ArrayView2};

use crate::inference::argmax_rows;

/// A metric over predicted class probabilities.
pub trait MetricFn {
    /// Compute the metric. Returns 0.0 for an empty batch.
    fn compute(&self, probs: ArrayView2<'_, f32>, labels: ArrayView1<'_, usize>) -> f64;

    /// Whether larger values are better.
    fn higher_is_better(&self) -> bool;

    fn name(&self) -> &'static str;
}

// =============================================================================
// MulticlassAccuracy
// =============================================================================

/// Fraction of samples whose arg-max class equals the label.
///
/// Higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct MulticlassAccuracy;

impl MetricFn for MulticlassAccuracy {
    fn compute(&self, probs: ArrayView2<'_, f32>, labels: ArrayView1<'_, usize>) -> f64 {
        let n_rows = labels.len();
        if n_rows == 0 {
            return 0.0;
        }
        debug_assert_eq!(probs.nrows(), n_rows);

        let correct = argmax_rows(probs)
            .iter()
            .zip(labels.iter())
            .filter(|(pred, label)| pred == label)
            .count();
        correct as f64 / n_rows as f64
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

// =============================================================================
// MulticlassLogLoss
// =============================================================================

/// Multiclass cross-entropy: `-mean(ln p[i, y_i])`.
///
/// Lower is better. Probabilities are clamped away from 0 so a confident
/// miss gives a large finite value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MulticlassLogLoss;

impl MetricFn for MulticlassLogLoss {
    fn compute(&self, probs: ArrayView2<'_, f32>, labels: ArrayView1<'_, usize>) -> f64 {
        let n_rows = labels.len();
        if n_rows == 0 {
            return 0.0;
        }
        debug_assert_eq!(probs.nrows(), n_rows);

        const EPS: f64 = 1e-15;

        let sum_loss: f64 = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| -(probs[[i, label]] as f64).clamp(EPS, 1.0).ln())
            .sum();
        sum_loss / n_rows as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mlogloss"
    }
}
