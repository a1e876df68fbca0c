//! Scoring and prediction for [`LinearParams`].

use ndarray::{Array1, Array2, ArrayView2, ArrayViewMut2, Axis};

use crate::repr::LinearParams;

// =============================================================================
// Row transforms
// =============================================================================

/// Subtract each row's maximum from every entry of that row.
///
/// Softmax is invariant to per-row additive shifts, so this leaves the
/// probabilities unchanged while keeping `exp` from overflowing.
pub fn shift_rows_by_max(mut scores: ArrayViewMut2<'_, f32>) {
    for mut row in scores.rows_mut() {
        let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if max.is_finite() {
            row.mapv_inplace(|s| s - max);
        }
    }
}

/// Exponentiate and row-normalize scores in place.
///
/// Expects max-shifted scores (see [`shift_rows_by_max`]); no further
/// stabilization is applied.
pub fn softmax_shifted_inplace(mut scores: ArrayViewMut2<'_, f32>) {
    for mut row in scores.rows_mut() {
        row.mapv_inplace(f32::exp);
        let sum = row.sum();
        if sum > 0.0 {
            row.mapv_inplace(|e| e / sum);
        }
    }
}

/// Index of the largest entry in each row. Ties go to the lowest index.
pub fn argmax_rows(values: ArrayView2<'_, f32>) -> Array1<usize> {
    values.map_axis(Axis(1), |row| {
        let mut best_idx = 0usize;
        let mut best_val = f32::NEG_INFINITY;
        for (idx, &v) in row.iter().enumerate() {
            if v > best_val {
                best_val = v;
                best_idx = idx;
            }
        }
        best_idx
    })
}

// =============================================================================
// LinearPredict
// =============================================================================

/// Prediction methods for [`LinearParams`].
///
/// All methods take sample-major features `[n_samples, n_features]` and
/// never mutate the parameters.
pub trait LinearPredict {
    /// Max-shifted scores `X·W + b - rowmax`, shape `[n_samples, n_classes]`.
    fn shifted_scores(&self, features: ArrayView2<'_, f32>) -> Array2<f32>;

    /// Softmax probabilities, shape `[n_samples, n_classes]`. Rows sum to 1.
    fn predict_proba(&self, features: ArrayView2<'_, f32>) -> Array2<f32> {
        let mut probs = self.shifted_scores(features);
        softmax_shifted_inplace(probs.view_mut());
        probs
    }

    /// Most likely class per sample.
    fn predict_classes(&self, features: ArrayView2<'_, f32>) -> Array1<usize> {
        argmax_rows(self.predict_proba(features).view())
    }
}

impl LinearPredict for LinearParams {
    fn shifted_scores(&self, features: ArrayView2<'_, f32>) -> Array2<f32> {
        let mut scores = self.raw_scores(features);
        shift_rows_by_max(scores.view_mut());
        scores
    }
}
