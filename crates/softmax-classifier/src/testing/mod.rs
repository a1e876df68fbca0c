//! Testing utilities shared by unit tests, integration tests and benches.

mod data;

pub use data::{gaussian_blobs, split_indices, two_blobs};

use approx::abs_diff_eq;
use ndarray::ArrayView2;

/// Default tolerance for probability comparisons.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Panic unless every row of `probs` is a distribution: entries in `[0, 1]`
/// and the row sums to 1 within `tolerance`.
#[track_caller]
pub fn assert_rows_are_distributions(probs: ArrayView2<'_, f32>, tolerance: f32) {
    for (i, row) in probs.rows().into_iter().enumerate() {
        for (c, &p) in row.iter().enumerate() {
            assert!(
                (0.0..=1.0 + tolerance).contains(&p),
                "probability {p} at [{i}, {c}] is outside [0, 1]"
            );
        }
        let sum = row.sum();
        assert!(
            abs_diff_eq!(sum, 1.0, epsilon = tolerance),
            "row {i} sums to {sum}, expected 1 (tolerance {tolerance})"
        );
    }
}
