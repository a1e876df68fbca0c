//! Mini-batch sampling.
//!
//! Batches are drawn uniformly **with replacement**: a batch may repeat rows
//! and need not cover the dataset. Indices come from the caller's generator,
//! so a seeded generator gives a reproducible batch sequence.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;

/// Indices and gathered rows for one SGD step.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Sampled row indices, in draw order.
    pub indices: Vec<usize>,
    /// Gathered features, shape `[batch_size, n_features]`.
    pub features: Array2<f32>,
    /// Gathered labels, length `batch_size`.
    pub labels: Array1<usize>,
}

/// Uniform with-replacement batch sampler.
#[derive(Debug, Clone, Copy)]
pub struct BatchSampler {
    batch_size: usize,
}

impl BatchSampler {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Draw `batch_size` indices from `[0, n_rows)`.
    ///
    /// Returns an empty vector if `n_rows == 0`.
    pub fn sample_indices<R: Rng + ?Sized>(&self, n_rows: usize, rng: &mut R) -> Vec<usize> {
        if n_rows == 0 {
            return Vec::new();
        }
        (0..self.batch_size).map(|_| rng.gen_range(0..n_rows)).collect()
    }

    /// Draw indices and gather the matching feature rows and labels.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        rng: &mut R,
    ) -> Batch {
        debug_assert_eq!(features.nrows(), labels.len());
        let indices = self.sample_indices(features.nrows(), rng);
        Batch {
            features: features.select(Axis(0), &indices),
            labels: labels.select(Axis(0), &indices),
            indices,
        }
    }
}
