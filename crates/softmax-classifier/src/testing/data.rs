use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::Normal;
use rand::prelude::*;

/// Isotropic Gaussian clusters, one per center.
///
/// Row `k * n_per_class + j` is sample `j` of class `k`, drawn from
/// `N(centers[k], std^2 I)`. Returns `(features, labels)`.
///
/// # Panics
///
/// Panics if `centers` is empty, centers differ in dimension, or `std` is
/// negative or not finite.
pub fn gaussian_blobs(
    centers: &[&[f32]],
    n_per_class: usize,
    std: f32,
    seed: u64,
) -> (Array2<f32>, Array1<usize>) {
    assert!(!centers.is_empty(), "need at least one center");
    let n_features = centers[0].len();
    assert!(
        centers.iter().all(|c| c.len() == n_features),
        "centers must share a dimension"
    );
    let noise = Normal::new(0.0f32, std).expect("std must be finite and non-negative");
    let mut rng = StdRng::seed_from_u64(seed);

    let n_rows = centers.len() * n_per_class;
    let mut features = Array2::<f32>::zeros((n_rows, n_features));
    let mut labels = Array1::<usize>::zeros(n_rows);

    for (class, center) in centers.iter().enumerate() {
        for j in 0..n_per_class {
            let row = class * n_per_class + j;
            labels[row] = class;
            for (f, &mu) in center.iter().enumerate() {
                features[[row, f]] = mu + noise.sample(&mut rng);
            }
        }
    }

    (features, labels)
}

/// Two 2-D clusters at `(-2, -2)` (label 0) and `(2, 2)` (label 1).
pub fn two_blobs(n_per_class: usize, std: f32, seed: u64) -> (Array2<f32>, Array1<usize>) {
    gaussian_blobs(&[&[-2.0, -2.0], &[2.0, 2.0]], n_per_class, std, seed)
}

/// Deterministic train/valid split indices.
///
/// Returns `(train_idx, valid_idx)`.
pub fn split_indices(rows: usize, valid_fraction: f32, seed: u64) -> (Vec<usize>, Vec<usize>) {
    assert!((0.0..1.0).contains(&valid_fraction));
    let mut idx: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let valid_len = (((rows as f32) * valid_fraction).round() as usize).min(rows);
    let (valid, train) = idx.split_at(valid_len);
    (train.to_vec(), valid.to_vec())
}
