//! Linear layer parameters (weights + bias).

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::Rng;

/// Scale applied to standard-normal draws when initializing weights.
pub const INIT_SCALE: f32 = 1e-3;

/// Parameters of a linear multi-class scorer.
///
/// Stores a weight matrix with shape `[n_features, n_classes]` and a bias
/// vector of length `n_classes`:
///
/// ```text
/// weights[[feature, class]] → coefficient
/// bias[class]               → intercept
/// ```
///
/// Raw scores for a batch are `features · weights + bias`.
///
/// # Example
///
/// ```
/// use softmax_classifier::repr::LinearParams;
/// use ndarray::array;
///
/// // 2 features, 3 classes
/// let params = LinearParams::from_parts(
///     array![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]],
///     array![0.0, 0.0, 1.0],
/// );
///
/// assert_eq!(params.n_features(), 2);
/// assert_eq!(params.n_classes(), 3);
/// assert_eq!(params.weight(1, 2), 0.6);
/// assert_eq!(params.bias(2), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearParams {
    /// Weight matrix: shape `[n_features, n_classes]`.
    weights: Array2<f32>,
    /// Bias vector: length `n_classes`.
    bias: Array1<f32>,
}

impl LinearParams {
    /// Create parameters from a weight matrix and bias vector.
    ///
    /// # Panics
    ///
    /// Panics if `bias.len()` doesn't match the number of weight columns.
    pub fn from_parts(weights: Array2<f32>, bias: Array1<f32>) -> Self {
        assert_eq!(
            weights.ncols(),
            bias.len(),
            "bias length {} doesn't match n_classes {}",
            bias.len(),
            weights.ncols()
        );
        Self { weights, bias }
    }

    /// Create zero-initialized parameters.
    pub fn zeros(n_features: usize, n_classes: usize) -> Self {
        Self {
            weights: Array2::zeros((n_features, n_classes)),
            bias: Array1::zeros(n_classes),
        }
    }

    /// Small random initialization: weights ~ `INIT_SCALE * N(0, 1)`, bias = 0.
    ///
    /// Draws every weight independently from `rng`, so identically seeded
    /// generators produce identical parameters.
    pub fn gaussian<R: Rng + ?Sized>(n_features: usize, n_classes: usize, rng: &mut R) -> Self {
        let weights =
            Array2::<f32>::random_using((n_features, n_classes), StandardNormal, rng) * INIT_SCALE;
        Self {
            weights,
            bias: Array1::zeros(n_classes),
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of output classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.weights.ncols()
    }

    /// Get weight for a feature and class.
    #[inline]
    pub fn weight(&self, feature: usize, class: usize) -> f32 {
        self.weights[[feature, class]]
    }

    /// Get bias for a class.
    #[inline]
    pub fn bias(&self, class: usize) -> f32 {
        self.bias[class]
    }

    /// Weight matrix view, shape `[n_features, n_classes]`.
    #[inline]
    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.weights.view()
    }

    /// Bias view, length `n_classes`.
    #[inline]
    pub fn biases(&self) -> ArrayView1<'_, f32> {
        self.bias.view()
    }

    #[inline]
    pub fn weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.weights.view_mut()
    }

    #[inline]
    pub fn biases_mut(&mut self) -> ArrayViewMut1<'_, f32> {
        self.bias.view_mut()
    }

    /// Sum of squared weights (bias excluded).
    pub fn weights_sq_norm(&self) -> f64 {
        self.weights.iter().map(|&w| (w as f64) * (w as f64)).sum()
    }

    /// Raw scores `features · weights + bias`, shape `[n_samples, n_classes]`.
    ///
    /// `features` must have `n_features` columns.
    pub fn raw_scores(&self, features: ArrayView2<'_, f32>) -> Array2<f32> {
        debug_assert_eq!(features.ncols(), self.n_features());
        let mut scores = features.dot(&self.weights);
        scores += &self.bias;
        scores
    }

    /// Vanilla gradient step: `W -= lr * dW`, `b -= lr * db`.
    pub fn step(&mut self, d_weights: ArrayView2<'_, f32>, d_bias: ArrayView1<'_, f32>, lr: f32) {
        debug_assert_eq!(d_weights.dim(), self.weights.dim());
        debug_assert_eq!(d_bias.len(), self.bias.len());
        self.weights.scaled_add(-lr, &d_weights);
        self.bias.scaled_add(-lr, &d_bias);
    }
}
