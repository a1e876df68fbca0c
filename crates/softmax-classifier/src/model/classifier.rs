//! Softmax classifier: lazily initialized parameters with train/predict.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::Rng;

use crate::error::ClassifierError;
use crate::inference::{argmax_rows, LinearPredict};
use crate::repr::LinearParams;
use crate::training::{
    BiasGradient, LossAndGradients, MetricFn, SoftmaxLoss, SoftmaxParams, SoftmaxTrainer,
};

/// Learning rate and regularization of the most recent training call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparams {
    pub learning_rate: f32,
    pub reg: f32,
}

/// Linear multi-class classifier trained with mini-batch SGD.
///
/// Starts empty. The first [`train`](Self::train) infers `n_features` from the
/// feature columns and `n_classes` as `max(label) + 1`, draws small Gaussian
/// weights and zero biases, and every later call keeps training those same
/// parameters. [`initialize`](Self::initialize) does the allocation
/// explicitly.
///
/// # Example
///
/// ```
/// use softmax_classifier::{seeded_rng, SoftmaxClassifier, SoftmaxParams};
/// use ndarray::array;
///
/// let x = array![[-2.0f32, -2.0], [-1.0, -2.0], [2.0, 2.0], [2.0, 1.0]];
/// let y = array![0usize, 0, 1, 1];
///
/// let params = SoftmaxParams::builder()
///     .learning_rate(0.5)
///     .n_iters(200)
///     .batch_size(4)
///     .build()
///     .unwrap();
///
/// let mut clf = SoftmaxClassifier::new();
/// let mut rng = seeded_rng(42);
/// let history = clf.train(x.view(), y.view(), &params, &mut rng).unwrap();
/// assert_eq!(history.len(), 200);
///
/// let preds = clf.predict(array![[-3.0f32, -3.0], [3.0, 3.0]].view()).unwrap();
/// assert_eq!(preds, array![0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SoftmaxClassifier {
    params: Option<LinearParams>,
    hyperparams: Option<Hyperparams>,
}

impl SoftmaxClassifier {
    /// Create a classifier with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing parameters (e.g. produced elsewhere or hand-built).
    pub fn from_params(params: LinearParams) -> Self {
        Self {
            params: Some(params),
            hyperparams: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn is_trained(&self) -> bool {
        self.params.is_some()
    }

    /// Underlying parameters, if initialized.
    #[inline]
    pub fn linear(&self) -> Option<&LinearParams> {
        self.params.as_ref()
    }

    /// Weight matrix `[n_features, n_classes]`, if initialized.
    pub fn weights(&self) -> Option<ArrayView2<'_, f32>> {
        self.params.as_ref().map(LinearParams::weights)
    }

    /// Bias vector `[n_classes]`, if initialized.
    pub fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        self.params.as_ref().map(LinearParams::biases)
    }

    pub fn n_features(&self) -> Option<usize> {
        self.params.as_ref().map(LinearParams::n_features)
    }

    pub fn n_classes(&self) -> Option<usize> {
        self.params.as_ref().map(LinearParams::n_classes)
    }

    /// Learning rate of the last training call.
    pub fn learning_rate(&self) -> Option<f32> {
        self.hyperparams.map(|h| h.learning_rate)
    }

    /// Regularization strength of the last training call.
    pub fn reg(&self) -> Option<f32> {
        self.hyperparams.map(|h| h.reg)
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Allocate parameters for `n_features` inputs and `n_classes` outputs.
    ///
    /// Weights are drawn from `rng` (see [`LinearParams::gaussian`]). If the
    /// classifier is already initialized with the same shape this is a no-op;
    /// a different shape is an error and leaves the parameters untouched.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        n_features: usize,
        n_classes: usize,
        rng: &mut R,
    ) -> Result<(), ClassifierError> {
        if n_classes == 0 {
            return Err(ClassifierError::NoClasses);
        }
        match &self.params {
            Some(existing) => {
                if existing.n_features() != n_features {
                    return Err(ClassifierError::shape(
                        "feature count",
                        existing.n_features(),
                        n_features,
                    ));
                }
                if existing.n_classes() != n_classes {
                    return Err(ClassifierError::shape(
                        "class count",
                        existing.n_classes(),
                        n_classes,
                    ));
                }
            }
            None => {
                self.params = Some(LinearParams::gaussian(n_features, n_classes, rng));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Training
    // =========================================================================

    /// Train with mini-batch SGD and return the per-iteration loss history.
    ///
    /// Initializes parameters on the first call; later calls continue from
    /// the current weights. All randomness (initial weights, batch sampling)
    /// is drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - [`ClassifierError::InvalidParams`] if `params` fails validation
    /// - [`ClassifierError::EmptyDataset`] if `features` has no rows
    /// - [`ClassifierError::ShapeMismatch`] if `labels.len()` differs from the
    ///   row count, or the column count differs from the established one
    /// - [`ClassifierError::InvalidLabel`] if a label is `>= n_classes` of an
    ///   already initialized classifier
    ///
    /// Nothing is mutated when an error is returned.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        params: &SoftmaxParams,
        rng: &mut R,
    ) -> Result<Vec<f64>, ClassifierError> {
        params.validate()?;

        let n_samples = features.nrows();
        if n_samples == 0 {
            return Err(ClassifierError::EmptyDataset);
        }
        if labels.len() != n_samples {
            return Err(ClassifierError::shape("label count", n_samples, labels.len()));
        }

        match &self.params {
            Some(existing) => {
                check_features(existing, features)?;
                check_labels(labels, existing.n_classes())?;
            }
            None => {
                let n_classes = infer_n_classes(labels)?;
                self.initialize(features.ncols(), n_classes, rng)?;
            }
        }

        self.hyperparams = Some(Hyperparams {
            learning_rate: params.learning_rate,
            reg: params.reg,
        });

        let model = self.params.as_mut().ok_or(ClassifierError::NotTrained)?;
        let trainer = SoftmaxTrainer::new(params.clone());
        Ok(trainer.train(model, features, labels, rng))
    }

    // =========================================================================
    // Scoring / loss
    // =========================================================================

    /// Max-shifted class scores `X·W + b - rowmax`, shape `[n_samples, n_classes]`.
    pub fn scores(&self, features: ArrayView2<'_, f32>) -> Result<Array2<f32>, ClassifierError> {
        let model = self.checked_params(features)?;
        Ok(model.shifted_scores(features))
    }

    /// Loss and gradients on a batch at the current parameters.
    ///
    /// Does not modify the classifier. Labels must be `< n_classes`.
    pub fn loss(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        reg: f32,
        bias_gradient: BiasGradient,
    ) -> Result<LossAndGradients, ClassifierError> {
        let model = self.checked_params(features)?;
        if labels.len() != features.nrows() {
            return Err(ClassifierError::shape(
                "label count",
                features.nrows(),
                labels.len(),
            ));
        }
        check_labels(labels, model.n_classes())?;
        Ok(SoftmaxLoss::new(bias_gradient).loss_and_gradients(model, features, labels, reg))
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Class probabilities, shape `[n_samples, n_classes]`; rows sum to 1.
    pub fn predict_proba(
        &self,
        features: ArrayView2<'_, f32>,
    ) -> Result<Array2<f32>, ClassifierError> {
        let model = self.checked_params(features)?;
        Ok(model.predict_proba(features))
    }

    /// Most likely class per sample (ties go to the lowest class index).
    pub fn predict(&self, features: ArrayView2<'_, f32>) -> Result<Array1<usize>, ClassifierError> {
        let probs = self.predict_proba(features)?;
        Ok(argmax_rows(probs.view()))
    }

    /// Evaluate `metric` on labeled data.
    pub fn evaluate<M: MetricFn>(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, usize>,
        metric: &M,
    ) -> Result<f64, ClassifierError> {
        let probs = self.predict_proba(features)?;
        if labels.len() != probs.nrows() {
            return Err(ClassifierError::shape("label count", probs.nrows(), labels.len()));
        }
        check_labels(labels, probs.ncols())?;
        Ok(metric.compute(probs.view(), labels))
    }

    fn checked_params(
        &self,
        features: ArrayView2<'_, f32>,
    ) -> Result<&LinearParams, ClassifierError> {
        let model = self.params.as_ref().ok_or(ClassifierError::NotTrained)?;
        check_features(model, features)?;
        Ok(model)
    }
}

fn check_features(
    model: &LinearParams,
    features: ArrayView2<'_, f32>,
) -> Result<(), ClassifierError> {
    if features.ncols() != model.n_features() {
        return Err(ClassifierError::shape(
            "feature count",
            model.n_features(),
            features.ncols(),
        ));
    }
    Ok(())
}

/// `max(label) + 1`; `usize::MAX` has no successor and is rejected.
fn infer_n_classes(labels: ArrayView1<'_, usize>) -> Result<usize, ClassifierError> {
    let (row, &label) = labels
        .iter()
        .enumerate()
        .max_by_key(|&(_, &label)| label)
        .ok_or(ClassifierError::EmptyDataset)?;
    label.checked_add(1).ok_or(ClassifierError::InvalidLabel {
        row,
        label,
        n_classes: usize::MAX,
    })
}

fn check_labels(labels: ArrayView1<'_, usize>, n_classes: usize) -> Result<(), ClassifierError> {
    match labels.iter().position(|&label| label >= n_classes) {
        Some(row) => Err(ClassifierError::InvalidLabel {
            row,
            label: labels[row],
            n_classes,
        }),
        None => Ok(()),
    }
}
