//! Error types returned by the classifier.

use crate::training::ParamValidationError;

/// Errors returned when training or querying a
/// [`SoftmaxClassifier`](crate::SoftmaxClassifier).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// Inference or loss evaluation before any parameters exist.
    #[error("classifier has no parameters yet; call `train` or `initialize` first")]
    NotTrained,

    /// An input dimension disagrees with the established model shape.
    #[error("{what} mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A label falls outside `[0, n_classes)`.
    #[error("label {label} at row {row} is outside [0, {n_classes})")]
    InvalidLabel {
        row: usize,
        label: usize,
        n_classes: usize,
    },

    /// Training was called with zero samples.
    #[error("training data has no samples")]
    EmptyDataset,

    /// Parameters were requested for zero classes.
    #[error("at least one class is required")]
    NoClasses,

    /// Hyperparameters failed validation.
    #[error(transparent)]
    InvalidParams(#[from] ParamValidationError),
}

impl ClassifierError {
    pub(crate) fn shape(what: &'static str, expected: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            got,
        }
    }
}
