//! Training hyperparameters with builder pattern.
//!
//! [`SoftmaxParams`] collects everything a training run needs. Use the struct
//! literal with `..Default::default()` or the validating builder:
//!
//! ```
//! use softmax_classifier::training::{SoftmaxParams, Verbosity};
//!
//! let params = SoftmaxParams::builder()
//!     .learning_rate(0.1)
//!     .reg(1e-4)
//!     .n_iters(1000)
//!     .batch_size(50)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.n_iters, 1000);
//! ```

use bon::Builder;

use super::logger::Verbosity;

// =============================================================================
// BiasGradient
// =============================================================================

/// How the bias gradient is reduced from the score gradient.
///
/// `dscores` has shape `[batch, n_classes]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BiasGradient {
    /// Column sum of `dscores`: one gradient per class.
    #[default]
    PerClass,
    /// Sum of every entry of `dscores`, broadcast to all classes.
    ///
    /// Every row of `probs - onehot` sums to zero, so this is always ~0 and
    /// the bias stays where it was initialized.
    Aggregate,
}

// =============================================================================
// SoftmaxParams
// =============================================================================

/// Parameters for mini-batch SGD training.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(derive(Clone, Debug), finish_fn(vis = "", name = __build_internal))]
pub struct SoftmaxParams {
    /// Step size for the gradient update. Default: 1e-3.
    #[builder(default = 1e-3)]
    pub learning_rate: f32,

    /// L2 regularization strength on the weights. Default: 1e-5.
    #[builder(default = 1e-5)]
    pub reg: f32,

    /// Number of SGD iterations. Default: 100.
    #[builder(default = 100)]
    pub n_iters: usize,

    /// Samples drawn (with replacement) per iteration. Default: 200.
    #[builder(default = 200)]
    pub batch_size: usize,

    /// Bias gradient reduction. Default: [`BiasGradient::PerClass`].
    #[builder(default)]
    pub bias_gradient: BiasGradient,

    /// Logging verbosity. Default: [`Verbosity::Warning`].
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for SoftmaxParams {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            reg: 1e-5,
            n_iters: 100,
            batch_size: 200,
            bias_gradient: BiasGradient::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl<S: softmax_params_builder::IsComplete> SoftmaxParamsBuilder<S> {
    /// Build and validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamValidationError`] if any parameter is invalid:
    /// - `learning_rate` not finite or `<= 0`
    /// - `reg` not finite or `< 0`
    /// - `n_iters == 0`
    /// - `batch_size == 0`
    pub fn build(self) -> Result<SoftmaxParams, ParamValidationError> {
        let params = self.__build_internal();
        params.validate()?;
        Ok(params)
    }
}

impl SoftmaxParams {
    /// Check every parameter.
    ///
    /// Training re-runs this, so parameters built by struct literal are
    /// validated too.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ParamValidationError::InvalidLearningRate(self.learning_rate));
        }
        if !self.reg.is_finite() || self.reg < 0.0 {
            return Err(ParamValidationError::InvalidReg(self.reg));
        }
        if self.n_iters == 0 {
            return Err(ParamValidationError::InvalidNIters);
        }
        if self.batch_size == 0 {
            return Err(ParamValidationError::InvalidBatchSize);
        }
        Ok(())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// learning_rate must be finite and > 0.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f32),

    /// reg must be finite and >= 0.
    #[error("reg must be >= 0, got {0}")]
    InvalidReg(f32),

    /// n_iters must be > 0.
    #[error("n_iters must be > 0")]
    InvalidNIters,

    /// batch_size must be > 0.
    #[error("batch_size must be > 0")]
    InvalidBatchSize,
}

// =============================================================================
// Tests
// =============================================================================
