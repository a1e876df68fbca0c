//! Inference for linear softmax scorers.
//!
//! - [`LinearPredict`]: shifted scores, probabilities, and class predictions
//! - [`shift_rows_by_max`], [`softmax_shifted_inplace`], [`argmax_rows`]: row transforms

mod predict;

pub use predict::{argmax_rows, shift_rows_by_max, softmax_shifted_inplace, LinearPredict};
