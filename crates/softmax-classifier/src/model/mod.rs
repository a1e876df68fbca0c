//! Model types.

mod classifier;

pub use classifier::{Hyperparams, SoftmaxClassifier};
