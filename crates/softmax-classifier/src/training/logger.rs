//! Structured training logs.
//!
//! [`TrainingLogger`] gates progress messages on a [`Verbosity`] level and
//! emits them through `tracing`, so the caller picks the sink by installing
//! a subscriber.

use std::time::Instant;

/// Interval (in iterations) between progress lines at [`Verbosity::Info`].
pub const PROGRESS_INTERVAL: usize = 100;

/// Logging verbosity for training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Nothing is logged.
    Silent,
    /// Only suspicious inputs (e.g. a batch larger than the dataset).
    #[default]
    Warning,
    /// Start/finish plus a progress line every [`PROGRESS_INTERVAL`] iterations.
    Info,
    /// Every iteration, including parameter norms.
    Debug,
}

impl Verbosity {
    /// Map the classic `verbose` flag onto a level.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Info
        } else {
            Verbosity::Warning
        }
    }
}

/// Emits training progress at the configured verbosity.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_iters: usize,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_iters: 0,
            started: None,
        }
    }

    pub fn start_training(&mut self, n_samples: usize, n_iters: usize, batch_size: usize) {
        self.n_iters = n_iters;
        self.started = Some(Instant::now());

        if self.verbosity >= Verbosity::Warning && batch_size > n_samples {
            tracing::warn!(
                batch_size,
                n_samples,
                "batch_size exceeds the number of samples; batches will repeat rows"
            );
        }
        if self.verbosity >= Verbosity::Info {
            tracing::info!(n_samples, n_iters, batch_size, "starting training");
        }
    }

    /// Whether `iteration` gets a progress line.
    #[inline]
    pub fn is_progress_iteration(&self, iteration: usize) -> bool {
        self.verbosity >= Verbosity::Info && iteration % PROGRESS_INTERVAL == 0
    }

    pub fn log_iteration(
        &self,
        iteration: usize,
        loss: f64,
        weights_sq_norm: impl FnOnce() -> f64,
    ) {
        if self.verbosity >= Verbosity::Debug {
            tracing::debug!(
                iteration,
                loss,
                weights_sq_norm = weights_sq_norm(),
                "iteration"
            );
        } else if self.is_progress_iteration(iteration) {
            tracing::info!("iteration {} / {}: loss {:.6}", iteration, self.n_iters, loss);
        }
    }

    pub fn finish_training(&self, final_loss: Option<f64>) {
        if self.verbosity >= Verbosity::Info {
            let elapsed_ms = self
                .started
                .map(|start| start.elapsed().as_millis() as u64)
                .unwrap_or_default();
            tracing::info!(n_iters = self.n_iters, final_loss, elapsed_ms, "training finished");
        }
    }
}
