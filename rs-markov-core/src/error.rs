use thiserror::Error;

/// Errors returned by `MarkovTextModel`.
///
/// A short corpus is not an error: `train` reports it through
/// `TrainOutcome::TooShort` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
	/// `generate` was called before any successful training.
	#[error("Error: Model must be trained before generation.")]
	NotTrained,

	/// The requested (or configured) maximum length is below 1.
	#[error("max length must be >= 1, got {0}")]
	InvalidMaxLength(usize),
}
