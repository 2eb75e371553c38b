use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::markov_model::DEFAULT_MAX_LENGTH;
use crate::tokenizer::{DEFAULT_PUNCTUATION, Tokenizer};

/// Configuration of a `MarkovTextModel`.
///
/// Missing fields fall back to their defaults when deserializing, so
/// `{}` is a valid configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
	/// Characters replaced with whitespace before splitting the corpus.
	pub punctuation: Vec<char>,

	/// Length used by `MarkovTextModel::generate_default`.
	pub default_max_length: usize,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			punctuation: DEFAULT_PUNCTUATION.to_vec(),
			default_max_length: DEFAULT_MAX_LENGTH,
		}
	}
}

impl ModelConfig {
	/// Checks the configuration.
	///
	/// # Errors
	/// Returns `ModelError::InvalidMaxLength` if `default_max_length` is 0.
	pub fn validate(&self) -> Result<(), ModelError> {
		if self.default_max_length < 1 {
			return Err(ModelError::InvalidMaxLength(self.default_max_length));
		}
		Ok(())
	}

	pub(crate) fn tokenizer(&self) -> Tokenizer {
		Tokenizer::new(self.punctuation.clone())
	}
}
