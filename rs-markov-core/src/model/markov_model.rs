use std::collections::HashMap;

use log::{debug, info, warn};
use rand::Rng;

use super::state::State;
use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::tokenizer::Tokenizer;

/// Maximum number of tokens produced by `generate_default` unless configured.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Result of a `train` call.
///
/// Neither variant is an error: a short corpus simply leaves the model untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
	/// Every adjacent pair of the corpus was recorded.
	Trained { tokens: usize },
	/// Fewer than 2 tokens, nothing was recorded.
	TooShort { tokens: usize },
}

/// Represents an order-1 Markov chain over word tokens.
///
/// The `MarkovTextModel` stores, for every token seen in a non-final position,
/// the ordered list of tokens that followed it, and generates new sequences by
/// walking those lists from a seed.
///
/// # Responsibilities
/// - Tokenize a corpus and record every adjacent token pair
/// - Accumulate observations across multiple training calls
/// - Generate a sentence from a seed with an injectable random source
///
/// # Invariants
/// - Untrained and empty after construction (or `reset`)
/// - Once trained, stays trained until `reset`
/// - A token only ever seen in the final corpus position has no state
#[derive(Clone, Debug)]
pub struct MarkovTextModel {
	/// Mapping from a token to its observed successors
	transitions: HashMap<String, State>,

	is_trained: bool,

	config: ModelConfig,

	/// Built from `config.punctuation`
	tokenizer: Tokenizer,
}

impl Default for MarkovTextModel {
	fn default() -> Self {
		Self::new()
	}
}

impl MarkovTextModel {
	/// Creates an empty, untrained model with the default configuration.
	pub fn new() -> Self {
		let config = ModelConfig::default();
		Self {
			transitions: HashMap::new(),
			is_trained: false,
			tokenizer: config.tokenizer(),
			config,
		}
	}

	/// Creates an empty, untrained model with a custom configuration.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn with_config(config: ModelConfig) -> Result<Self, ModelError> {
		config.validate()?;
		Ok(Self {
			transitions: HashMap::new(),
			is_trained: false,
			tokenizer: config.tokenizer(),
			config,
		})
	}

	pub fn config(&self) -> &ModelConfig {
		&self.config
	}

	/// Returns `true` once a `train` call recorded at least one pair.
	pub fn is_trained(&self) -> bool {
		self.is_trained
	}

	/// Number of tokens having at least one recorded successor.
	pub fn vocabulary_size(&self) -> usize {
		self.transitions.len()
	}

	/// Iterates over the tokens having a state (arbitrary order).
	pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
		self.transitions.values().map(State::key)
	}

	/// Returns the successors observed after `token`, in insertion order.
	///
	/// `token` is looked up as-is (no normalization).
	pub fn successors(&self, token: &str) -> Option<&[String]> {
		self.transitions.get(token).map(State::successors)
	}

	/// Trains the model on a corpus.
	///
	/// # Behavior
	/// - Tokenizes the corpus (see `Tokenizer`).
	/// - With fewer than 2 tokens, nothing changes and `TooShort` is returned.
	/// - Otherwise, appends each token to the successors of the token before it,
	///   then marks the model as trained.
	///
	/// # Notes
	/// - Successive calls accumulate; nothing is ever removed.
	/// - Pairs never span two calls: the last token of one corpus is not
	///   linked to the first token of the next.
	pub fn train(&mut self, corpus: &str) -> TrainOutcome {
		let tokens = self.tokenizer.tokenize(corpus);
		if tokens.len() < 2 {
			warn!("Corpus too short to train ({} tokens).", tokens.len());
			return TrainOutcome::TooShort { tokens: tokens.len() };
		}

		for pair in tokens.windows(2) {
			let (current, next) = (&pair[0], &pair[1]);
			self.transitions
				.entry(current.clone())
				.or_insert_with(|| State::new(current))
				.add_transition(next);
		}

		self.is_trained = true;
		info!("Model trained on {} tokens.", tokens.len());
		debug!("Vocabulary now holds {} states.", self.transitions.len());
		TrainOutcome::Trained { tokens: tokens.len() }
	}

	/// Forgets everything learned so far.
	pub fn reset(&mut self) {
		self.transitions.clear();
		self.is_trained = false;
	}

	/// Generates a sentence using the process random generator.
	///
	/// See `generate_with_rng`.
	pub fn generate(&self, seed: &str, max_length: usize) -> Result<String, ModelError> {
		self.generate_with_rng(seed, max_length, &mut rand::rng())
	}

	/// Generates a sentence of at most `config.default_max_length` tokens.
	pub fn generate_default(&self, seed: &str) -> Result<String, ModelError> {
		self.generate(seed, self.config.default_max_length)
	}

	/// Generates a sentence starting from `seed`.
	///
	/// # Parameters
	/// - `seed`: First token of the output. Lowercased, otherwise used as-is.
	/// - `max_length`: Maximum number of tokens in the output, seed included.
	/// - `rng`: Source of randomness for successor selection.
	///
	/// # Returns
	/// - `Ok(String)`: Tokens joined by spaces, first character uppercased,
	///   terminated by a period. Fewer than `max_length` tokens means a dead end
	///   was reached.
	/// - `Err(ModelError::NotTrained)`: The model was never trained.
	/// - `Err(ModelError::InvalidMaxLength)`: `max_length` is 0.
	pub fn generate_with_rng<R: Rng + ?Sized>(
		&self,
		seed: &str,
		max_length: usize,
		rng: &mut R,
	) -> Result<String, ModelError> {
		if !self.is_trained {
			return Err(ModelError::NotTrained);
		}
		if max_length < 1 {
			return Err(ModelError::InvalidMaxLength(max_length));
		}

		let seed = seed.to_lowercase();
		let mut words: Vec<&str> = Vec::new();
		words.push(&seed);

		let mut current: &str = &seed;
		for _ in 1..max_length {
			// Dead end: stop early
			let Some(next) = self.transitions.get(current).and_then(|s| s.predict(&mut *rng)) else {
				break;
			};
			words.push(next);
			current = next;
		}

		Ok(Self::to_sentence(&words))
	}

	/// Joins words with spaces, uppercases the first character and adds a period.
	fn to_sentence(words: &[&str]) -> String {
		let text = words.join(" ");
		let mut chars = text.chars();
		let mut sentence: String = match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		};
		sentence.push('.');
		sentence
	}
}
