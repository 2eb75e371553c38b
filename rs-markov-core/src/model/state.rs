use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state in the Markov chain.
///
/// A `State` corresponds to a single token (`key`) and stores every token
/// observed immediately after it, in the order it was observed.
///
/// Conceptually, this is a node in a Markov chain where the outgoing edges
/// are weighted by how many times they appear in `successors`.
///
/// ## Responsibilities:
/// - Accumulate successor observations during learning
/// - Predict the next token using frequency-weighted random sampling
///
/// ## Invariants
/// - All successors were observed directly after `key`
/// - `successors` is append-only: never reordered, never deduplicated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Token owning this state.
	key: String,
	/// Observed successors, in insertion order.
	/// Example: "the" => ["quick", "lazy", "dog"]
	successors: Vec<String>,
}

impl State {
	/// Creates a new empty state for the given token.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: Vec::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of `next` following this state's token.
	pub fn add_transition(&mut self, next: &str) {
		self.successors.push(next.to_owned());
	}

	/// Returns the observed successors in insertion order.
	pub fn successors(&self) -> &[String] {
		&self.successors
	}

	/// Predicts the next token by picking uniformly over `successors`.
	///
	/// Since repeated observations are stored repeatedly, this is equivalent
	/// to a frequency-weighted choice over the distinct successors.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng).map(String::as_str)
	}
}
