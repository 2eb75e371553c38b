/// Splits a corpus into normalized word tokens.
///
/// Normalization:
/// - Lowercases the whole text
/// - Replaces each punctuation character with a single space
/// - Splits on runs of whitespace (empty tokens never appear)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
	punctuation: Vec<char>,
}

/// Characters stripped by default.
pub const DEFAULT_PUNCTUATION: [char; 2] = ['.', ','];

impl Default for Tokenizer {
	fn default() -> Self {
		Self::new(DEFAULT_PUNCTUATION.to_vec())
	}
}

impl Tokenizer {
	pub fn new(punctuation: Vec<char>) -> Self {
		Self { punctuation }
	}

	/// Returns the characters treated as punctuation.
	pub fn punctuation(&self) -> &[char] {
		&self.punctuation
	}

	/// Tokenizes `text`.
	///
	/// # Notes
	/// - Lowercasing is Unicode-aware (`str::to_lowercase`).
	/// - Punctuation is replaced after lowercasing, so the configured set
	///   only needs lowercase forms.
	pub fn tokenize(&self, text: &str) -> Vec<String> {
		let cleaned: String = text
			.to_lowercase()
			.chars()
			.map(|c| if self.punctuation.contains(&c) { ' ' } else { c })
			.collect();

		cleaned.split_whitespace().map(str::to_owned).collect()
	}
}
