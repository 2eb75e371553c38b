use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{MarkovTextModel, ModelConfig, ModelError, TrainOutcome};

const CORPUS: &str = "The quick brown fox jumps over the lazy dog. \
	The dog is lazy and sleeps a lot. \
	A brown fox is quick.";

fn trained_model() -> MarkovTextModel {
	let mut model = MarkovTextModel::new();
	assert_eq!(model.train(CORPUS), TrainOutcome::Trained { tokens: 22 });
	model
}

fn word_count(sentence: &str) -> usize {
	sentence.trim_end_matches('.').split(' ').count()
}

#[test]
fn new_model_is_empty_and_untrained() {
	let model = MarkovTextModel::new();
	assert!(!model.is_trained());
	assert_eq!(model.vocabulary_size(), 0);
}

#[test]
fn successors_follow_insertion_order() {
	let model = trained_model();
	assert!(model.is_trained());
	assert_eq!(model.successors("the").unwrap(), ["quick", "lazy", "dog"]);
	assert_eq!(model.successors("brown").unwrap(), ["fox", "fox"]);
	assert_eq!(model.successors("a").unwrap(), ["lot", "brown"]);
	assert_eq!(model.successors("quick").unwrap(), ["brown"]);
}

#[test]
fn every_non_final_token_has_a_state() {
	let model = trained_model();
	let mut vocabulary: Vec<&str> = model.vocabulary().collect();
	vocabulary.sort_unstable();
	assert_eq!(
		vocabulary,
		["a", "and", "brown", "dog", "fox", "is", "jumps", "lazy", "lot", "over", "quick", "sleeps", "the"]
	);
	assert_eq!(model.vocabulary_size(), 13);
}

#[test]
fn final_only_token_has_no_state() {
	let mut model = MarkovTextModel::new();
	model.train("alpha beta gamma");
	assert_eq!(model.successors("alpha").unwrap(), ["beta"]);
	assert_eq!(model.successors("beta").unwrap(), ["gamma"]);
	assert_eq!(model.successors("gamma"), None);
}

#[test]
fn short_corpus_is_a_noop() {
	for corpus in ["", "   ", "., ,.", "hello", "Hello."] {
		let mut model = MarkovTextModel::new();
		assert!(matches!(model.train(corpus), TrainOutcome::TooShort { .. }));
		assert!(!model.is_trained());
		assert_eq!(model.vocabulary_size(), 0);
	}
}

#[test]
fn short_corpus_keeps_a_trained_model_trained() {
	let mut model = trained_model();
	assert_eq!(model.train("lonely"), TrainOutcome::TooShort { tokens: 1 });
	assert!(model.is_trained());
	assert_eq!(model.vocabulary_size(), 13);
	assert_eq!(model.successors("lonely"), None);
}

#[test]
fn training_calls_accumulate() {
	let mut model = MarkovTextModel::new();
	model.train("red fish");
	model.train("red fish blue fish");
	assert_eq!(model.successors("red").unwrap(), ["fish", "fish"]);
	assert_eq!(model.successors("fish").unwrap(), ["blue"]);
	assert_eq!(model.successors("blue").unwrap(), ["fish"]);
}

#[test]
fn reset_forgets_everything() {
	let mut model = trained_model();
	model.reset();
	assert!(!model.is_trained());
	assert_eq!(model.vocabulary_size(), 0);
	assert_eq!(model.generate("the", 5), Err(ModelError::NotTrained));
}

#[test]
fn untrained_generation_fails_for_any_input() {
	let model = MarkovTextModel::new();
	for (seed, length) in [("the", 10), ("", 1), ("sunshine", 0), ("lazy", 1000)] {
		assert_eq!(model.generate(seed, length), Err(ModelError::NotTrained));
	}
	assert_eq!(
		ModelError::NotTrained.to_string(),
		"Error: Model must be trained before generation."
	);
}

#[test]
fn unknown_seed_returns_only_the_seed() {
	let model = trained_model();
	assert_eq!(model.generate("sunshine", 5).unwrap(), "Sunshine.");
}

#[test]
fn length_one_never_looks_up_successors() {
	let model = trained_model();
	assert_eq!(model.generate("lazy", 1).unwrap(), "Lazy.");
	assert_eq!(model.generate("LAZY", 1).unwrap(), "Lazy.");
}

#[test]
fn zero_length_is_rejected() {
	let model = trained_model();
	assert_eq!(model.generate("lazy", 0), Err(ModelError::InvalidMaxLength(0)));
}

#[test]
fn single_successor_chain_is_deterministic() {
	let model = trained_model();
	// and -> sleeps -> a
	assert_eq!(model.generate("And", 3).unwrap(), "And sleeps a.");
	assert_eq!(model.generate("jumps", 3).unwrap(), "Jumps over the.");
}

#[test]
fn dead_end_stops_generation_early() {
	let mut model = MarkovTextModel::new();
	model.train("one two three");
	assert_eq!(model.generate("one", 10).unwrap(), "One two three.");
}

#[test]
fn output_is_bounded_and_uses_observed_successors() {
	let model = trained_model();
	let mut rng = StdRng::seed_from_u64(2024);
	for length in 1..=15 {
		let sentence = model.generate_with_rng("the", length, &mut rng).unwrap();
		assert!(sentence.starts_with("The"));
		assert!(sentence.ends_with('.'));
		assert!(word_count(&sentence) <= length);

		let words: Vec<String> = sentence
			.trim_end_matches('.')
			.to_lowercase()
			.split(' ')
			.map(str::to_owned)
			.collect();
		for pair in words.windows(2) {
			let successors = model.successors(&pair[0]).unwrap();
			assert!(successors.contains(&pair[1]), "{:?} not after {}", pair[1], pair[0]);
		}
	}
}

#[test]
fn chain_without_dead_end_reaches_max_length() {
	let mut model = MarkovTextModel::new();
	model.train("ping pong ping pong ping");
	let sentence = model.generate("ping", 7).unwrap();
	assert_eq!(sentence, "Ping pong ping pong ping pong ping.");
	assert_eq!(word_count(&sentence), 7);
}

#[test]
fn seeded_generation_is_reproducible() {
	let model = trained_model();
	let first = model
		.generate_with_rng("the", 12, &mut StdRng::seed_from_u64(99))
		.unwrap();
	let second = model
		.generate_with_rng("the", 12, &mut StdRng::seed_from_u64(99))
		.unwrap();
	assert_eq!(first, second);
}

#[test]
fn default_length_comes_from_config() {
	let config = ModelConfig { default_max_length: 3, ..ModelConfig::default() };
	let mut model = MarkovTextModel::with_config(config).unwrap();
	model.train("ping pong ping pong");
	assert_eq!(model.generate_default("ping").unwrap(), "Ping pong ping.");
}

#[test]
fn default_config_generates_up_to_ten_tokens() {
	let mut model = MarkovTextModel::new();
	model.train("ping pong ping");
	let sentence = model.generate_default("pong").unwrap();
	assert_eq!(word_count(&sentence), 10);
}

#[test]
fn custom_punctuation_is_stripped() {
	let config = ModelConfig { punctuation: vec!['.', ',', '!'], ..ModelConfig::default() };
	let mut model = MarkovTextModel::with_config(config).unwrap();
	model.train("Run! Run, fast.");
	assert_eq!(model.successors("run").unwrap(), ["run", "fast"]);
}

#[test]
fn invalid_config_is_rejected() {
	let config = ModelConfig { default_max_length: 0, ..ModelConfig::default() };
	assert!(matches!(
		MarkovTextModel::with_config(config),
		Err(ModelError::InvalidMaxLength(0))
	));
}
