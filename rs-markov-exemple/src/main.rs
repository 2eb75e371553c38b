use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{MarkovTextModel, ModelConfig, ModelError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, RUST_LOG overrides the default 'info' level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // An optional JSON configuration can be given as first argument, ex.
    // { "punctuation": [".", ",", "!"], "default_max_length": 8 }
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            serde_json::from_str::<ModelConfig>(&std::fs::read_to_string(path)?)?
        }
        None => ModelConfig::default(),
    };

    // Define the training data
    let corpus = "The quick brown fox jumps over the lazy dog. \
        The dog is lazy and sleeps a lot. \
        A brown fox is quick.";

    let mut model = MarkovTextModel::with_config(config)?;

    // Generating before training is an error, not a sentence
    match model.generate("The", 6) {
        Err(ModelError::NotTrained) => println!("Untrained model refused to generate"),
        other => println!("Should not happen: {:?}", other),
    }

    // Train the model (tokens count is reported through the log)
    model.train(corpus);

    println!("\n--- Generation Examples ---");

    // Seeds in and out of the vocabulary; 'sunshine' is never seen
    for (seed, max_length) in [("The", 6), ("lazy", 5), ("sunshine", 5)] {
        let generated = model.generate(seed, max_length)?;
        println!("Seed: '{}' -> Output: {}", seed, generated);
    }

    // Using the configured length
    println!("Seed: 'a' -> Output: {}", model.generate_default("a")?);

    // A seeded generator gives the same output on every run
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..3 {
        println!("Seeded {}: {}", i + 1, model.generate_with_rng("the", 8, &mut rng)?);
    }

    Ok(())
}
