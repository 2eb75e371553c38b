//! Word-level Markov chain text generation library.
//!
//! This crate provides a minimal order-1 Markov chain generator including:
//! - Corpus normalization into lowercase word tokens
//! - Successor lists recording every observed adjacency (duplicates kept)
//! - Frequency-weighted generation from a seed with an injectable random source
//! - Serializable configuration and typed errors
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Markov model and its internal states.
///
/// Exposes `MarkovTextModel` while keeping the per-token state private.
pub mod model;

/// Corpus normalization (lowercasing, punctuation stripping, splitting).
pub mod tokenizer;

/// Model configuration, loadable from any serde format.
pub mod config;

/// Error types returned by the model.
pub mod error;

pub use config::ModelConfig;
pub use error::ModelError;
pub use model::markov_model::{MarkovTextModel, TrainOutcome, DEFAULT_MAX_LENGTH};
