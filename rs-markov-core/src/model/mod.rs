//! Top-level module for the Markov generation system.
//!
//! The model is split in two parts:
//! - Per-token successor lists (`State`)
//! - The trainable, queryable chain (`MarkovTextModel`)

/// Order-1 Markov chain over word tokens.
///
/// Handles corpus ingestion, accumulation across training calls,
/// and seeded or process-random generation.
pub mod markov_model;

/// Internal representation of a single chain state (one token).
///
/// Tracks the ordered list of observed successors and supports
/// frequency-weighted random sampling.
/// This module is not exposed publicly.
mod state;
