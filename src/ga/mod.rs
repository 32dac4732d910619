//! Binary-encoded Genetic Algorithm engine.
//!
//! Maximizes a two-variable real function over individuals encoded as
//! fixed-length bit strings. The pipeline is the classic simple GA:
//! chromosome codec → fitness evaluation → roulette-wheel selection →
//! single-point crossover → bit-flip mutation → elitist replacement.
//!
//! # Key Types
//!
//! - [`GaParams`]: Algorithm parameters (population size, rates, encoding)
//! - [`GaEngine`]: Composes codec, evaluator, and operators; runs one
//!   generation at a time
//! - [`Individual`] / [`GenerationReport`]: Value records produced by the run
//!
//! # Submodules
//!
//! - [`codec`]: Bit-string encoding/decoding of the two variables
//! - [`fitness`]: The default evaluation function
//! - [`selection`]: Fitness-proportionate (roulette-wheel) parent selection
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod codec;
mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaParams;
pub use runner::GaEngine;
pub use types::{GenerationReport, Individual, Population};
