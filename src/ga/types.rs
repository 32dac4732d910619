//! Value records for the GA engine.
//!
//! Individuals are immutable value records: operators never mutate a
//! chromosome in place, they build new records through the codec so the
//! cached fitness always matches the bits it was computed from.

/// One candidate solution: a fixed-length chromosome with its decoded
/// variables and cached fitness.
///
/// Construct through [`crate::ga::codec::build_individual`] (or the
/// engine), never by hand, so that `x`, `y`, and `fitness` stay consistent
/// with `chromosome`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The bit string; the first half encodes `x`, the second half `y`.
    pub chromosome: Vec<bool>,
    /// Decoded first variable.
    pub x: f64,
    /// Decoded second variable.
    pub y: f64,
    /// Evaluator output for the current chromosome. Higher is better.
    pub fitness: f64,
}

/// An ordered population of individuals. Duplicates are valid.
pub type Population = Vec<Individual>;

/// Summary of one generation, reported by
/// [`crate::ga::GaEngine::run_generation`].
///
/// Holds the best individual by value, so later evolution cannot corrupt
/// recorded history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Caller-supplied generation index.
    pub generation: usize,
    /// Highest fitness in the new population.
    pub best_fitness: f64,
    /// Arithmetic mean fitness over the new population.
    pub mean_fitness: f64,
    /// The best individual of the new population.
    pub best: Individual,
}
