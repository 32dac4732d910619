//! Error types shared by both engines.
//!
//! Parameter validation happens before any computation starts; a
//! [`ParameterError`] is fatal to the call that raised it. Numeric
//! degeneracies that can occur mid-run (e.g. a population whose total
//! fitness is zero) are recovered locally and never surface as errors.

use thiserror::Error;

/// Invalid engine parameters, rejected at construction/validation time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    /// Population size must be at least 1.
    #[error("population size must be at least 1, got {0}")]
    PopulationTooSmall(usize),

    /// A probability parameter was outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    /// Chromosome length must be even (two variables) and at least 2.
    #[error("chromosome length must be even and >= 2, got {0}")]
    InvalidChromosomeLength(usize),

    /// Decode range must be a non-empty interval.
    #[error("gene range is empty: min {min} must be below max {max}")]
    EmptyGeneRange { min: f64, max: f64 },

    /// Generation count must be at least 1.
    #[error("generation count must be at least 1")]
    ZeroGenerations,

    /// A network needs an input layer and at least one further layer.
    #[error("topology must have at least 2 layers, got {0}")]
    TooFewLayers(usize),

    /// Every layer must contain at least one neuron.
    #[error("layer {index} has zero neurons")]
    EmptyLayer { index: usize },

    /// One activation tag is required per layer transition.
    #[error("expected {expected} activation tags for {layers} layers, got {actual}")]
    ActivationCountMismatch {
        layers: usize,
        expected: usize,
        actual: usize,
    },

    /// An activation tag outside the supported set.
    #[error("unknown activation function: {0:?}")]
    UnknownActivation(String),
}
