//! GA parameter set.
//!
//! [`GaParams`] holds every knob of the evolutionary loop and the
//! chromosome encoding. Values are checked by [`GaParams::validate`]
//! before any generation runs; out-of-range probabilities are rejected,
//! not clamped.

use crate::error::ParameterError;

/// Parameters for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use neurevo::ga::GaParams;
///
/// let params = GaParams::default();
/// assert_eq!(params.population_size, 100);
/// assert_eq!(params.chromosome_length, 24);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use neurevo::ga::GaParams;
///
/// let params = GaParams::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.01)
///     .with_crossover_rate(0.9);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaParams {
    /// Number of individuals in the population. Must be at least 1.
    pub population_size: usize,

    /// Per-bit flip probability during mutation, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Probability that a selected parent pair undergoes crossover,
    /// in `[0, 1]`. Pairs that skip crossover produce exact copies.
    pub crossover_rate: f64,

    /// Number of generations the caller intends to run. The engine itself
    /// runs one generation per call; this bounds the caller's loop.
    pub generations: usize,

    /// Total bit count of one chromosome. Even, split equally between the
    /// two variables.
    pub chromosome_length: usize,

    /// Lower bound of the decode range for both variables.
    pub gene_min: f64,

    /// Upper bound of the decode range for both variables.
    pub gene_max: f64,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.05,
            crossover_rate: 0.8,
            generations: 200,
            chromosome_length: 24,
            gene_min: -10.0,
            gene_max: 10.0,
        }
    }
}

impl GaParams {
    /// Bits used to encode one of the two variables.
    pub fn bits_per_variable(&self) -> usize {
        self.chromosome_length / 2
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the intended generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the total chromosome length (bits for both variables).
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the decode range shared by both variables.
    pub fn with_gene_range(mut self, min: f64, max: f64) -> Self {
        self.gene_min = min;
        self.gene_max = max;
        self
    }

    /// Validates the parameter set.
    ///
    /// Called by [`crate::ga::GaEngine::new`]; any violation is fatal to
    /// the call before computation starts.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.population_size < 1 {
            return Err(ParameterError::PopulationTooSmall(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParameterError::ProbabilityOutOfRange {
                name: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ParameterError::ProbabilityOutOfRange {
                name: "crossover_rate",
                value: self.crossover_rate,
            });
        }
        if self.chromosome_length < 2 || self.chromosome_length % 2 != 0 {
            return Err(ParameterError::InvalidChromosomeLength(
                self.chromosome_length,
            ));
        }
        if !(self.gene_min < self.gene_max) {
            return Err(ParameterError::EmptyGeneRange {
                min: self.gene_min,
                max: self.gene_max,
            });
        }
        if self.generations == 0 {
            return Err(ParameterError::ZeroGenerations);
        }
        Ok(())
    }
}
