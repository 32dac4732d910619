//! Generation-at-a-time evolutionary loop.
//!
//! [`GaEngine`] composes the codec, the fitness evaluator, roulette-wheel
//! selection, and the crossover/mutation operators. It deliberately runs
//! one generation per call: a long-running caller owns the loop over
//! `params.generations` and can yield to its host between calls.

use super::codec;
use super::config::GaParams;
use super::fitness;
use super::operators;
use super::selection;
use super::types::{GenerationReport, Individual, Population};
use crate::error::ParameterError;
use rand::Rng;

/// The GA engine: validated parameters plus an injected fitness evaluator.
///
/// The default evaluator is [`fitness::peak`]; any `Fn(f64, f64) -> f64`
/// returning non-negative values can be supplied instead.
///
/// # Usage
///
/// ```
/// use neurevo::ga::{GaEngine, GaParams};
/// use neurevo::random::create_rng;
///
/// let engine = GaEngine::new(GaParams::default().with_population_size(20)).unwrap();
/// let mut rng = create_rng(42);
/// let mut population = engine.initialize_population(&mut rng);
/// for generation in 0..5 {
///     let (next, report) = engine.run_generation(&population, generation, &mut rng);
///     population = next;
///     assert_eq!(population.len(), 20);
///     assert!(report.best_fitness >= report.mean_fitness);
/// }
/// ```
#[derive(Debug)]
pub struct GaEngine<F = fn(f64, f64) -> f64>
where
    F: Fn(f64, f64) -> f64,
{
    params: GaParams,
    eval: F,
}

impl GaEngine {
    /// Creates an engine with the default evaluator, [`fitness::peak`].
    ///
    /// Fails with [`ParameterError`] if the parameters are invalid.
    pub fn new(params: GaParams) -> Result<Self, ParameterError> {
        GaEngine::with_evaluator(params, fitness::peak as fn(f64, f64) -> f64)
    }
}

impl<F> GaEngine<F>
where
    F: Fn(f64, f64) -> f64,
{
    /// Creates an engine with a caller-supplied fitness evaluator.
    ///
    /// The evaluator should return non-negative values; roulette-wheel
    /// selection weights parents by raw fitness.
    pub fn with_evaluator(params: GaParams, eval: F) -> Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self { params, eval })
    }

    /// The validated parameter set this engine runs with.
    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// Creates a fresh random population of `params.population_size`
    /// individuals, each fully decoded and evaluated.
    pub fn initialize_population<R: Rng>(&self, rng: &mut R) -> Population {
        (0..self.params.population_size)
            .map(|_| {
                let chromosome = codec::random_chromosome(self.params.chromosome_length, rng);
                codec::build_individual(chromosome, &self.params, &self.eval)
            })
            .collect()
    }

    /// Advances the population by exactly one generation.
    ///
    /// 1. The single best individual is copied unchanged (elitism).
    /// 2. Parent pairs are drawn by roulette wheel, recombined, and
    ///    mutated until the new population reaches the target size; if a
    ///    pair would overshoot, the second child is dropped so the size
    ///    contract holds for odd population sizes too.
    /// 3. Best and mean fitness are reported over the *new* population.
    ///
    /// `generation` is the caller's loop index, echoed in the report.
    pub fn run_generation<R: Rng>(
        &self,
        population: &[Individual],
        generation: usize,
        rng: &mut R,
    ) -> (Population, GenerationReport) {
        assert!(!population.is_empty(), "population must not be empty");

        let mut current = population.to_vec();
        current.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let target = self.params.population_size;
        let mut next: Population = Vec::with_capacity(target);
        next.push(current[0].clone());

        while next.len() < target {
            let parent1 = selection::roulette(&current, rng);
            let parent2 = selection::roulette(&current, rng);

            let (child1, child2) =
                operators::single_point_crossover(parent1, parent2, &self.params, &self.eval, rng);
            let child1 = operators::bit_flip_mutation(&child1, &self.params, &self.eval, rng);
            let child2 = operators::bit_flip_mutation(&child2, &self.params, &self.eval, rng);

            next.push(child1);
            if next.len() < target {
                next.push(child2);
            }
        }

        let report = summarize(&next, generation);
        (next, report)
    }
}

/// Builds the report for a finished generation.
fn summarize(population: &[Individual], generation: usize) -> GenerationReport {
    let best = population
        .iter()
        .max_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
        .clone();
    let mean_fitness =
        population.iter().map(|ind| ind.fitness).sum::<f64>() / population.len() as f64;

    GenerationReport {
        generation,
        best_fitness: best.fitness,
        mean_fitness,
        best,
    }
}
