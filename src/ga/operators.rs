//! Genetic operators: single-point crossover and bit-flip mutation.
//!
//! Both operators produce new [`Individual`] records; parents are never
//! mutated in place. Whenever an operator changes a chromosome, the child
//! is rebuilt through the codec so decoded values and fitness are
//! recomputed from scratch — stale fitness is never carried across a
//! structural change.

use super::codec;
use super::config::GaParams;
use super::types::Individual;
use rand::Rng;

/// Single-point crossover.
///
/// With probability `1 - crossover_rate` returns exact copies of both
/// parents. Otherwise picks a cut point uniformly from `{1, ..., L-1}`
/// (never 0 or `L`, so each child mixes material from both parents),
/// swaps the chromosome suffixes, and rebuilds both children with fresh
/// decoded values and fitness.
pub fn single_point_crossover<F, R>(
    parent1: &Individual,
    parent2: &Individual,
    params: &GaParams,
    eval: &F,
    rng: &mut R,
) -> (Individual, Individual)
where
    F: Fn(f64, f64) -> f64,
    R: Rng,
{
    if rng.random_range(0.0..1.0) > params.crossover_rate {
        return (parent1.clone(), parent2.clone());
    }

    let length = params.chromosome_length;
    let point = rng.random_range(1..length);

    let mut child1 = parent1.chromosome[..point].to_vec();
    child1.extend_from_slice(&parent2.chromosome[point..]);
    let mut child2 = parent2.chromosome[..point].to_vec();
    child2.extend_from_slice(&parent1.chromosome[point..]);

    (
        codec::build_individual(child1, params, eval),
        codec::build_individual(child2, params, eval),
    )
}

/// Bit-flip mutation.
///
/// Flips each bit independently with probability `mutation_rate`. If no
/// bit changed the input is returned unchanged and its cached fitness is
/// reused; otherwise the mutant is rebuilt through the codec.
pub fn bit_flip_mutation<F, R>(
    individual: &Individual,
    params: &GaParams,
    eval: &F,
    rng: &mut R,
) -> Individual
where
    F: Fn(f64, f64) -> f64,
    R: Rng,
{
    let mut chromosome = individual.chromosome.clone();
    let mut changed = false;
    for bit in chromosome.iter_mut() {
        if rng.random_range(0.0..1.0) < params.mutation_rate {
            *bit = !*bit;
            changed = true;
        }
    }

    if !changed {
        return individual.clone();
    }
    codec::build_individual(chromosome, params, eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{codec, fitness, GaParams};
    use crate::random::create_rng;

    fn make_individual(chromosome: Vec<bool>, params: &GaParams) -> Individual {
        codec::build_individual(chromosome, params, &fitness::peak)
    }

    #[test]
    fn test_crossover_disabled_returns_copies() {
        let params = GaParams::default().with_crossover_rate(0.0);
        let mut rng = create_rng(42);
        let p1 = make_individual(vec![false; 24], &params);
        let p2 = make_individual(vec![true; 24], &params);

        let (c1, c2) = single_point_crossover(&p1, &p2, &params, &fitness::peak, &mut rng);
        assert_eq!(c1.chromosome, p1.chromosome);
        assert_eq!(c2.chromosome, p2.chromosome);
    }

    #[test]
    fn test_crossover_always_applied_mixes_both_parents() {
        let params = GaParams::default().with_crossover_rate(1.0);
        let mut rng = create_rng(42);
        let p1 = make_individual(vec![false; 24], &params);
        let p2 = make_individual(vec![true; 24], &params);

        for _ in 0..50 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &params, &fitness::peak, &mut rng);
            // The cut point is interior, so each child holds bits from both
            // parents and differs from both.
            assert!(c1.chromosome.iter().any(|&b| b));
            assert!(c1.chromosome.iter().any(|&b| !b));
            assert!(c2.chromosome.iter().any(|&b| b));
            assert!(c2.chromosome.iter().any(|&b| !b));
            // Suffix swap: the two children are bitwise complements here.
            let complement: Vec<bool> = c1.chromosome.iter().map(|&b| !b).collect();
            assert_eq!(c2.chromosome, complement);
        }
    }

    #[test]
    fn test_crossover_children_have_fresh_fitness() {
        let params = GaParams::default().with_crossover_rate(1.0);
        let mut rng = create_rng(7);
        let p1 = make_individual(vec![false; 24], &params);
        let p2 = make_individual(vec![true; 24], &params);

        let (c1, c2) = single_point_crossover(&p1, &p2, &params, &fitness::peak, &mut rng);
        for child in [&c1, &c2] {
            let (x, y) = codec::decode(&child.chromosome, &params);
            assert!((child.x - x).abs() < 1e-12);
            assert!((child.y - y).abs() < 1e-12);
            assert!((child.fitness - fitness::peak(x, y)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mutation_disabled_is_identity() {
        let params = GaParams::default().with_mutation_rate(0.0);
        let mut rng = create_rng(42);
        let ind = make_individual(vec![true; 24], &params);

        let mutant = bit_flip_mutation(&ind, &params, &fitness::peak, &mut rng);
        assert_eq!(mutant, ind);
    }

    #[test]
    fn test_mutation_rate_one_flips_every_bit() {
        let params = GaParams::default().with_mutation_rate(1.0);
        let mut rng = create_rng(42);
        let ind = make_individual(vec![false; 24], &params);

        let mutant = bit_flip_mutation(&ind, &params, &fitness::peak, &mut rng);
        assert!(mutant.chromosome.iter().all(|&b| b));
        assert!((mutant.fitness - fitness::peak(mutant.x, mutant.y)).abs() < 1e-12);
    }

    #[test]
    fn test_mutation_recomputes_fitness_on_change() {
        let params = GaParams::default().with_mutation_rate(0.5);
        let mut rng = create_rng(3);
        let ind = make_individual(vec![false; 24], &params);

        let mutant = bit_flip_mutation(&ind, &params, &fitness::peak, &mut rng);
        let (x, y) = codec::decode(&mutant.chromosome, &params);
        assert!((mutant.fitness - fitness::peak(x, y)).abs() < 1e-12);
    }
}
