//! Fitness-proportionate (roulette-wheel) parent selection.
//!
//! Selection probability is proportional to raw fitness, which the
//! engine maximizes. A population whose total fitness is zero degrades
//! to a uniform pick instead of dividing by zero.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selects one parent by roulette wheel: draws a uniform value in
/// `[0, total_fitness)` and walks the population subtracting each
/// individual's fitness until the remainder drops to zero or below.
///
/// Fitness values are assumed non-negative. If the total is zero the
/// draw degenerates and an individual is picked uniformly at random.
///
/// # Complexity
/// O(n) per selection (linear scan).
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<'a, R: Rng>(population: &'a [Individual], rng: &mut R) -> &'a Individual {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let total: f64 = population.iter().map(|ind| ind.fitness).sum();
    if total <= 0.0 {
        return &population[rng.random_range(0..population.len())];
    }

    let mut remainder = rng.random_range(0.0..total);
    for individual in population {
        remainder -= individual.fitness;
        if remainder <= 0.0 {
            return individual;
        }
    }

    // Floating-point fallback: the running sum can end marginally above 0.
    &population[population.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .map(|&f| Individual {
                chromosome: vec![false; 4],
                x: 0.0,
                y: 0.0,
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_favors_high_fitness() {
        let pop = make_population(&[1.0, 50.0, 2.0, 5.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let chosen = roulette(&pop, &mut rng);
            let idx = pop
                .iter()
                .position(|ind| std::ptr::eq(ind, chosen))
                .unwrap();
            counts[idx] += 1;
        }
        // Fitness 50 of total 58 should take the clear majority.
        assert!(
            counts[1] > 7000,
            "expected dominant individual >70% of picks, got {counts:?}"
        );
    }

    #[test]
    fn test_zero_total_fitness_falls_back_to_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let chosen = roulette(&pop, &mut rng);
            let idx = pop
                .iter()
                .position(|ind| std::ptr::eq(ind, chosen))
                .unwrap();
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform picks, got {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[3.0]);
        let mut rng = create_rng(42);
        assert!(std::ptr::eq(roulette(&pop, &mut rng), &pop[0]));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual> = vec![];
        let mut rng = create_rng(42);
        roulette(&pop, &mut rng);
    }
}
