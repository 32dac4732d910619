//! Chromosome encoding and decoding.
//!
//! A chromosome is a bit string of length `L = 2 * bits_per_variable`;
//! the first half encodes `x`, the second half `y`. Each half is read
//! MSB-first as an unsigned integer `v` and mapped linearly onto the
//! decode range:
//!
//! ```text
//! gene = gene_min + (v / (2^bits - 1)) * (gene_max - gene_min)
//! ```
//!
//! so the all-zero substring decodes to exactly `gene_min` and the
//! all-one substring to exactly `gene_max`.

use super::config::GaParams;
use super::types::Individual;
use rand::Rng;

/// Decodes one gene substring to a real value in `[gene_min, gene_max]`.
///
/// # Panics
/// Panics if `bits` is empty.
pub fn decode_gene(bits: &[bool], gene_min: f64, gene_max: f64) -> f64 {
    assert!(!bits.is_empty(), "gene substring must not be empty");

    // Accumulate in f64 to support arbitrary substring lengths; exact for
    // substrings up to 53 bits, which covers any practical encoding.
    let value = bits
        .iter()
        .fold(0.0_f64, |acc, &bit| acc * 2.0 + if bit { 1.0 } else { 0.0 });
    let max_value = 2.0_f64.powi(bits.len() as i32) - 1.0;

    gene_min + (value / max_value) * (gene_max - gene_min)
}

/// Decodes a full chromosome into its `(x, y)` pair.
///
/// # Panics
/// Panics if the chromosome length does not match `params.chromosome_length`.
pub fn decode(chromosome: &[bool], params: &GaParams) -> (f64, f64) {
    assert_eq!(
        chromosome.len(),
        params.chromosome_length,
        "chromosome length mismatch"
    );
    let bits = params.bits_per_variable();
    let x = decode_gene(&chromosome[..bits], params.gene_min, params.gene_max);
    let y = decode_gene(&chromosome[bits..], params.gene_min, params.gene_max);
    (x, y)
}

/// Draws a uniformly random chromosome of the given length.
pub fn random_chromosome<R: Rng>(length: usize, rng: &mut R) -> Vec<bool> {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

/// Builds a consistent [`Individual`] from a chromosome: decodes both
/// variables and evaluates fitness from scratch.
///
/// This is the only constructor for individuals; it keeps the cached
/// fitness in sync with the bits it was computed from.
pub fn build_individual<F>(chromosome: Vec<bool>, params: &GaParams, eval: &F) -> Individual
where
    F: Fn(f64, f64) -> f64,
{
    let (x, y) = decode(&chromosome, params);
    let fitness = eval(x, y);
    Individual {
        chromosome,
        x,
        y,
        fitness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_all_zero_decodes_to_min() {
        let bits = vec![false; 12];
        let value = decode_gene(&bits, -10.0, 10.0);
        assert_eq!(value, -10.0);
    }

    #[test]
    fn test_all_one_decodes_to_max() {
        let bits = vec![true; 12];
        let value = decode_gene(&bits, -10.0, 10.0);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn test_single_bit_decodes_to_endpoints() {
        assert_eq!(decode_gene(&[false], 0.0, 1.0), 0.0);
        assert_eq!(decode_gene(&[true], 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_known_midrange_value() {
        // 0b0001 = 1 of max 15 over [0, 15] -> exactly 1.0
        let bits = [false, false, false, true];
        assert!((decode_gene(&bits, 0.0, 15.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_splits_halves() {
        let params = crate::ga::GaParams::default().with_chromosome_length(8);
        let mut chromosome = vec![false; 8];
        chromosome[4..].fill(true); // x = all zeros, y = all ones
        let (x, y) = decode(&chromosome, &params);
        assert_eq!(x, params.gene_min);
        assert_eq!(y, params.gene_max);
    }

    #[test]
    fn test_build_individual_caches_consistent_fitness() {
        let params = crate::ga::GaParams::default();
        let mut rng = create_rng(42);
        let chromosome = random_chromosome(params.chromosome_length, &mut rng);
        let ind = build_individual(chromosome, &params, &fitness::peak);
        assert!((ind.fitness - fitness::peak(ind.x, ind.y)).abs() < 1e-12);
    }

    #[test]
    fn test_random_chromosome_length_and_reproducibility() {
        let mut a = create_rng(9);
        let mut b = create_rng(9);
        let ca = random_chromosome(24, &mut a);
        let cb = random_chromosome(24, &mut b);
        assert_eq!(ca.len(), 24);
        assert_eq!(ca, cb);
    }

    proptest! {
        #[test]
        fn prop_decoded_value_stays_in_range(
            bits in proptest::collection::vec(any::<bool>(), 1..40),
            min in -100.0_f64..0.0,
            span in 1e-6_f64..200.0,
        ) {
            let max = min + span;
            let value = decode_gene(&bits, min, max);
            prop_assert!(value >= min - 1e-9);
            prop_assert!(value <= max + 1e-9);
        }

        #[test]
        fn prop_decode_is_monotone_in_integer_value(
            bits in proptest::collection::vec(any::<bool>(), 2..20),
        ) {
            // Flipping the lowest zero bit to one strictly increases the
            // decoded value.
            if let Some(pos) = bits.iter().rposition(|&b| !b) {
                let mut higher = bits.clone();
                higher[pos] = true;
                // Clear everything below pos so the integer strictly grows.
                for b in higher[pos + 1..].iter_mut() {
                    *b = false;
                }
                let lo = decode_gene(&bits, -10.0, 10.0);
                let hi = decode_gene(&higher, -10.0, 10.0);
                prop_assert!(hi >= lo);
            }
        }
    }
}
