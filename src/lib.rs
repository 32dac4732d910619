//! Binary-encoded genetic optimizer and MLP backpropagation trainer.
//!
//! Two independent numerical engines that share no state:
//!
//! - **Genetic Algorithm (GA)**: Evolves a population of fixed-length
//!   bit-string individuals to maximize a two-variable fitness function,
//!   using roulette-wheel selection, single-point crossover, bit-flip
//!   mutation, and single-individual elitism. The caller drives the loop
//!   one generation at a time via [`ga::GaEngine::run_generation`].
//! - **Multilayer Perceptron (MLP)**: A feed-forward network with
//!   configurable topology and per-layer activation functions, trained by
//!   online backpropagation (SGD, batch size 1). The caller drives the
//!   loop one epoch at a time via [`mlp::Network::train_epoch`].
//!
//! # Design
//!
//! Both engines are single-threaded, synchronous, CPU-bound pure
//! computation. The one piece of mutable shared state is the
//! [`mlp::Network`]'s weight/bias matrices, mutated in place by training
//! and owned exclusively by the network instance.
//!
//! Randomness is injected: every entry point that draws random numbers is
//! generic over [`rand::Rng`], and [`random::create_rng`] builds a seeded
//! generator so runs are reproducible.

pub mod error;
pub mod ga;
pub mod mlp;
pub mod random;

pub use error::ParameterError;
