//! Multilayer perceptron trained by online backpropagation.
//!
//! A feed-forward network with a configurable stack of fully connected
//! layers. Weights and biases are initialized uniformly in `[-1, 1)` and
//! thereafter mutated in place by training — the one piece of mutable
//! state in this crate, owned exclusively by the [`Network`] instance.
//!
//! Training is stochastic gradient descent with batch size 1: each sample
//! updates the weights immediately, and later samples in the same epoch
//! see those updates. The caller drives the loop one epoch at a time via
//! [`Network::train_epoch`].
//!
//! # Key Types
//!
//! - [`Network`]: Topology, weight store, forward pass, training
//! - [`Activation`]: Closed set of per-layer nonlinearities
//! - [`Sample`] / [`EpochReport`]: Training data and per-epoch summary
//!
//! # References
//!
//! - Rumelhart, Hinton & Williams (1986), "Learning representations by
//!   back-propagating errors"

mod activation;
pub mod dataset;
mod network;
mod train;

pub use activation::Activation;
pub use dataset::Sample;
pub use network::Network;
pub use train::EpochReport;
