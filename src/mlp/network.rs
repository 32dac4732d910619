//! Network topology, weight store, and forward pass.

use super::activation::Activation;
use crate::error::ParameterError;
use rand::Rng;

/// A fully connected feed-forward network.
///
/// The topology `[n0, n1, ..., nk]` gives the width of every layer, `n0`
/// being the input width and `nk` the output width. For each layer
/// transition `i -> i+1` the network stores a weight matrix of shape
/// `(n_{i+1} x n_i)`, a bias vector of length `n_{i+1}`, and one
/// [`Activation`] tag.
///
/// Weights and biases are initialized once at construction, uniformly in
/// `[-1, 1)`, and thereafter mutated in place only by the training
/// methods. No other component writes to them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network {
    pub(crate) layers: Vec<usize>,
    pub(crate) activations: Vec<Activation>,
    /// `weights[t][j][k]`: transition `t`, output neuron `j`, input `k`.
    pub(crate) weights: Vec<Vec<Vec<f64>>>,
    /// `biases[t][j]`: transition `t`, output neuron `j`.
    pub(crate) biases: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with randomly initialized weights and biases.
    ///
    /// Requires at least two layers, every layer non-empty, and exactly
    /// one activation tag per layer transition; violations fail with
    /// [`ParameterError`] before anything is allocated.
    pub fn new<R: Rng>(
        layers: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, ParameterError> {
        if layers.len() < 2 {
            return Err(ParameterError::TooFewLayers(layers.len()));
        }
        if let Some(index) = layers.iter().position(|&n| n == 0) {
            return Err(ParameterError::EmptyLayer { index });
        }
        if activations.len() != layers.len() - 1 {
            return Err(ParameterError::ActivationCountMismatch {
                layers: layers.len(),
                expected: layers.len() - 1,
                actual: activations.len(),
            });
        }

        let mut weights = Vec::with_capacity(layers.len() - 1);
        let mut biases = Vec::with_capacity(layers.len() - 1);
        for transition in layers.windows(2) {
            let (fan_in, fan_out) = (transition[0], transition[1]);
            weights.push(
                (0..fan_out)
                    .map(|_| (0..fan_in).map(|_| rng.random_range(-1.0..1.0)).collect())
                    .collect(),
            );
            biases.push((0..fan_out).map(|_| rng.random_range(-1.0..1.0)).collect());
        }

        Ok(Self {
            layers: layers.to_vec(),
            activations: activations.to_vec(),
            weights,
            biases,
        })
    }

    /// The layer widths this network was built with.
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    /// One activation tag per layer transition.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    /// Read-only view of the weight matrices, for inspection.
    pub fn weights(&self) -> &[Vec<Vec<f64>>] {
        &self.weights
    }

    /// Read-only view of the bias vectors, for inspection.
    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    /// Input width (`n0`).
    pub fn input_width(&self) -> usize {
        self.layers[0]
    }

    /// Output width (`nk`).
    pub fn output_width(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// Runs the forward pass and returns the output layer's activations.
    ///
    /// Pure and deterministic given the current weights; does not mutate
    /// the network.
    ///
    /// # Panics
    /// Panics if `input.len()` does not match the input width.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        let (_, mut activations) = self.forward_trace(input);
        activations.pop().expect("trace holds the output layer")
    }

    /// Forward pass retaining every layer's pre- and post-activation
    /// values, as needed by backpropagation.
    ///
    /// Returns `(pre, post)` where `post[0]` is the input vector,
    /// `post[i]` the activations of layer `i`, and `pre[t]` the weighted
    /// sums of transition `t` (so `post[t + 1][j] = act(pre[t][j])`).
    pub(crate) fn forward_trace(&self, input: &[f64]) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        assert_eq!(
            input.len(),
            self.input_width(),
            "input width mismatch: expected {}, got {}",
            self.input_width(),
            input.len()
        );

        let mut pre = Vec::with_capacity(self.weights.len());
        let mut post = Vec::with_capacity(self.layers.len());
        post.push(input.to_vec());

        for (transition, activation) in self.activations.iter().enumerate() {
            let current = &post[transition];
            let mut sums = Vec::with_capacity(self.layers[transition + 1]);
            for (neuron_weights, bias) in self.weights[transition]
                .iter()
                .zip(&self.biases[transition])
            {
                let sum = bias
                    + neuron_weights
                        .iter()
                        .zip(current)
                        .map(|(w, a)| w * a)
                        .sum::<f64>();
                sums.push(sum);
            }
            post.push(sums.iter().map(|&z| activation.apply(z)).collect());
            pre.push(sums);
        }

        (pre, post)
    }
}
