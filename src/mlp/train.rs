//! Online backpropagation and the epoch driver.
//!
//! Training is stochastic gradient descent with batch size 1. The epoch
//! driver walks the dataset in the order supplied — sample order is part
//! of the reproducibility contract and is never shuffled — measuring each
//! sample's error against the weights *before* that sample's update.

use super::dataset::Sample;
use super::network::Network;

/// Summary of one training epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochReport {
    /// Caller-supplied epoch index.
    pub epoch: usize,
    /// Mean of per-sample mean-squared errors over the epoch.
    pub mean_error: f64,
}

impl Network {
    /// Applies one backpropagation update for a single `(input, target)`
    /// pair.
    ///
    /// The forward pass retains every layer's pre- and post-activation
    /// values. Errors are pushed from the output layer back to the first
    /// hidden layer; the error vector for a layer is computed from the
    /// weights *before* this sample's update touches them, then the
    /// current transition's weights and biases are adjusted by
    /// `learning_rate * error * input_activation`.
    ///
    /// # Panics
    /// Panics if `input` or `target` widths do not match the topology.
    pub fn train_sample(&mut self, input: &[f64], target: &[f64], learning_rate: f64) {
        assert_eq!(
            target.len(),
            self.output_width(),
            "target width mismatch: expected {}, got {}",
            self.output_width(),
            target.len()
        );

        let (pre, post) = self.forward_trace(input);
        let last = self.weights.len() - 1;

        // Output-layer error, expressed through the activation derivative.
        let output_activation = self.activations[last];
        let mut errors: Vec<f64> = (0..self.layers[last + 1])
            .map(|j| {
                let output = post[last + 1][j];
                (target[j] - output) * output_activation.derivative(pre[last][j], output)
            })
            .collect();

        for transition in (0..=last).rev() {
            // Propagate first: the previous layer's errors must read this
            // transition's weights before they are updated below.
            let propagated = if transition > 0 {
                let upstream_activation = self.activations[transition - 1];
                Some(
                    (0..self.layers[transition])
                        .map(|k| {
                            let sum: f64 = self.weights[transition]
                                .iter()
                                .zip(&errors)
                                .map(|(neuron_weights, error)| neuron_weights[k] * error)
                                .sum();
                            sum * upstream_activation
                                .derivative(pre[transition - 1][k], post[transition][k])
                        })
                        .collect::<Vec<f64>>(),
                )
            } else {
                None
            };

            let layer_input = &post[transition];
            for (j, &error) in errors.iter().enumerate() {
                for (weight, activation) in
                    self.weights[transition][j].iter_mut().zip(layer_input)
                {
                    *weight += learning_rate * error * activation;
                }
                self.biases[transition][j] += learning_rate * error;
            }

            if let Some(propagated) = propagated {
                errors = propagated;
            }
        }
    }

    /// Runs one full pass over the dataset, in order.
    ///
    /// For each sample: predict with the current weights, accumulate the
    /// sample's mean-squared error (normalized by output width), then
    /// apply [`train_sample`](Network::train_sample). Later samples in
    /// the same epoch see updates from earlier samples — this is
    /// intentional online learning, not a frozen-epoch batch.
    ///
    /// Returns the mean of per-sample errors over the whole epoch.
    ///
    /// # Panics
    /// Panics if the dataset is empty or any sample's widths mismatch the
    /// topology.
    pub fn train_epoch(&mut self, dataset: &[Sample], learning_rate: f64) -> f64 {
        assert!(!dataset.is_empty(), "dataset must not be empty");

        let output_width = self.output_width() as f64;
        let mut total_error = 0.0;
        for sample in dataset {
            let output = self.predict(&sample.input);
            let sample_error: f64 = sample
                .target
                .iter()
                .zip(&output)
                .map(|(target, out)| (target - out) * (target - out))
                .sum();
            total_error += sample_error / output_width;

            self.train_sample(&sample.input, &sample.target, learning_rate);
        }

        total_error / dataset.len() as f64
    }
}
