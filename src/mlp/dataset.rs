//! Training samples and the built-in demonstration dataset.

/// One supervised training pair: a fixed-length input vector and the
/// target output vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Network input, one value per input neuron.
    pub input: Vec<f64>,
    /// Desired output, one value per output neuron.
    pub target: Vec<f64>,
}

impl Sample {
    /// Convenience constructor.
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Self { input, target }
    }
}

/// The digit-to-binary classification dataset: eight samples mapping the
/// normalized digit `d/7` to the 3-bit binary representation of `d`,
/// for `d` in `0..=7`.
///
/// A single-hidden-layer network trained on this set for a few thousand
/// epochs learns it to low error; see the training tests.
pub fn digit_dataset() -> Vec<Sample> {
    (0u8..8)
        .map(|d| {
            let input = vec![f64::from(d) / 7.0];
            let target = vec![
                f64::from((d >> 2) & 1),
                f64::from((d >> 1) & 1),
                f64::from(d & 1),
            ];
            Sample::new(input, target)
        })
        .collect()
}
