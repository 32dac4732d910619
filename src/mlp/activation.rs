//! Per-layer activation functions.
//!
//! The closed set of supported nonlinearities, resolved once at network
//! construction. The hot loops dispatch on the enum; string tags only
//! appear at the parsing boundary, and an unrecognized tag is a
//! construction-time error rather than a silent fallback.

use crate::error::ParameterError;
use std::str::FromStr;

/// Elementwise nonlinearity applied to a layer's weighted sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    /// `1 / (1 + e^-z)`, output in (0, 1).
    Sigmoid,
    /// `max(0, z)`.
    Relu,
    /// Hyperbolic tangent, output in (-1, 1).
    Tanh,
    /// Identity.
    Linear,
}

impl Activation {
    /// Applies the function to a pre-activation value.
    pub fn apply(self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-z).exp()),
            Activation::Relu => z.max(0.0),
            Activation::Tanh => z.tanh(),
            Activation::Linear => z,
        }
    }

    /// Derivative with respect to the pre-activation.
    ///
    /// Sigmoid, tanh, and linear use their closed forms in terms of the
    /// post-activation value `post`. Relu reads the sign of the
    /// pre-activation `pre` directly, which is the correct gradient at
    /// the `post == 0.0` boundary.
    pub fn derivative(self, pre: f64, post: f64) -> f64 {
        match self {
            Activation::Sigmoid => post * (1.0 - post),
            Activation::Relu => {
                if pre > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Tanh => 1.0 - post * post,
            Activation::Linear => 1.0,
        }
    }
}

impl FromStr for Activation {
    type Err = ParameterError;

    /// Parses the tags used by configuration surfaces, including the
    /// legacy `"tanh_approx"` spelling for [`Activation::Tanh`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" => Ok(Activation::Relu),
            "tanh" | "tanh_approx" => Ok(Activation::Tanh),
            "linear" => Ok(Activation::Linear),
            other => Err(ParameterError::UnknownActivation(other.to_string())),
        }
    }
}
