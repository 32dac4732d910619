//! Default fitness evaluation.
//!
//! The engine accepts any `Fn(f64, f64) -> f64` evaluator; this module
//! provides the default one. Roulette-wheel selection divides by total
//! fitness, so evaluators are expected to return strictly positive
//! values — [`peak`] guarantees this through its additive constant.

/// The default fitness function, maximized by the engine:
///
/// ```text
/// f(x, y) = |e^-x - y^2 + 1| + 0.0001
/// ```
///
/// Strictly positive for all inputs.
pub fn peak(x: f64, y: f64) -> f64 {
    ((-x).exp() - y * y + 1.0).abs() + 0.0001
}
