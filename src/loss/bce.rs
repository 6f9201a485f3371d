use crate::math::matrix::Matrix;

/// Binary cross-entropy for a sigmoid output layer.
pub struct BceLoss;

impl BceLoss {
    /// Scalar BCE averaged over the `m` columns:
    ///   -(1/m)·Σ[y·ln(a) + (1-y)·ln(1-a)]
    ///
    /// `predicted` and `expected` are both `(1, m)`. Probabilities of exactly
    /// 0 or 1 are not clamped, so a saturated output yields `inf` or `NaN`.
    pub fn cost(predicted: &Matrix, expected: &Matrix) -> f64 {
        assert_eq!(predicted.shape(), expected.shape(), "labels do not match predictions");
        let m = expected.cols as f64;
        let logprobs = expected.zip_with(predicted, |y, a| y * a.ln() + (1.0 - y) * (1.0 - a).ln());
        -logprobs.sum() / m
    }
}
