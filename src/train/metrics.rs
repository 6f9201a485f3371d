use crate::math::matrix::Matrix;

/// Percentage of samples whose prediction equals the label.
///
/// `predictions` comes from `predict` and `labels` is the `(1, m)` label
/// matrix with entries in {0, 1}.
pub fn accuracy(predictions: &[Vec<bool>], labels: &Matrix) -> f64 {
    assert_eq!(predictions.len(), labels.rows, "predictions do not match labels");
    assert!(
        predictions.iter().all(|row| row.len() == labels.cols),
        "predictions do not match labels"
    );

    let total = labels.rows * labels.cols;
    if total == 0 {
        return 0.0;
    }

    let correct = predictions.iter().flatten()
        .zip(labels.data.iter().flatten())
        .filter(|&(&p, &y)| p == (y > 0.5))
        .count();
    correct as f64 / total as f64 * 100.0
}
