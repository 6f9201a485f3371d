use crate::activation::activation::ActivationFunction;
use crate::math::matrix::Matrix;
use crate::network::parameters::{Gradients, Parameters};

const HIDDEN_ACTIVATION: ActivationFunction = ActivationFunction::Tanh;
const OUTPUT_ACTIVATION: ActivationFunction = ActivationFunction::Sigmoid;

/// Decision threshold applied to the output probability.
pub const THRESHOLD: f64 = 0.5;

/// Intermediate values of one forward pass, kept for the matching backward
/// pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Cache {
    pub z1: Matrix,
    pub a1: Matrix,
    pub z2: Matrix,
    pub a2: Matrix,
}

/// Runs `x` (shape `(n_x, m)`) through both layers.
///
/// Returns the output probabilities `a2` of shape `(1, m)` together with the
/// cache needed by [`backward_propagation`].
pub fn forward_propagation(x: &Matrix, parameters: &Parameters) -> (Matrix, Cache) {
    assert_eq!(x.rows, parameters.w1.cols, "input features do not match w1");
    let m = x.cols;

    let z1 = parameters.w1.dot(x).add_column(&parameters.b1);
    let a1 = HIDDEN_ACTIVATION.apply(&z1);
    assert_eq!(a1.shape(), (parameters.w1.rows, m));

    let z2 = parameters.w2.dot(&a1).add_column(&parameters.b2);
    let a2 = OUTPUT_ACTIVATION.apply(&z2);
    assert_eq!(a2.shape(), (1, m));

    let cache = Cache { z1, a1, z2, a2: a2.clone() };
    (a2, cache)
}

/// Gradients of the cross-entropy cost for one full-batch forward pass.
pub fn backward_propagation(
    parameters: &Parameters,
    cache: &Cache,
    x: &Matrix,
    y: &Matrix,
) -> Gradients {
    assert_eq!(cache.a2.shape(), y.shape(), "labels do not match predictions");
    let m = y.cols as f64;

    // Sigmoid output paired with cross-entropy collapses to a2 - y.
    let dz2 = cache.a2.clone() - y.clone();
    let dw2 = dz2.dot(&cache.a1.transpose()).scale(1.0 / m);
    let db2 = dz2.row_sums().scale(1.0 / m);

    let tanh_grad = cache.a1.map(|a| HIDDEN_ACTIVATION.derivative_from_output(a));
    let dz1 = parameters.w2.transpose().dot(&dz2).hadamard(&tanh_grad);
    let dw1 = dz1.dot(&x.transpose()).scale(1.0 / m);
    let db1 = dz1.row_sums().scale(1.0 / m);

    assert_eq!(dw1.shape(), parameters.w1.shape());
    assert_eq!(db1.shape(), parameters.b1.shape());
    assert_eq!(dw2.shape(), parameters.w2.shape());
    assert_eq!(db2.shape(), parameters.b2.shape());

    Gradients { dw1, db1, dw2, db2 }
}

/// Classifies each column of `x`: `true` where the output probability is
/// strictly above [`THRESHOLD`].
pub fn predict(parameters: &Parameters, x: &Matrix) -> Vec<Vec<bool>> {
    let (a2, _) = forward_propagation(x, parameters);
    a2.data.iter()
        .map(|row| row.iter().map(|&p| p > THRESHOLD).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::bce::BceLoss;
    use crate::network::parameters::initialize_parameters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn toy_data() -> (Matrix, Matrix) {
        let x = Matrix::from_data(vec![
            vec![1.6, -0.5, 0.2, -1.1, 0.9],
            vec![-0.3, 0.8, -1.4, 0.5, 0.1],
        ]);
        let y = Matrix::from_data(vec![vec![1.0, 0.0, 1.0, 0.0, 1.0]]);
        (x, y)
    }

    fn w1(p: &mut Parameters) -> &mut Matrix { &mut p.w1 }
    fn b1(p: &mut Parameters) -> &mut Matrix { &mut p.b1 }
    fn w2(p: &mut Parameters) -> &mut Matrix { &mut p.w2 }
    fn b2(p: &mut Parameters) -> &mut Matrix { &mut p.b2 }

    /// Central-difference estimate of d(cost)/d(parameter) for every entry
    /// of the matrix picked out by `select`.
    fn numeric_gradient(
        p: &Parameters,
        x: &Matrix,
        y: &Matrix,
        select: fn(&mut Parameters) -> &mut Matrix,
    ) -> Matrix {
        let h = 1e-6;
        let mut shape_of = p.clone();
        let (rows, cols) = select(&mut shape_of).shape();
        let mut grad = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut plus = p.clone();
                select(&mut plus).data[i][j] += h;
                let mut minus = p.clone();
                select(&mut minus).data[i][j] -= h;
                let c_plus = BceLoss::cost(&forward_propagation(x, &plus).0, y);
                let c_minus = BceLoss::cost(&forward_propagation(x, &minus).0, y);
                grad.data[i][j] = (c_plus - c_minus) / (2.0 * h);
            }
        }
        grad
    }

    fn assert_close(analytic: &Matrix, numeric: &Matrix) {
        assert_eq!(analytic.shape(), numeric.shape());
        for (a, n) in analytic.data.iter().flatten().zip(numeric.data.iter().flatten()) {
            assert!((a - n).abs() < 1e-6, "analytic {a} vs numeric {n}");
        }
    }

    #[test]
    fn zero_input_gives_one_half_everywhere() {
        let x = Matrix::zeros(2, 4);
        let p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(11));
        let (a2, cache) = forward_propagation(&x, &p);
        assert_eq!(a2.shape(), (1, 4));
        assert!(a2.data[0].iter().all(|&a| a == 0.5));
        assert_eq!(cache.z1, Matrix::zeros(4, 4));
        assert_eq!(cache.a2, a2);
    }

    #[test]
    fn forward_outputs_are_probabilities() {
        let (x, _) = toy_data();
        let p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(5));
        let (a2, cache) = forward_propagation(&x, &p);
        assert!(a2.data[0].iter().all(|&a| a > 0.0 && a < 1.0));
        assert_eq!(cache.a1.shape(), (4, 5));
        assert_eq!(cache.z2.shape(), (1, 5));
    }

    #[test]
    #[should_panic(expected = "input features do not match w1")]
    fn forward_rejects_wrong_feature_count() {
        let p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(0));
        let _ = forward_propagation(&Matrix::zeros(3, 4), &p);
    }

    #[test]
    fn backward_gradients_match_parameter_shapes() {
        let (x, y) = toy_data();
        let p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(8));
        let (_, cache) = forward_propagation(&x, &p);
        let g = backward_propagation(&p, &cache, &x, &y);
        assert_eq!(g.dw1.shape(), (4, 2));
        assert_eq!(g.db1.shape(), (4, 1));
        assert_eq!(g.dw2.shape(), (1, 4));
        assert_eq!(g.db2.shape(), (1, 1));
    }

    #[test]
    fn backward_agrees_with_finite_differences() {
        let (x, y) = toy_data();
        // Larger weights than the default init so every gradient is well away from zero.
        let mut p = initialize_parameters(2, 3, 1, &mut StdRng::seed_from_u64(21));
        p.w1 = p.w1.scale(50.0);
        p.w2 = p.w2.scale(50.0);
        p.b1 = Matrix::from_data(vec![vec![0.1], vec![-0.2], vec![0.05]]);
        p.b2 = Matrix::from_data(vec![vec![0.3]]);

        let (_, cache) = forward_propagation(&x, &p);
        let g = backward_propagation(&p, &cache, &x, &y);

        assert_close(&g.dw1, &numeric_gradient(&p, &x, &y, w1));
        assert_close(&g.db1, &numeric_gradient(&p, &x, &y, b1));
        assert_close(&g.dw2, &numeric_gradient(&p, &x, &y, w2));
        assert_close(&g.db2, &numeric_gradient(&p, &x, &y, b2));
    }

    #[test]
    fn predict_thresholds_output_probabilities() {
        let (x, _) = toy_data();
        let mut p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(13));
        p.w2 = p.w2.scale(100.0);
        let (a2, _) = forward_propagation(&x, &p);
        let predictions = predict(&p, &x);
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].len(), 5);
        for (pred, a) in predictions[0].iter().zip(a2.data[0].iter()) {
            assert_eq!(*pred, *a > 0.5);
        }
    }

    #[test]
    fn exactly_one_half_is_not_a_positive_prediction() {
        let p = initialize_parameters(2, 4, 1, &mut StdRng::seed_from_u64(1));
        let predictions = predict(&p, &Matrix::zeros(2, 3));
        assert_eq!(predictions, vec![vec![false, false, false]]);
    }
}
