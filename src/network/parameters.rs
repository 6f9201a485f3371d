use rand::Rng;

use crate::math::matrix::Matrix;

/// Hidden-layer width used when the caller does not pick one.
pub const HIDDEN_SIZE: usize = 4;

/// Weights are drawn from N(0, 1) and shrunk by this factor so tanh starts
/// in its linear region.
const INIT_SCALE: f64 = 0.01;

/// Layer widths: input features, hidden units, output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSizes {
    pub n_x: usize,
    pub n_h: usize,
    pub n_y: usize,
}

/// Infers the layer widths from a `(features, m)` input and a `(outputs, m)`
/// label matrix. The hidden width defaults to [`HIDDEN_SIZE`].
pub fn layer_sizes(x: &Matrix, y: &Matrix) -> LayerSizes {
    LayerSizes {
        n_x: x.rows,
        n_h: HIDDEN_SIZE,
        n_y: y.rows,
    }
}

/// Trainable weights and biases of the two layers.
///
/// Shapes: `w1 (n_h, n_x)`, `b1 (n_h, 1)`, `w2 (n_y, n_h)`, `b2 (n_y, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

impl Parameters {
    pub fn sizes(&self) -> LayerSizes {
        LayerSizes {
            n_x: self.w1.cols,
            n_h: self.w1.rows,
            n_y: self.w2.rows,
        }
    }

    /// Panics unless every matrix matches the shape contract implied by `w1`
    /// and `w2`.
    pub fn assert_shapes(&self) {
        let LayerSizes { n_x, n_h, n_y } = self.sizes();
        assert_eq!(self.w1.shape(), (n_h, n_x), "w1 shape");
        assert_eq!(self.b1.shape(), (n_h, 1), "b1 shape");
        assert_eq!(self.w2.shape(), (n_y, n_h), "w2 shape");
        assert_eq!(self.b2.shape(), (n_y, 1), "b2 shape");
    }
}

/// Cost gradients, one per parameter and with the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}

/// Small random weights and zero biases for an `n_x -> n_h -> n_y` network.
pub fn initialize_parameters<R: Rng + ?Sized>(
    n_x: usize,
    n_h: usize,
    n_y: usize,
    rng: &mut R,
) -> Parameters {
    let w1 = Matrix::randn(n_h, n_x, rng).scale(INIT_SCALE);
    let b1 = Matrix::zeros(n_h, 1);
    let w2 = Matrix::randn(n_y, n_h, rng).scale(INIT_SCALE);
    let b2 = Matrix::zeros(n_y, 1);

    assert_eq!(w1.shape(), (n_h, n_x));
    assert_eq!(b1.shape(), (n_h, 1));
    assert_eq!(w2.shape(), (n_y, n_h));
    assert_eq!(b2.shape(), (n_y, 1));

    Parameters { w1, b1, w2, b2 }
}
