use planar_nn::Matrix;
use rand::Rng;

/// Two interleaved classes shaped like a `petals`-leaved flower.
///
/// Returns `x` of shape `(2, m)` and `y` of shape `(1, m)`. `m` is rounded
/// down to an even count so both classes get the same number of points.
///
/// # Panics
/// Panics if `m < 4`; each class needs two points to span its angle range.
pub fn flower_dataset<R: Rng + ?Sized>(m: usize, petals: f64, rng: &mut R) -> (Matrix, Matrix) {
    assert!(m >= 4, "flower dataset needs at least 4 samples");
    let per_class = m / 2;
    let mut x = Matrix::zeros(2, 2 * per_class);
    let mut y = Matrix::zeros(1, 2 * per_class);

    for class in 0..2 {
        let angle_noise = Matrix::randn(1, per_class, rng);
        let radius_noise = Matrix::randn(1, per_class, rng);
        for k in 0..per_class {
            let step = 3.12 * k as f64 / (per_class - 1) as f64;
            let t = class as f64 * 3.12 + step + angle_noise.data[0][k] * 0.2;
            let r = petals * (4.0 * t).sin() + radius_noise.data[0][k] * 0.2;
            let col = class * per_class + k;
            x.data[0][col] = r * t.sin();
            x.data[1][col] = r * t.cos();
            y.data[0][col] = class as f64;
        }
    }

    (x, y)
}
