use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Uniform;

/// Draws a `rows x cols` weight matrix with entries uniform on `[-1, 1]`.
///
/// Entry `(i, j)` is the weight from source unit `i` to target unit `j`.
/// Weights are drawn once and never mutated afterwards; re-randomizing
/// means drawing a whole new matrix.
///
/// # Arguments
/// * `rng` - A random number generator.
/// * `rows` - Number of source-layer units.
/// * `cols` - Number of target-layer units.
pub fn uniform_weights<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Array2<f64> {
    // SAFETY: This range is always valid.
    let weights = Uniform::new_inclusive(-1., 1.).unwrap();
    Array2::random_using((rows, cols), weights, rng)
}

/// Draws an input vector with entries uniform on `[0, 1)`.
///
/// # Arguments
/// * `rng` - A random number generator.
/// * `len` - Number of input-layer units.
pub fn random_input<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Array1<f64> {
    // SAFETY: This range is always valid.
    let entries = Uniform::new(0., 1.).unwrap();
    Array1::random_using(len, entries, rng)
}
