use ndarray::{Array1, Array2, ArrayView1};

use crate::activations::{relu, sigmoid};
use crate::error::{NetError, Result};

/// Fraction of hidden units the sparsity cutoff nominally keeps.
pub const SPARSITY_FRACTION: f64 = 0.2;

/// Hidden and output activations produced by one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    /// Hidden-layer activations after ReLU and the sparsity cutoff.
    pub hidden: Array1<f64>,
    /// Output-layer activations after the sigmoid.
    pub output: Array1<f64>,
}

/// Runs one forward pass of the network.
///
/// Entry `(i, j)` of a weight matrix is the weight from source unit `i` to
/// target unit `j`, so the weighted sum for hidden unit `j` is
/// `sum_i weights1[(i, j)] * input[i]`. The hidden layer goes through ReLU
/// and the top-20% sparsity cutoff, the output layer through the sigmoid.
///
/// Pure function: no state is kept anywhere, the inputs are not mutated,
/// and identical arguments produce bit-identical results.
///
/// # Arguments
/// * `input` - Input activations, one per source unit.
/// * `weights1` - Input-to-hidden weights, `input.len() x hidden`.
/// * `weights2` - Hidden-to-output weights, `hidden x output`.
///
/// # Errors
/// Returns `NetError::DimensionMismatch` when the input length does not
/// match the rows of `weights1`, or the two matrices disagree on the
/// hidden size. Nothing is computed in that case.
pub fn forward_pass(
    input: ArrayView1<f64>,
    weights1: &Array2<f64>,
    weights2: &Array2<f64>,
) -> Result<Activations> {
    if input.len() != weights1.nrows() {
        return Err(NetError::DimensionMismatch {
            a: "input",
            b: "encoder weights",
            got: input.len(),
            expected: weights1.nrows(),
        });
    }

    if weights2.nrows() != weights1.ncols() {
        return Err(NetError::DimensionMismatch {
            a: "decoder weights",
            b: "encoder weights",
            got: weights2.nrows(),
            expected: weights1.ncols(),
        });
    }

    let activated = input.dot(weights1).mapv(relu);
    let threshold = sparsity_threshold(&activated, SPARSITY_FRACTION);

    // The threshold is a value, not a rank cut: units tied with it all
    // survive, so the surviving count can exceed the nominal top fraction.
    let hidden = activated.mapv(|h| if h >= threshold { h } else { 0. });
    let output = hidden.dot(weights2).mapv(sigmoid);

    Ok(Activations { hidden, output })
}

/// Activation value at rank `floor(len * fraction)` of the descending
/// sort. Units strictly below it get zeroed out.
fn sparsity_threshold(activated: &Array1<f64>, fraction: f64) -> f64 {
    if activated.is_empty() {
        return 0.;
    }

    let mut sorted = activated.to_vec();
    sorted.sort_unstable_by(|x, y| y.total_cmp(x));
    sorted[(sorted.len() as f64 * fraction).floor() as usize]
}
