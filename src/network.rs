use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::{NetError, Result};
use crate::forward::forward_pass;
use crate::init::uniform_weights;
use crate::selection::{NeuronLayer, Selection, WeightLayer};

/// Number of input-layer units.
pub const INPUT_UNITS: usize = 10;
/// Number of hidden-layer units.
pub const HIDDEN_UNITS: usize = 20;
/// Number of output-layer units.
pub const OUTPUT_UNITS: usize = 10;
/// Per-entry value of the initial input vector.
pub const DEFAULT_INPUT_VALUE: f64 = 0.1;

/// One immutable snapshot of the network.
///
/// `hidden` and `output` are always the forward pass of `input` through
/// the two weight matrices. The fields stay private so no caller can set
/// them independently; feeding a new input produces a whole new snapshot
/// and the weights are never mutated in place.
#[derive(Debug, Clone)]
pub struct NetworkState {
    input: Array1<f64>,
    hidden: Array1<f64>,
    output: Array1<f64>,
    weights1: Array2<f64>,
    weights2: Array2<f64>,
}

impl NetworkState {
    /// Creates the initial snapshot: freshly drawn uniform weights and the
    /// default constant input.
    ///
    /// # Arguments
    /// * `rng` - Generator used to draw both weight matrices.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let weights1 = uniform_weights(rng, INPUT_UNITS, HIDDEN_UNITS);
        let weights2 = uniform_weights(rng, HIDDEN_UNITS, OUTPUT_UNITS);
        let input = Array1::from_elem(INPUT_UNITS, DEFAULT_INPUT_VALUE);

        // SAFETY: The fixed layer sizes always agree.
        let acts = forward_pass(input.view(), &weights1, &weights2).unwrap();

        Self {
            input,
            hidden: acts.hidden,
            output: acts.output,
            weights1,
            weights2,
        }
    }

    /// Produces the snapshot for a new input, keeping the current weights.
    ///
    /// The receiver is untouched, so on a dimension error the caller still
    /// holds the previous snapshot and can keep displaying it.
    ///
    /// # Errors
    /// Returns `NetError::DimensionMismatch` if `input` does not match the
    /// input layer size.
    pub fn with_input(&self, input: Array1<f64>) -> Result<Self> {
        let acts = forward_pass(input.view(), &self.weights1, &self.weights2)?;

        Ok(Self {
            input,
            hidden: acts.hidden,
            output: acts.output,
            weights1: self.weights1.clone(),
            weights2: self.weights2.clone(),
        })
    }

    /// Input-layer activations.
    pub fn input(&self) -> &Array1<f64> {
        &self.input
    }

    /// Hidden-layer activations, post ReLU and sparsity cutoff.
    pub fn hidden(&self) -> &Array1<f64> {
        &self.hidden
    }

    /// Output-layer activations, post sigmoid.
    pub fn output(&self) -> &Array1<f64> {
        &self.output
    }

    /// Input-to-hidden weights; entry `(i, j)` is source `i` to target `j`.
    pub fn weights1(&self) -> &Array2<f64> {
        &self.weights1
    }

    /// Hidden-to-output weights; entry `(j, k)` is source `j` to target `k`.
    pub fn weights2(&self) -> &Array2<f64> {
        &self.weights2
    }

    /// Resolves a neuron pick to the values the info panel displays.
    ///
    /// # Errors
    /// Returns `NetError::IndexOutOfBounds` if `index` is outside the layer.
    pub fn neuron(&self, layer: NeuronLayer, index: usize) -> Result<Selection> {
        let values = match layer {
            NeuronLayer::Input => &self.input,
            NeuronLayer::Hidden => &self.hidden,
            NeuronLayer::Output => &self.output,
        };

        match values.get(index) {
            Some(&value) => Ok(Selection::Neuron {
                layer,
                index,
                value,
            }),
            None => Err(NetError::IndexOutOfBounds {
                layer: layer.name(),
                index,
                len: values.len(),
            }),
        }
    }

    /// Resolves a connection pick to the values the info panel displays.
    ///
    /// # Errors
    /// Returns `NetError::IndexOutOfBounds` if either endpoint is outside
    /// its layer.
    pub fn connection(
        &self,
        layer: WeightLayer,
        source: usize,
        target: usize,
    ) -> Result<Selection> {
        let weights = match layer {
            WeightLayer::InputToHidden => &self.weights1,
            WeightLayer::HiddenToOutput => &self.weights2,
        };

        let (rows, cols) = weights.dim();
        if source >= rows {
            return Err(NetError::IndexOutOfBounds {
                layer: layer.name(),
                index: source,
                len: rows,
            });
        }

        if target >= cols {
            return Err(NetError::IndexOutOfBounds {
                layer: layer.name(),
                index: target,
                len: cols,
            });
        }

        Ok(Selection::Connection {
            layer,
            source,
            target,
            weight: weights[(source, target)],
        })
    }
}
