mod activations;
mod error;
mod forward;
mod init;
mod network;
mod random;
mod selection;

pub use activations::{relu, sigmoid};
pub use error::{NetError, Result};
pub use forward::{forward_pass, Activations, SPARSITY_FRACTION};
pub use init::{random_input, uniform_weights};
pub use network::{
    NetworkState, DEFAULT_INPUT_VALUE, HIDDEN_UNITS, INPUT_UNITS, OUTPUT_UNITS,
};
pub use random::SeededRng;
pub use selection::{NeuronLayer, Selection, WeightLayer};
