use std::fmt::{self, Display};

/// A neuron-bearing layer of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronLayer {
    Input,
    Hidden,
    Output,
}

impl NeuronLayer {
    /// The name the display layer shows for this layer.
    pub fn name(self) -> &'static str {
        match self {
            NeuronLayer::Input => "input",
            NeuronLayer::Hidden => "hidden",
            NeuronLayer::Output => "output",
        }
    }
}

/// A weight matrix between two adjacent layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightLayer {
    InputToHidden,
    HiddenToOutput,
}

impl WeightLayer {
    /// The name the display layer shows for this connection group.
    pub fn name(self) -> &'static str {
        match self {
            WeightLayer::InputToHidden => "input to hidden",
            WeightLayer::HiddenToOutput => "hidden to output",
        }
    }
}

/// What the user picked in the scene, with the values to display.
///
/// The fields mirror the pick payload the renderer reports: either a
/// neuron (layer, index, activation value) or a single connection (layer,
/// both endpoints, weight).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Neuron {
        layer: NeuronLayer,
        index: usize,
        value: f64,
    },
    Connection {
        layer: WeightLayer,
        source: usize,
        target: usize,
        weight: f64,
    },
}

impl Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Neuron {
                layer,
                index,
                value,
            } => {
                write!(f, "neuron {}[{index}] = {value:.4}", layer.name())
            }
            Selection::Connection {
                layer,
                source,
                target,
                weight,
            } => {
                write!(
                    f,
                    "connection {} [{source} -> {target}] = {weight:.4}",
                    layer.name()
                )
            }
        }
    }
}
