use log::info;

use sae_core::{
    random_input, NetworkState, NeuronLayer, Result, SeededRng, HIDDEN_UNITS, INPUT_UNITS,
    OUTPUT_UNITS,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = match std::env::args().nth(1) {
        Some(phrase) => {
            info!("seeding from phrase {phrase:?}");
            SeededRng::from_phrase(&phrase)
        }
        None => {
            info!("no seed phrase given, seeding from OS entropy");
            SeededRng::from_entropy()
        }
    };

    let state = NetworkState::new(&mut rng);
    info!("initialized {INPUT_UNITS}-{HIDDEN_UNITS}-{OUTPUT_UNITS} network");

    let state = state.with_input(random_input(&mut rng, INPUT_UNITS))?;
    let active = state.hidden().iter().filter(|h| **h > 0.).count();

    println!("input:  {:.4}", state.input());
    println!("hidden: {:.4} ({active}/{HIDDEN_UNITS} active)", state.hidden());
    println!("output: {:.4}", state.output());
    println!("{}", state.neuron(NeuronLayer::Hidden, 0)?);

    Ok(())
}
