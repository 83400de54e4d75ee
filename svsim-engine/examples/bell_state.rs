//! Prepare a Bell pair and print the resulting state
//!
//! Run with `RUST_LOG=svsim_engine=trace` to see every gate application.

use svsim_core::{Circuit, GateSpec};
use svsim_engine::{EngineConfig, StateVectorEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svsim_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut circuit = Circuit::new(2)?;
    circuit.add_gate(GateSpec::h(0))?;
    circuit.add_gate(GateSpec::cnot(0, 1)?)?;

    println!("{circuit}");

    let mut engine = StateVectorEngine::with_config(2, EngineConfig::strict())?;
    engine.apply_circuit(&circuit)?;

    println!("Final state:");
    for term in engine.render_default() {
        println!("  {term}");
    }
    println!("norm = {:.12}", engine.norm());

    Ok(())
}
