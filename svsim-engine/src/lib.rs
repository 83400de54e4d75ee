//! Single-threaded full state-vector engine
//!
//! [`StateVectorEngine`] keeps every amplitude of an n-qubit register and
//! updates all of them exactly for each gate, without building the
//! 2^n × 2^n operator.
//!
//! # Kernels
//!
//! Two interchangeable strategies produce identical amplitudes:
//!
//! - [`KernelStrategy::Direct`]: scan all 2^n indices per matrix entry and
//!   filter on the gate qubits
//! - [`KernelStrategy::Insertion`] (default): enumerate the other qubits and
//!   insert the gate qubits, halving the visits for one-qubit gates
//!
//! # Example
//!
//! ```
//! use svsim_core::{Circuit, GateSpec};
//! use svsim_engine::{EngineConfig, StateVectorEngine};
//!
//! let mut circuit = Circuit::new(2)?;
//! circuit.add_gate(GateSpec::h(0))?;
//! circuit.add_gate(GateSpec::cnot(0, 1)?)?;
//!
//! let mut engine = StateVectorEngine::with_config(2, EngineConfig::default())?;
//! engine.apply_circuit(&circuit)?;
//!
//! for line in engine.render_default() {
//!     println!("{line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod kernels;
pub mod validation;

pub use config::{EngineConfig, DEFAULT_PRINT_THRESHOLD};
pub use engine::StateVectorEngine;
pub use error::{EngineError, Result};
pub use kernels::KernelStrategy;
