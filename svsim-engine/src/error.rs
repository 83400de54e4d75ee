//! Error types for the engine

use svsim_core::{QuantumError, QubitId};
use svsim_state::StateError;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building an engine or applying gates
///
/// Every error is raised before the amplitude array is modified; a failed
/// call leaves the engine in the state it had before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Gate references a qubit outside the register
    #[error("Qubit index {qubit} out of range for {num_qubits}-qubit engine")]
    QubitOutOfRange { qubit: QubitId, num_qubits: usize },

    /// Gate cannot be applied as described
    #[error("Invalid gate {gate}: {reason}")]
    InvalidGate { gate: String, reason: String },

    /// Matrix failed the opt-in unitarity check
    #[error("Gate {gate} is not unitary: {reason}")]
    NonUnitary { gate: String, reason: String },

    /// Circuit declares more qubits than the engine holds
    #[error("Circuit spans {circuit} qubits but the engine holds {engine}")]
    CircuitTooWide { circuit: usize, engine: usize },

    /// State vector error
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Gate or circuit description error
    #[error("Circuit error: {0}")]
    Circuit(#[from] QuantumError),
}

impl EngineError {
    pub(crate) fn qubit_out_of_range(qubit: usize, num_qubits: usize) -> Self {
        Self::QubitOutOfRange {
            qubit: QubitId::new(qubit),
            num_qubits,
        }
    }
}
