//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// A register needs at least one qubit
    #[error("State vector needs at least one qubit")]
    ZeroQubits,

    /// Register too wide to allocate
    #[error("Cannot allocate a {num_qubits}-qubit state vector (limit {max_qubits})")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Memory allocation error
    #[error("Failed to allocate {bytes} bytes for state vector")]
    AllocationFailed { bytes: usize },

    /// Basis index outside the amplitude array
    #[error("Basis state index {index} out of range for {num_qubits}-qubit state")]
    BasisOutOfRange { index: usize, num_qubits: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Malformed ket string
    #[error("Invalid ket string '{ket}', expected the form |0101>")]
    InvalidKet { ket: String },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
