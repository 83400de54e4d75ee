//! Error types for gate and circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors raised while describing gates and circuits
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// Qubit index outside the register
    #[error("Invalid qubit index {qubit}: register has only {num_qubits} qubits")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    /// Control and target of a two-qubit gate coincide
    #[error("Duplicate qubit {0} in gate '{1}'")]
    DuplicateQubit(QubitId, String),

    /// Register declared with no qubits
    #[error("Register must have at least one qubit")]
    EmptyRegister,
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit { qubit, num_qubits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_message() {
        let msg = QuantumError::invalid_qubit(5, 3).to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_duplicate_qubit_message() {
        let msg = QuantumError::DuplicateQubit(QubitId::new(1), "CNOT".into()).to_string();
        assert!(msg.contains("q1"));
        assert!(msg.contains("CNOT"));
    }

    #[test]
    fn test_empty_register_message() {
        assert!(QuantumError::EmptyRegister
            .to_string()
            .contains("at least one qubit"));
    }
}
