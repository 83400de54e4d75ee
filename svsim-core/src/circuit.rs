//! Ordered gate sequences

use crate::{GateSpec, QuantumError, Result};
use std::fmt;

/// A sequence of gates over a register of fixed width
///
/// Gates are kept in insertion order; the engine applies them in exactly
/// that order.
///
/// # Example
/// ```
/// use svsim_core::{Circuit, GateSpec};
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.add_gate(GateSpec::h(0)).unwrap();
/// circuit.add_gate(GateSpec::cnot(0, 1).unwrap()).unwrap();
/// assert_eq!(circuit.len(), 2);
/// assert_eq!(circuit.gate_strings(), vec!["H(q0)", "CNOT(q0, q1)"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<GateSpec>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::EmptyRegister`] if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_capacity(num_qubits, 0)
    }

    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyRegister);
        }
        Ok(Self {
            num_qubits,
            gates: Vec::with_capacity(capacity),
        })
    }

    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubit`] if the gate touches a qubit
    /// outside this circuit
    pub fn add_gate(&mut self, gate: GateSpec) -> Result<&mut Self> {
        gate.check_qubits(self.num_qubits)?;
        self.gates.push(gate);
        Ok(self)
    }

    pub fn gates(&self) -> impl ExactSizeIterator<Item = &GateSpec> {
        self.gates.iter()
    }

    pub fn get(&self, index: usize) -> Option<&GateSpec> {
        self.gates.get(index)
    }

    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// One line per gate, e.g. `CNOT(q0, q1)`
    pub fn gate_strings(&self) -> Vec<String> {
        self.gates.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit({} qubits, {} gates)", self.num_qubits, self.len())?;
        for (i, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  {:>3}: {}", i, gate)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a GateSpec;
    type IntoIter = std::slice::Iter<'a, GateSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
