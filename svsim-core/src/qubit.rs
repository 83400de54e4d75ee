//! Qubit addressing

use crate::{QuantumError, Result};
use std::fmt;

/// Position of one qubit inside a register
///
/// Qubit `k` owns bit `k` of every basis-state index, so the id doubles
/// as a bit offset.
///
/// # Example
/// ```
/// use svsim_core::QubitId;
///
/// let q = QubitId::new(2);
/// assert_eq!(q.index(), 2);
/// assert_eq!(q.mask(), 0b100);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Bit offset of this qubit within a basis-state index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Single-bit mask selecting this qubit
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << self.0
    }

    /// Check that the qubit exists in a register of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubit`] if `index >= num_qubits`
    pub fn check(&self, num_qubits: usize) -> Result<()> {
        if self.0 >= num_qubits {
            return Err(QuantumError::invalid_qubit(self.0, num_qubits));
        }
        Ok(())
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qubit: QubitId) -> Self {
        qubit.index()
    }
}
