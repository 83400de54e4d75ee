//! Gate application kernels
//!
//! Every kernel reads the current amplitudes and *accumulates* into a
//! separate scratch buffer of the same length:
//!
//! ```text
//! scratch[I] += M[i][j] * current[J]
//! ```
//!
//! where `J` ranges over basis states whose gate qubits hold the column
//! value `j`, and `I` is `J` with those qubits rewritten to the row value
//! `i`. The caller owns the buffers and commits the result by swapping
//! them; the kernels never materialize the 2^n × 2^n operator.

pub mod single_qubit;
pub mod two_qubit;

pub use single_qubit::{apply_single_qubit_direct, apply_single_qubit_insertion};
pub use two_qubit::{apply_two_qubit_direct, apply_two_qubit_insertion};

use crate::error::{EngineError, Result};
use num_complex::Complex64;
use svsim_state::StateError;

/// How a kernel enumerates the basis states touched by a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelStrategy {
    /// Scan all 2^n indices per matrix entry and keep those whose gate
    /// qubits match the column value
    Direct,

    /// Enumerate only the other qubits and insert the gate qubits into
    /// each index, so no index is visited and then discarded
    #[default]
    Insertion,
}

impl KernelStrategy {
    pub const ALL: [KernelStrategy; 2] = [KernelStrategy::Direct, KernelStrategy::Insertion];
}

/// Check that both buffers describe the same register and return its width
pub(crate) fn register_width(current: &[Complex64], scratch: &[Complex64]) -> Result<usize> {
    if current.len() != scratch.len() {
        return Err(StateError::DimensionMismatch {
            expected: current.len(),
            actual: scratch.len(),
        }
        .into());
    }
    if current.len() < 2 || !current.len().is_power_of_two() {
        return Err(StateError::DimensionMismatch {
            expected: current.len().next_power_of_two().max(2),
            actual: current.len(),
        }
        .into());
    }
    Ok(current.len().trailing_zeros() as usize)
}

/// Check that `qubit` exists in a `num_qubits` register
#[inline]
pub(crate) fn check_qubit(qubit: usize, num_qubits: usize) -> Result<()> {
    if qubit >= num_qubits {
        return Err(EngineError::qubit_out_of_range(qubit, num_qubits));
    }
    Ok(())
}
