//! Single-qubit gate kernels

use super::{check_qubit, register_width};
use crate::error::Result;
use num_complex::Complex64;
use svsim_core::Matrix2x2;
use svsim_state::BasisState;

/// Apply a single-qubit gate by scanning the full index space
///
/// For each matrix entry `(i, j)`, visits all 2^n indices and keeps those
/// whose target bit equals `j`: Θ(2^(n+2)) index visits in total.
///
/// # Arguments
///
/// * `gate` - The 2x2 gate matrix
/// * `target` - Index of the target qubit
/// * `current` - Amplitudes before the gate
/// * `scratch` - Accumulation buffer; expected to be zeroed by the caller
///
/// # Errors
///
/// Returns an error if the buffers differ in length or are not a power of
/// two, or if `target` is out of range. Nothing is written on error.
pub fn apply_single_qubit_direct(
    gate: &Matrix2x2,
    target: usize,
    current: &[Complex64],
    scratch: &mut [Complex64],
) -> Result<()> {
    let num_qubits = register_width(current, scratch)?;
    check_qubit(target, num_qubits)?;

    for (i, row) in gate.iter().enumerate() {
        let bit_i = i == 1;
        for (j, &op) in row.iter().enumerate() {
            let bit_j = j == 1;
            for (index_j, &amplitude) in current.iter().enumerate() {
                let basis_j = BasisState::new(index_j);
                if basis_j.get_bit(target) == bit_j {
                    let basis_i = basis_j.with_bit(target, bit_i);
                    scratch[basis_i.index()] += op * amplitude;
                }
            }
        }
    }

    Ok(())
}

/// Apply a single-qubit gate by enumerating the other n-1 qubits
///
/// Each `K < 2^(n-1)` gets a zero inserted at the target position, and the
/// source and destination indices are derived from that placeholder:
/// Θ(2^(n+1)) index visits in total. Produces the same scratch contents as
/// [`apply_single_qubit_direct`], accumulated in the same order.
///
/// # Errors
///
/// Same conditions as [`apply_single_qubit_direct`].
pub fn apply_single_qubit_insertion(
    gate: &Matrix2x2,
    target: usize,
    current: &[Complex64],
    scratch: &mut [Complex64],
) -> Result<()> {
    let num_qubits = register_width(current, scratch)?;
    check_qubit(target, num_qubits)?;

    let others = current.len() >> 1;
    for (i, row) in gate.iter().enumerate() {
        let bit_i = i == 1;
        for (j, &op) in row.iter().enumerate() {
            let bit_j = j == 1;
            for k in 0..others {
                let placeholder = BasisState::new(k).insert(target);
                let basis_i = placeholder.with_bit(target, bit_i);
                let basis_j = placeholder.with_bit(target, bit_j);
                scratch[basis_i.index()] += op * current[basis_j.index()];
            }
        }
    }

    Ok(())
}
