//! Two-qubit gate kernels

use super::{check_qubit, register_width};
use crate::error::{EngineError, Result};
use num_complex::Complex64;
use svsim_core::{Matrix4x4, TWO_QUBIT_BASIS};
use svsim_state::BasisState;

fn check_pair(control: usize, target: usize, num_qubits: usize) -> Result<()> {
    check_qubit(control, num_qubits)?;
    check_qubit(target, num_qubits)?;
    if control == target {
        return Err(EngineError::InvalidGate {
            gate: "two-qubit".to_string(),
            reason: format!("control and target are both q{}", control),
        });
    }
    Ok(())
}

/// Apply a general two-qubit gate by scanning the full index space
///
/// Row and column `r` of `gate` correspond to `TWO_QUBIT_BASIS[r]`, the
/// joint `(control, target)` value. Θ(2^(n+4)) index visits.
///
/// # Arguments
///
/// * `gate` - The 4x4 gate matrix
/// * `control` - Index of the control (first) qubit
/// * `target` - Index of the target (second) qubit
/// * `current` - Amplitudes before the gate
/// * `scratch` - Accumulation buffer; expected to be zeroed by the caller
pub fn apply_two_qubit_direct(
    gate: &Matrix4x4,
    control: usize,
    target: usize,
    current: &[Complex64],
    scratch: &mut [Complex64],
) -> Result<()> {
    let num_qubits = register_width(current, scratch)?;
    check_pair(control, target, num_qubits)?;

    for (row, &(i_c, i_t)) in TWO_QUBIT_BASIS.iter().enumerate() {
        for (col, &(j_c, j_t)) in TWO_QUBIT_BASIS.iter().enumerate() {
            let op = gate[row][col];
            for (index_j, &amplitude) in current.iter().enumerate() {
                let basis_j = BasisState::new(index_j);
                if basis_j.get_bit(control) == j_c && basis_j.get_bit(target) == j_t {
                    let basis_i = basis_j.with_bit(control, i_c).with_bit(target, i_t);
                    scratch[basis_i.index()] += op * amplitude;
                }
            }
        }
    }

    Ok(())
}

/// Apply a general two-qubit gate by enumerating the other n-2 qubits
///
/// Zeros are inserted at both gate positions, lower position first, so
/// every placeholder has control and target cleared. Θ(2^(n+2)) index
/// visits; same scratch contents as [`apply_two_qubit_direct`].
pub fn apply_two_qubit_insertion(
    gate: &Matrix4x4,
    control: usize,
    target: usize,
    current: &[Complex64],
    scratch: &mut [Complex64],
) -> Result<()> {
    let num_qubits = register_width(current, scratch)?;
    check_pair(control, target, num_qubits)?;

    let (low, high) = if control < target {
        (control, target)
    } else {
        (target, control)
    };
    let others = current.len() >> 2;

    for (row, &(i_c, i_t)) in TWO_QUBIT_BASIS.iter().enumerate() {
        for (col, &(j_c, j_t)) in TWO_QUBIT_BASIS.iter().enumerate() {
            let op = gate[row][col];
            for k in 0..others {
                let placeholder = BasisState::new(k).insert(low).insert(high);
                let basis_i = placeholder.with_bit(control, i_c).with_bit(target, i_t);
                let basis_j = placeholder.with_bit(control, j_c).with_bit(target, j_t);
                scratch[basis_i.index()] += op * current[basis_j.index()];
            }
        }
    }

    Ok(())
}
