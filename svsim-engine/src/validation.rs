//! Opt-in unitarity check for gate matrices
//!
//! The engine applies any matrix as given. When
//! [`EngineConfig::validate_unitarity`](crate::EngineConfig::validate_unitarity)
//! is set, each gate is checked here before the state is touched.

use crate::error::{EngineError, Result};
use approx::abs_diff_eq;
use num_complex::Complex64;
use svsim_core::{GateMatrix, GateSpec};

/// Check that `M·M†` is the identity within `tolerance` per entry
///
/// # Errors
///
/// Returns [`EngineError::NonUnitary`] naming the first entry that deviates.
pub fn check_unitary(gate: &GateSpec, tolerance: f64) -> Result<()> {
    let outcome = match gate.matrix() {
        GateMatrix::OneQubit(m) => check_rows(m, tolerance),
        GateMatrix::TwoQubit(m) => check_rows(m, tolerance),
    };

    outcome.map_err(|reason| EngineError::NonUnitary {
        gate: gate.to_string(),
        reason,
    })
}

fn check_rows<const N: usize>(
    matrix: &[[Complex64; N]; N],
    tolerance: f64,
) -> std::result::Result<(), String> {
    for r in 0..N {
        for c in 0..N {
            // (M·M†)[r][c] = <row r, row c>
            let entry: Complex64 = matrix[r]
                .iter()
                .zip(matrix[c].iter())
                .map(|(a, b)| a * b.conj())
                .sum();
            let expected = if r == c { 1.0 } else { 0.0 };

            if !abs_diff_eq!(entry.re, expected, epsilon = tolerance)
                || !abs_diff_eq!(entry.im, 0.0, epsilon = tolerance)
            {
                return Err(format!("(M·M†)[{}][{}] = {}, expected {}", r, c, entry, expected));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svsim_core::matrices;

    #[test]
    fn test_standard_gates_pass() {
        let gates = [
            GateSpec::h(0),
            GateSpec::x(0),
            GateSpec::y(0),
            GateSpec::one_qubit("T", 0, matrices::T_GATE),
            GateSpec::one_qubit("RX", 0, matrices::rotation_x(0.3)),
            GateSpec::cnot(0, 1).unwrap(),
            GateSpec::cz(1, 0).unwrap(),
            GateSpec::two_qubit("SWAP", 0, 1, matrices::SWAP).unwrap(),
        ];
        for gate in &gates {
            assert!(check_unitary(gate, 1e-10).is_ok(), "{gate}");
        }
    }

    #[test]
    fn test_scaled_matrix_fails() {
        let mut m = matrices::HADAMARD;
        m[0][0] *= 2.0;
        let gate = GateSpec::one_qubit("bad", 0, m);
        let err = check_unitary(&gate, 1e-10).unwrap_err();
        assert!(matches!(err, EngineError::NonUnitary { .. }));
        assert!(err.to_string().contains("bad(q0)"));
    }

    #[test]
    fn test_projector_fails() {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let gate = GateSpec::one_qubit("P0", 0, [[one, zero], [zero, zero]]);
        assert!(check_unitary(&gate, 1e-10).is_err());
    }

    #[test]
    fn test_tolerance_respected() {
        let mut m = matrices::PAULI_X;
        m[0][1] = Complex64::new(1.0 + 1e-6, 0.0);
        let gate = GateSpec::one_qubit("X~", 0, m);
        assert!(check_unitary(&gate, 1e-10).is_err());
        assert!(check_unitary(&gate, 1e-4).is_ok());
    }
}
