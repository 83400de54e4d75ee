//! Human-readable snapshots of a state vector
//!
//! Rendering is a display aid: amplitudes below the threshold are dropped,
//! so the output cannot be parsed back into the state.

use crate::basis::BasisState;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use std::fmt;

/// One non-negligible basis state and its amplitude
///
/// Displays as `(re im i) |ket>` with six decimals, e.g.
/// `(0.707107 +0.000000 i) |01>`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    pub basis: BasisState,
    pub amplitude: Complex64,
    num_qubits: usize,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6} {:+.6} i) {}",
            self.amplitude.re,
            self.amplitude.im,
            self.basis.ket(self.num_qubits)
        )
    }
}

impl StateVector {
    /// Basis states with `|amplitude| >= threshold`, in increasing index order
    pub fn terms(&self, threshold: f64) -> impl Iterator<Item = Term> + '_ {
        let num_qubits = self.num_qubits();
        self.amplitudes()
            .iter()
            .enumerate()
            .filter(move |(_, a)| a.norm() >= threshold)
            .map(move |(i, &amplitude)| Term {
                basis: BasisState::new(i),
                amplitude,
                num_qubits,
            })
    }

    /// One formatted line per term of [`terms`](Self::terms)
    pub fn render(&self, threshold: f64) -> Vec<String> {
        self.terms(threshold).map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_ground_state_render() {
        let state = StateVector::new(2).unwrap();
        assert_eq!(state.render(1e-6), vec!["(1.000000 +0.000000 i) |00>"]);
    }

    #[test]
    fn test_threshold_drops_small_terms() {
        let state = StateVector::from_amplitudes(1, &[c(0.99999999, 0.0), c(0.0, 1e-8)]).unwrap();

        let coarse = state.render(1e-6);
        assert_eq!(coarse.len(), 1);
        assert!(coarse[0].ends_with("|0>"));

        let fine = state.render(1e-9);
        assert_eq!(fine.len(), 2);
        assert!(fine[1].ends_with("|1>"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let state = StateVector::from_amplitudes(1, &[c(0.5, 0.0), c(0.0, 0.0)]).unwrap();
        assert_eq!(state.terms(0.5).count(), 1);
    }

    #[test]
    fn test_terms_in_index_order() {
        let amp = c(0.5, 0.0);
        let state = StateVector::from_amplitudes(2, &[amp; 4]).unwrap();
        let indices: Vec<usize> = state.terms(1e-6).map(|t| t.basis.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_negative_parts_format() {
        let state =
            StateVector::from_amplitudes(2, &[c(0.0, 0.0), c(-0.5, -0.25), c(0.0, 0.0), c(0.0, 0.0)])
                .unwrap();
        assert_eq!(state.render(1e-6), vec!["(-0.500000 -0.250000 i) |10>"]);
    }
}
