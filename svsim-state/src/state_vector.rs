//! Dense amplitude storage

use crate::basis::BasisState;
use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Widest register a `StateVector` will attempt to allocate
///
/// Keeps `1 << num_qubits` and the amplitude byte count inside `usize`.
pub const MAX_QUBITS: usize = usize::BITS as usize - 5;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Full 2^n amplitude array of an n-qubit register
///
/// Amplitude `i` belongs to [`BasisState::new(i)`](BasisState::new).
///
/// # Example
///
/// ```
/// use svsim_state::{BasisState, StateVector};
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.amplitude(BasisState::ZERO).unwrap().re, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns an error if `num_qubits` is 0, exceeds [`MAX_QUBITS`], or
    /// the allocation fails
    pub fn new(num_qubits: usize) -> Result<Self> {
        let mut state = Self::zeroed(num_qubits)?;
        state.amplitudes[0] = ONE;
        Ok(state)
    }

    /// Create a state vector with every amplitude zero
    ///
    /// Not a physical state; used as accumulation scratch.
    pub fn zeroed(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(StateError::ZeroQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(dimension)
            .map_err(|_| StateError::AllocationFailed {
                bytes: dimension * std::mem::size_of::<Complex64>(),
            })?;
        amplitudes.resize(dimension, ZERO);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitudes (length must be 2^num_qubits)
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::zeroed(num_qubits)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.amplitudes.copy_from_slice(amplitudes);
        Ok(state)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// 2^num_qubits
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Check that `basis` indexes into this state
    #[inline]
    pub fn check_basis(&self, basis: BasisState) -> Result<()> {
        if basis.index() >= self.dimension() {
            return Err(StateError::BasisOutOfRange {
                index: basis.index(),
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    pub fn amplitude(&self, basis: BasisState) -> Result<Complex64> {
        self.check_basis(basis)?;
        Ok(self.amplitudes[basis.index()])
    }

    pub fn set_amplitude(&mut self, basis: BasisState, amplitude: Complex64) -> Result<()> {
        self.check_basis(basis)?;
        self.amplitudes[basis.index()] = amplitude;
        Ok(())
    }

    /// |amplitude|² of one basis state
    pub fn probability(&self, basis: BasisState) -> Result<f64> {
        self.amplitude(basis).map(|a| a.norm_sqr())
    }

    /// Zero every amplitude
    #[inline]
    pub fn clear(&mut self) {
        self.amplitudes.fill(ZERO);
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        self.clear();
        self.amplitudes[0] = ONE;
    }

    /// Sum of |amplitude|² over all basis states
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// L2 norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// True if |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }
}
