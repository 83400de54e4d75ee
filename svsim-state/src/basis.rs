//! Basis-state encoding
//!
//! A basis state of an n-qubit register is stored as the integer whose
//! bit `k` holds the value of qubit `k`. That integer is also the index of
//! the basis vector in the dense amplitude array, so no lookup table is
//! needed in either direction.

use crate::error::StateError;
use std::fmt;
use std::str::FromStr;

/// One joint assignment of qubit values
///
/// # Bit positions
/// Methods taking a bit position `k` expect `k < usize::BITS`; larger
/// positions overflow the shift and are a caller error. Within the engine
/// every position is first checked against the register width.
///
/// # Example
/// ```
/// use svsim_state::BasisState;
///
/// let b = BasisState::new(0b011);
/// assert!(b.get_bit(0));
/// assert!(!b.get_bit(2));
/// assert_eq!(b.ket(3).to_string(), "|110>");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BasisState(usize);

impl BasisState {
    /// The all-zero state `|0…0>`
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this basis vector in the amplitude array
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Value of qubit `k`
    #[inline]
    pub const fn get_bit(self, k: usize) -> bool {
        (self.0 >> k) & 1 == 1
    }

    /// Set qubit `k` to `value`, leaving all other bits unchanged
    #[inline]
    pub fn set_bit(&mut self, k: usize, value: bool) {
        if value {
            self.0 |= 1 << k;
        } else {
            self.0 &= !(1 << k);
        }
    }

    /// Copy of `self` with qubit `k` set to `value`
    #[inline]
    pub const fn with_bit(self, k: usize, value: bool) -> Self {
        if value {
            Self(self.0 | (1 << k))
        } else {
            Self(self.0 & !(1 << k))
        }
    }

    /// Insert a fresh zero bit at position `pos`
    ///
    /// Bits below `pos` stay put; bits at `pos` and above move up one slot.
    /// Enumerating `K` over all (n-1)-bit values and inserting at the target
    /// position visits every n-bit index whose target bit is 0 exactly once.
    #[inline]
    pub const fn insert(self, pos: usize) -> Self {
        let low = (1usize << pos) - 1;
        Self(((self.0 & !low) << 1) | (self.0 & low))
    }

    /// Delete the bit at `pos`, shifting higher bits down; inverse of [`insert`](Self::insert)
    #[inline]
    pub const fn remove(self, pos: usize) -> Self {
        let low = (1usize << pos) - 1;
        Self(((self.0 >> 1) & !low) | (self.0 & low))
    }

    /// Fixed-width ket rendering over `num_qubits` qubits, qubit 0 leftmost
    #[inline]
    pub fn ket(self, num_qubits: usize) -> Ket {
        Ket {
            basis: self,
            num_qubits,
        }
    }
}

impl From<usize> for BasisState {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<BasisState> for usize {
    #[inline]
    fn from(basis: BasisState) -> Self {
        basis.0
    }
}

/// Parses a ket string such as `|0110>`; the leftmost digit is qubit 0
impl FromStr for BasisState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StateError::InvalidKet { ket: s.to_string() };

        let bits = s
            .strip_prefix('|')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(invalid)?;
        if bits.is_empty() || bits.len() >= usize::BITS as usize {
            return Err(invalid());
        }

        let mut basis = BasisState::ZERO;
        for (k, c) in bits.chars().enumerate() {
            match c {
                '0' => {}
                '1' => basis.set_bit(k, true),
                _ => return Err(invalid()),
            }
        }
        Ok(basis)
    }
}

/// Display adapter returned by [`BasisState::ket`]
#[derive(Copy, Clone, Debug)]
pub struct Ket {
    basis: BasisState,
    num_qubits: usize,
}

impl fmt::Display for Ket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for k in 0..self.num_qubits {
            f.write_str(if self.basis.get_bit(k) { "1" } else { "0" })?;
        }
        f.write_str(">")
    }
}
