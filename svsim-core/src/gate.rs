//! Gate descriptors consumed by the simulation engine

use crate::matrices;
use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;

/// Dense matrix of a one-qubit gate, `m[row][col]`
pub type Matrix2x2 = [[Complex64; 2]; 2];

/// Dense matrix of a two-qubit gate, rows and columns ordered by [`TWO_QUBIT_BASIS`]
pub type Matrix4x4 = [[Complex64; 4]; 4];

/// Joint `(control, target)` values in matrix row/column order
pub const TWO_QUBIT_BASIS: [(bool, bool); 4] =
    [(false, false), (false, true), (true, false), (true, true)];

/// The linear map carried by a gate
///
/// The engine treats the matrix as opaque; nothing here checks that it
/// is unitary.
#[derive(Clone, Debug, PartialEq)]
pub enum GateMatrix {
    OneQubit(Matrix2x2),
    TwoQubit(Matrix4x4),
}

impl GateMatrix {
    /// Number of qubits the matrix acts on
    #[inline]
    pub fn arity(&self) -> usize {
        match self {
            GateMatrix::OneQubit(_) => 1,
            GateMatrix::TwoQubit(_) => 2,
        }
    }
}

/// Immutable description of one gate application
///
/// A one-qubit gate acts on `target`; a two-qubit gate acts on the
/// distinct pair `(control, target)`.
///
/// # Example
/// ```
/// use svsim_core::{GateSpec, QubitId};
///
/// let cnot = GateSpec::cnot(0, 1).unwrap();
/// assert_eq!(cnot.arity(), 2);
/// assert_eq!(cnot.control(), Some(QubitId::new(0)));
/// assert_eq!(cnot.target(), QubitId::new(1));
/// assert_eq!(cnot.to_string(), "CNOT(q0, q1)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GateSpec {
    name: String,
    /// `[target]` or `[control, target]`
    qubits: SmallVec<[QubitId; 2]>,
    matrix: GateMatrix,
}

impl GateSpec {
    /// Describe a one-qubit gate
    pub fn one_qubit(
        name: impl Into<String>,
        target: impl Into<QubitId>,
        matrix: Matrix2x2,
    ) -> Self {
        let mut qubits = SmallVec::new();
        qubits.push(target.into());
        Self {
            name: name.into(),
            qubits,
            matrix: GateMatrix::OneQubit(matrix),
        }
    }

    /// Describe a two-qubit gate
    ///
    /// # Errors
    /// Returns [`QuantumError::DuplicateQubit`] if `control == target`
    pub fn two_qubit(
        name: impl Into<String>,
        control: impl Into<QubitId>,
        target: impl Into<QubitId>,
        matrix: Matrix4x4,
    ) -> Result<Self> {
        let name = name.into();
        let (control, target) = (control.into(), target.into());
        if control == target {
            return Err(QuantumError::DuplicateQubit(control, name));
        }

        let mut qubits = SmallVec::new();
        qubits.push(control);
        qubits.push(target);
        Ok(Self {
            name,
            qubits,
            matrix: GateMatrix::TwoQubit(matrix),
        })
    }

    pub fn x(target: impl Into<QubitId>) -> Self {
        Self::one_qubit("X", target, matrices::PAULI_X)
    }

    pub fn y(target: impl Into<QubitId>) -> Self {
        Self::one_qubit("Y", target, matrices::PAULI_Y)
    }

    pub fn z(target: impl Into<QubitId>) -> Self {
        Self::one_qubit("Z", target, matrices::PAULI_Z)
    }

    pub fn h(target: impl Into<QubitId>) -> Self {
        Self::one_qubit("H", target, matrices::HADAMARD)
    }

    pub fn cnot(control: impl Into<QubitId>, target: impl Into<QubitId>) -> Result<Self> {
        Self::two_qubit("CNOT", control, target, matrices::CNOT)
    }

    pub fn cz(control: impl Into<QubitId>, target: impl Into<QubitId>) -> Result<Self> {
        Self::two_qubit("CZ", control, target, matrices::CZ)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1 or 2
    #[inline]
    pub fn arity(&self) -> usize {
        self.matrix.arity()
    }

    /// The qubit the matrix acts on (the second qubit for two-qubit gates)
    #[inline]
    pub fn target(&self) -> QubitId {
        self.qubits[self.qubits.len() - 1]
    }

    #[inline]
    pub fn control(&self) -> Option<QubitId> {
        match self.matrix {
            GateMatrix::TwoQubit(_) => Some(self.qubits[0]),
            GateMatrix::OneQubit(_) => None,
        }
    }

    /// Qubits in matrix order: `[target]` or `[control, target]`
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    #[inline]
    pub fn matrix(&self) -> &GateMatrix {
        &self.matrix
    }

    /// Check every qubit against a register of `num_qubits` qubits
    pub fn check_qubits(&self, num_qubits: usize) -> Result<()> {
        self.qubits.iter().try_for_each(|q| q.check(num_qubits))
    }
}

impl fmt::Display for GateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}
