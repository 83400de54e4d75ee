//! Core types for the svsim state-vector simulator
//!
//! This crate describes *what* to simulate:
//! - [`QubitId`]: bit offset of a qubit inside a basis-state index
//! - [`GateSpec`]: a one- or two-qubit gate with its dense matrix
//! - [`Circuit`]: an ordered sequence of gates
//! - [`matrices`]: standard gate matrices
//!
//! # Example
//! ```
//! use svsim_core::{Circuit, GateSpec};
//!
//! let mut circuit = Circuit::new(2)?;
//! circuit.add_gate(GateSpec::x(0))?;
//! circuit.add_gate(GateSpec::cnot(0, 1)?)?;
//! # Ok::<(), svsim_core::QuantumError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod matrices;
pub mod qubit;

pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{GateMatrix, GateSpec, Matrix2x2, Matrix4x4, TWO_QUBIT_BASIS};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Result type for gate and circuit construction
pub type Result<T> = std::result::Result<T, QuantumError>;
