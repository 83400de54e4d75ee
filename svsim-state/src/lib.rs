//! Basis-state encoding and dense amplitude storage
//!
//! - [`BasisState`]: qubit values packed into an integer that is also the
//!   amplitude index
//! - [`StateVector`]: the full 2^n amplitude array
//! - [`Term`]: a rendered, thresholded view of a state
//!
//! # Example
//!
//! ```
//! use svsim_state::{BasisState, StateVector};
//! use num_complex::Complex64;
//!
//! let mut state = StateVector::zeroed(2).unwrap();
//! let b: BasisState = "|01>".parse().unwrap();
//! state.set_amplitude(b, Complex64::new(1.0, 0.0)).unwrap();
//! assert_eq!(state.render(1e-6), vec!["(1.000000 +0.000000 i) |01>"]);
//! ```

pub mod basis;
pub mod error;
pub mod render;
pub mod state_vector;

pub use basis::{BasisState, Ket};
pub use error::{Result, StateError};
pub use render::Term;
pub use state_vector::{StateVector, MAX_QUBITS};
