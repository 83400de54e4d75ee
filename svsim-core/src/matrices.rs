//! Standard gate matrices
//!
//! Two-qubit matrices are indexed by the joint `(control, target)` value
//! in the order of [`TWO_QUBIT_BASIS`](crate::gate::TWO_QUBIT_BASIS):
//! row/column 0 is `00`, 1 is `01`, 2 is `10`, 3 is `11`.

use crate::gate::{Matrix2x2, Matrix4x4};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

pub const IDENTITY: Matrix2x2 = [[ONE, ZERO], [ZERO, ONE]];

/// Bit flip
pub const PAULI_X: Matrix2x2 = [[ZERO, ONE], [ONE, ZERO]];

pub const PAULI_Y: Matrix2x2 = [[ZERO, NEG_I], [I, ZERO]];

/// Phase flip
pub const PAULI_Z: Matrix2x2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

pub const HADAMARD: Matrix2x2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S = diag(1, i)
pub const S_GATE: Matrix2x2 = [[ONE, ZERO], [ZERO, I]];

/// T = diag(1, e^(iπ/4))
pub const T_GATE: Matrix2x2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// Flips the target when the control is 1
pub const CNOT: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Negates the `11` amplitude
pub const CZ: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, NEG_ONE],
];

pub const SWAP: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// RX(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> Matrix2x2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// RY(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Matrix2x2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// RZ(θ) = diag(e^(-iθ/2), e^(iθ/2))
#[inline]
pub fn rotation_z(theta: f64) -> Matrix2x2 {
    let half = theta / 2.0;
    [
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]
}

/// P(θ) = diag(1, e^(iθ))
#[inline]
pub fn phase(theta: f64) -> Matrix2x2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}
