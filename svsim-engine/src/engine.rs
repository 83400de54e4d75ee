//! Full state-vector engine

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::kernels::{self, KernelStrategy};
use crate::validation;
use num_complex::Complex64;
use std::fmt;
use svsim_core::{Circuit, GateMatrix, GateSpec};
use svsim_state::{BasisState, StateError, StateVector, Term};
use tracing::{debug, trace, warn};

/// Exact simulator of an n-qubit register
///
/// Holds all 2^n amplitudes plus a scratch buffer of the same size. Each
/// gate is accumulated into the scratch buffer, which then becomes the
/// current state; the old buffer is zeroed for the next gate. Callers never
/// see a half-applied gate, and a gate that fails validation leaves the
/// state untouched.
///
/// `apply` takes `&mut self`, so calls on one engine are serialized by the
/// borrow checker. Separate engines share nothing and can run on separate
/// threads.
///
/// # Example
///
/// ```
/// use svsim_core::GateSpec;
/// use svsim_engine::StateVectorEngine;
/// use svsim_state::BasisState;
///
/// let mut engine = StateVectorEngine::new(2)?;
/// engine.apply(&GateSpec::x(0))?;
/// engine.apply(&GateSpec::cnot(0, 1)?)?;
///
/// let amp = engine.amplitude("|11>".parse::<BasisState>()?)?;
/// assert_eq!(amp.re, 1.0);
/// assert_eq!(engine.render(1e-6), vec!["(1.000000 +0.000000 i) |11>"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StateVectorEngine {
    num_qubits: usize,
    current: StateVector,
    scratch: StateVector,
    config: EngineConfig,
    gates_applied: usize,
}

impl StateVectorEngine {
    /// Create an engine in |0...0⟩ with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `num_qubits` is 0 or above the configured limit.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, EngineConfig::default())
    }

    /// Create an engine in |0...0⟩
    pub fn with_config(num_qubits: usize, config: EngineConfig) -> Result<Self> {
        config.validate().map_err(EngineError::InvalidConfig)?;

        if num_qubits > config.max_qubits {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: config.max_qubits,
            }
            .into());
        }

        let current = StateVector::new(num_qubits)?;
        let scratch = StateVector::zeroed(num_qubits)?;

        debug!(
            num_qubits,
            dimension = current.dimension(),
            kernel = ?config.kernel,
            "allocated state vector engine"
        );

        Ok(Self {
            num_qubits,
            current,
            scratch,
            config,
            gates_applied: 0,
        })
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, 2^num_qubits
    #[inline]
    pub fn dimension(&self) -> usize {
        self.current.dimension()
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the current amplitudes
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.current
    }

    /// Gates committed since construction or the last [`reset`](Self::reset)
    #[inline]
    pub fn gates_applied(&self) -> usize {
        self.gates_applied
    }

    /// L2 norm of the current state; not enforced to be 1
    pub fn norm(&self) -> f64 {
        self.current.norm()
    }

    /// Amplitude of one basis state
    ///
    /// # Errors
    ///
    /// Returns [`StateError::BasisOutOfRange`] if the index is ≥ 2^n.
    pub fn amplitude(&self, basis: BasisState) -> Result<Complex64> {
        Ok(self.current.amplitude(basis)?)
    }

    /// Replace the whole state with the given amplitudes
    ///
    /// Every basis state not listed gets amplitude zero. A basis state listed
    /// more than once keeps its last amplitude. The result is not
    /// renormalized. All indices are checked before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::BasisOutOfRange`] if any index is ≥ 2^n.
    pub fn set_state<I>(&mut self, assignments: I) -> Result<()>
    where
        I: IntoIterator<Item = (BasisState, Complex64)>,
    {
        let assignments: Vec<_> = assignments.into_iter().collect();
        for &(basis, _) in &assignments {
            self.current.check_basis(basis)?;
        }

        self.current.clear();
        let amplitudes = self.current.amplitudes_mut();
        for &(basis, amplitude) in &assignments {
            amplitudes[basis.index()] = amplitude;
        }

        debug!(entries = assignments.len(), "state overwritten");
        Ok(())
    }

    /// Return to |0...0⟩ and clear the gate counter
    pub fn reset(&mut self) {
        self.current.reset();
        self.scratch.clear();
        self.gates_applied = 0;
        debug!(num_qubits = self.num_qubits, "engine reset");
    }

    /// Apply one gate with the configured kernel strategy
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::QubitOutOfRange`] if the gate touches a qubit
    /// ≥ n, or [`EngineError::NonUnitary`] if the opt-in unitarity check
    /// rejects the matrix. The state is unchanged on error.
    pub fn apply(&mut self, gate: &GateSpec) -> Result<()> {
        self.apply_with(gate, self.config.kernel)
    }

    /// Apply one gate with an explicit kernel strategy
    pub fn apply_with(&mut self, gate: &GateSpec, strategy: KernelStrategy) -> Result<()> {
        self.check_gate(gate)?;

        trace!(gate = %gate, arity = gate.arity(), ?strategy, "applying gate");

        let target = gate.target().index();
        let current = self.current.amplitudes();
        let scratch = self.scratch.amplitudes_mut();

        let outcome = match (gate.matrix(), gate.control()) {
            (GateMatrix::OneQubit(m), _) => match strategy {
                KernelStrategy::Direct => {
                    kernels::apply_single_qubit_direct(m, target, current, scratch)
                }
                KernelStrategy::Insertion => {
                    kernels::apply_single_qubit_insertion(m, target, current, scratch)
                }
            },
            (GateMatrix::TwoQubit(m), Some(control)) => match strategy {
                KernelStrategy::Direct => {
                    kernels::apply_two_qubit_direct(m, control.index(), target, current, scratch)
                }
                KernelStrategy::Insertion => kernels::apply_two_qubit_insertion(
                    m,
                    control.index(),
                    target,
                    current,
                    scratch,
                ),
            },
            (GateMatrix::TwoQubit(_), None) => Err(EngineError::InvalidGate {
                gate: gate.to_string(),
                reason: "two-qubit matrix without a control qubit".to_string(),
            }),
        };

        if let Err(err) = outcome {
            self.scratch.clear();
            return Err(err);
        }

        self.commit();
        Ok(())
    }

    /// Apply gates one after another, in order
    ///
    /// Each gate commits before the next starts; on error the gates before
    /// the failing one stay applied.
    pub fn apply_gates<'a, I>(&mut self, gates: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a GateSpec>,
    {
        for (index, gate) in gates.into_iter().enumerate() {
            if let Err(err) = self.apply(gate) {
                warn!(index, gate = %gate, error = %err, "gate rejected");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Apply every gate of `circuit` in circuit order
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CircuitTooWide`] before applying anything if
    /// the circuit declares more qubits than the engine holds.
    pub fn apply_circuit(&mut self, circuit: &Circuit) -> Result<()> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(EngineError::CircuitTooWide {
                circuit: circuit.num_qubits(),
                engine: self.num_qubits,
            });
        }

        debug!(gates = circuit.len(), "applying circuit");
        self.apply_gates(circuit)
    }

    /// Basis states with `|amplitude| >= threshold`, in index order
    pub fn terms(&self, threshold: f64) -> impl Iterator<Item = Term> + '_ {
        self.current.terms(threshold)
    }

    /// One `(re im i) |ket>` line per basis state with `|amplitude| >= threshold`
    pub fn render(&self, threshold: f64) -> Vec<String> {
        self.current.render(threshold)
    }

    /// [`render`](Self::render) with the configured print threshold
    pub fn render_default(&self) -> Vec<String> {
        self.render(self.config.print_threshold)
    }

    fn check_gate(&self, gate: &GateSpec) -> Result<()> {
        for qubit in gate.qubits() {
            if qubit.index() >= self.num_qubits {
                return Err(EngineError::QubitOutOfRange {
                    qubit: *qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }

        if self.config.validate_unitarity {
            if let Err(err) = validation::check_unitary(gate, self.config.unitarity_tolerance) {
                warn!(gate = %gate, error = %err, "unitarity check failed");
                return Err(err);
            }
        }

        Ok(())
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.scratch.clear();
        self.gates_applied += 1;
    }
}

impl fmt::Debug for StateVectorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVectorEngine")
            .field("num_qubits", &self.num_qubits)
            .field("gates_applied", &self.gates_applied)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One rendered term per line at the configured print threshold
impl fmt::Display for StateVectorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in self.terms(self.config.print_threshold) {
            writeln!(f, "{}", term)?;
        }
        Ok(())
    }
}
