//! End-to-end behavior of the engine on known circuits

use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use svsim_core::{matrices, Circuit, GateSpec, QubitId};
use svsim_engine::{EngineConfig, EngineError, KernelStrategy, StateVectorEngine};
use svsim_state::BasisState;

fn ket(s: &str) -> BasisState {
    s.parse().unwrap()
}

fn engines(num_qubits: usize) -> Vec<StateVectorEngine> {
    KernelStrategy::ALL
        .iter()
        .map(|&k| {
            StateVectorEngine::with_config(num_qubits, EngineConfig::default().with_kernel(k))
                .unwrap()
        })
        .collect()
}

#[test]
fn bit_flip_on_single_qubit() {
    for mut engine in engines(1) {
        engine.apply(&GateSpec::x(0)).unwrap();
        assert_eq!(engine.amplitude(ket("|1>")).unwrap(), Complex64::new(1.0, 0.0));
        assert_eq!(engine.amplitude(ket("|0>")).unwrap(), Complex64::new(0.0, 0.0));
    }
}

#[test]
fn controlled_flip_respects_control() {
    for mut engine in engines(2) {
        let cnot = GateSpec::cnot(0, 1).unwrap();

        // control is 0: nothing happens
        engine.apply(&cnot).unwrap();
        assert_eq!(engine.amplitude(ket("|00>")).unwrap(), Complex64::new(1.0, 0.0));
        assert_eq!(engine.render(1e-6), vec!["(1.000000 +0.000000 i) |00>"]);

        // control is 1: target flips
        engine.apply(&GateSpec::x(0)).unwrap();
        engine.apply(&cnot).unwrap();
        assert_eq!(engine.amplitude(ket("|11>")).unwrap(), Complex64::new(1.0, 0.0));
        assert_eq!(engine.render(1e-6), vec!["(1.000000 +0.000000 i) |11>"]);
    }
}

#[test]
fn identity_gate_leaves_state_exactly() {
    for mut engine in engines(4) {
        engine.apply(&GateSpec::h(0)).unwrap();
        engine
            .apply(&GateSpec::one_qubit("RX", 2, matrices::rotation_x(0.8)))
            .unwrap();
        engine.apply(&GateSpec::cnot(0, 3).unwrap()).unwrap();
        let before = engine.state().clone();

        for q in 0..4 {
            engine
                .apply(&GateSpec::one_qubit("I", q, matrices::IDENTITY))
                .unwrap();
            assert_eq!(engine.state(), &before);
        }
    }
}

#[test]
fn bell_state_via_circuit() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.add_gate(GateSpec::h(0)).unwrap();
    circuit.add_gate(GateSpec::cnot(0, 1).unwrap()).unwrap();

    for mut engine in engines(2) {
        engine.apply_circuit(&circuit).unwrap();

        assert_abs_diff_eq!(engine.amplitude(ket("|00>")).unwrap().re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.amplitude(ket("|11>")).unwrap().re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.amplitude(ket("|01>")).unwrap().norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.norm(), 1.0, epsilon = 1e-12);
        assert_eq!(
            engine.render_default(),
            vec![
                "(0.707107 +0.000000 i) |00>",
                "(0.707107 +0.000000 i) |11>",
            ]
        );
        assert_eq!(engine.gates_applied(), 2);
    }
}

#[test]
fn ghz_state_on_five_qubits() {
    let n = 5;
    let mut circuit = Circuit::with_capacity(n, n).unwrap();
    circuit.add_gate(GateSpec::h(0)).unwrap();
    for q in 0..n - 1 {
        circuit.add_gate(GateSpec::cnot(q, q + 1).unwrap()).unwrap();
    }

    for mut engine in engines(n) {
        engine.apply_circuit(&circuit).unwrap();
        let terms: Vec<usize> = engine.terms(1e-6).map(|t| t.basis.index()).collect();
        assert_eq!(terms, vec![0, (1 << n) - 1]);
    }
}

#[test]
fn smaller_circuit_runs_on_wider_engine() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.add_gate(GateSpec::x(0)).unwrap();

    let mut engine = StateVectorEngine::new(3).unwrap();
    engine.apply_circuit(&circuit).unwrap();
    assert_eq!(engine.amplitude(ket("|100>")).unwrap(), Complex64::new(1.0, 0.0));
}

#[test]
fn wider_circuit_is_rejected_before_running() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.add_gate(GateSpec::x(0)).unwrap();
    circuit.add_gate(GateSpec::x(2)).unwrap();

    let mut engine = StateVectorEngine::new(2).unwrap();
    let err = engine.apply_circuit(&circuit).unwrap_err();
    assert_eq!(err, EngineError::CircuitTooWide { circuit: 3, engine: 2 });
    assert_eq!(engine.gates_applied(), 0);
    assert_eq!(engine.amplitude(ket("|00>")).unwrap(), Complex64::new(1.0, 0.0));
}

#[test]
fn failing_gate_stops_sequence_after_committed_gates() {
    let gates = vec![GateSpec::x(0), GateSpec::x(7), GateSpec::x(1)];
    let mut engine = StateVectorEngine::new(2).unwrap();

    let err = engine.apply_gates(&gates).unwrap_err();
    assert_eq!(
        err,
        EngineError::QubitOutOfRange {
            qubit: QubitId::new(7),
            num_qubits: 2
        }
    );
    assert_eq!(engine.gates_applied(), 1);
    assert_eq!(engine.amplitude(ket("|10>")).unwrap(), Complex64::new(1.0, 0.0));
}

#[test]
fn render_threshold_controls_visible_terms() {
    let mut engine = StateVectorEngine::new(2).unwrap();
    engine
        .set_state([
            (ket("|00>"), Complex64::new(0.99999999, 0.0)),
            (ket("|11>"), Complex64::new(0.0, 0.00000001)),
        ])
        .unwrap();

    let coarse = engine.render(1e-6);
    assert_eq!(coarse, vec!["(1.000000 +0.000000 i) |00>"]);

    let fine = engine.render(1e-9);
    assert_eq!(fine.len(), 2);
    assert_eq!(fine[1], "(0.000000 +0.000000 i) |11>");
}

#[test]
fn set_state_does_not_accumulate() {
    let mut engine = StateVectorEngine::new(2).unwrap();
    engine
        .set_state([
            (ket("|01>"), Complex64::new(FRAC_1_SQRT_2, 0.0)),
            (ket("|10>"), Complex64::new(FRAC_1_SQRT_2, 0.0)),
        ])
        .unwrap();
    engine
        .set_state([(ket("|01>"), Complex64::new(0.0, 1.0))])
        .unwrap();

    assert_eq!(engine.render(1e-6), vec!["(0.000000 +1.000000 i) |01>"]);
}

#[test]
fn complex_phases_propagate() {
    // H, S, H on |0> gives ((1+i)/2, (1-i)/2)
    for mut engine in engines(1) {
        engine.apply(&GateSpec::h(0)).unwrap();
        engine
            .apply(&GateSpec::one_qubit("S", 0, matrices::S_GATE))
            .unwrap();
        engine.apply(&GateSpec::h(0)).unwrap();

        let a0 = engine.amplitude(ket("|0>")).unwrap();
        let a1 = engine.amplitude(ket("|1>")).unwrap();
        assert_abs_diff_eq!(a0.re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a0.im, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a1.re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a1.im, -0.5, epsilon = 1e-12);
    }
}

#[test]
fn independent_engines_run_on_separate_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            std::thread::spawn(move || {
                let mut engine = StateVectorEngine::new(n).unwrap();
                for q in 0..n {
                    engine.apply(&GateSpec::x(q)).unwrap();
                }
                engine.amplitude(BasisState::new((1 << n) - 1)).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Complex64::new(1.0, 0.0));
    }
}
