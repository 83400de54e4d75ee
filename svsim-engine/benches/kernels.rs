use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use svsim_core::{matrices, Circuit, GateSpec};
use svsim_engine::kernels::{
    apply_single_qubit_direct, apply_single_qubit_insertion, apply_two_qubit_direct,
    apply_two_qubit_insertion,
};
use svsim_engine::{EngineConfig, KernelStrategy, StateVectorEngine};

fn uniform_state(num_qubits: usize) -> Vec<Complex64> {
    let dim = 1usize << num_qubits;
    vec![Complex64::new(1.0 / (dim as f64).sqrt(), 0.0); dim]
}

fn bench_single_qubit_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_kernel");

    for num_qubits in [8, 12, 16] {
        let state = uniform_state(num_qubits);
        let mut scratch = vec![Complex64::default(); state.len()];
        let target = num_qubits / 2;

        group.bench_with_input(BenchmarkId::new("direct", num_qubits), &num_qubits, |b, _| {
            b.iter(|| {
                scratch.fill(Complex64::default());
                apply_single_qubit_direct(&matrices::HADAMARD, target, black_box(&state), &mut scratch)
                    .unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("insertion", num_qubits), &num_qubits, |b, _| {
            b.iter(|| {
                scratch.fill(Complex64::default());
                apply_single_qubit_insertion(&matrices::HADAMARD, target, black_box(&state), &mut scratch)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_two_qubit_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_kernel");

    for num_qubits in [8, 12, 16] {
        let state = uniform_state(num_qubits);
        let mut scratch = vec![Complex64::default(); state.len()];

        group.bench_with_input(BenchmarkId::new("direct", num_qubits), &num_qubits, |b, &n| {
            b.iter(|| {
                scratch.fill(Complex64::default());
                apply_two_qubit_direct(&matrices::CNOT, 0, n - 1, black_box(&state), &mut scratch)
                    .unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("insertion", num_qubits), &num_qubits, |b, &n| {
            b.iter(|| {
                scratch.fill(Complex64::default());
                apply_two_qubit_insertion(&matrices::CNOT, 0, n - 1, black_box(&state), &mut scratch)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn ghz_circuit(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(num_qubits, num_qubits).unwrap();
    circuit.add_gate(GateSpec::h(0)).unwrap();
    for q in 0..num_qubits - 1 {
        circuit.add_gate(GateSpec::cnot(q, q + 1).unwrap()).unwrap();
    }
    circuit
}

fn bench_ghz_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_circuit");
    group.sample_size(20);

    for num_qubits in [10, 14] {
        let circuit = ghz_circuit(num_qubits);
        for strategy in KernelStrategy::ALL {
            let config = EngineConfig::default().with_kernel(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), num_qubits),
                &circuit,
                |b, circuit| {
                    b.iter(|| {
                        let mut engine =
                            StateVectorEngine::with_config(num_qubits, config.clone()).unwrap();
                        engine.apply_circuit(black_box(circuit)).unwrap();
                        engine
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit_kernels,
    bench_two_qubit_kernels,
    bench_ghz_circuit
);
criterion_main!(benches);
