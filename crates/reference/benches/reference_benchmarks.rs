use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use qrbill_reference::{generate_qr_reference, generate_scor_reference, verify_scor_reference};

fn bench_qr_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("qr_reference");
    for input in ["INV-0001", "2024-000123-ACME-4711", "21000000000313947143000901"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| generate_qr_reference(black_box(input)))
        });
    }
    group.finish();
}

fn bench_scor_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("scor_reference");
    for input in ["INV0001", "539007547034", "ACME2024INV000123"] {
        group.bench_with_input(BenchmarkId::new("generate", input), input, |b, input| {
            b.iter(|| generate_scor_reference(black_box(input)))
        });
        let reference = generate_scor_reference(input);
        group.bench_with_input(BenchmarkId::new("verify", input), &reference, |b, reference| {
            b.iter(|| verify_scor_reference(black_box(reference)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_qr_reference, bench_scor_reference);
criterion_main!(benches);
