use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use shortterm_core::generator::generate_sequence;
use shortterm_core::model::TestResult;
use shortterm_core::scorer::prefix_score;
use shortterm_core::statistics::RunSummary;

fn make_results(n: usize) -> Vec<TestResult> {
    (0..n)
        .map(|i| TestResult {
            score: (i % 8) as u32,
            duration: 2.0 + (i % 5) as f64,
            count: 7,
        })
        .collect()
}

fn bench_prefix_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_score");
    let mut rng = StdRng::seed_from_u64(0);
    let expected = generate_sequence(&mut rng, 10, 99, 1000).unwrap();

    group.bench_function("perfect", |b| {
        b.iter(|| prefix_score(black_box(&expected), black_box(&expected)))
    });

    group.bench_function("early_mismatch", |b| {
        let mut actual = expected.clone();
        actual[1] = -1;
        b.iter(|| prefix_score(black_box(&expected), black_box(&actual)))
    });

    group.bench_function("short_answer", |b| {
        let actual = expected[..7].to_vec();
        b.iter(|| prefix_score(black_box(&expected), black_box(&actual)))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_sequence");
    let mut rng = StdRng::seed_from_u64(1);

    group.bench_function("default_range", |b| {
        b.iter(|| generate_sequence(&mut rng, black_box(10), black_box(99), black_box(7)))
    });

    group.bench_function("narrow_range", |b| {
        b.iter(|| generate_sequence(&mut rng, black_box(90), black_box(99), black_box(7)))
    });

    group.finish();
}

fn bench_run_summary(c: &mut Criterion) {
    let results = make_results(1000);
    c.bench_function("run_summary", |b| {
        b.iter(|| RunSummary::from_results(black_box(&results)))
    });
}

criterion_group!(benches, bench_prefix_score, bench_generate, bench_run_summary);
criterion_main!(benches);
