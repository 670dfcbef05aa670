use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_minimizer::random::generate_random_dfa_with;

fn minimize_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    let mut rng = fastrand::Rng::with_seed(0xdfa);

    for size in [10, 100, 1000] {
        let dfa = generate_random_dfa_with(&mut rng, 4, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| black_box(dfa.minimize()))
        });
    }
    group.finish();
}

fn refine_random(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(7);
    let dfa = generate_random_dfa_with(&mut rng, 2, 500).trim();
    c.bench_function("moore_partition_refinement 500", |b| {
        b.iter(|| dfa_minimizer::minimization::moore_partition_refinement(black_box(&dfa)))
    });
}

criterion_group!(benches, minimize_random, refine_random);
criterion_main!(benches);
