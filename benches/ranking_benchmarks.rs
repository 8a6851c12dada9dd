use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use surfrank::algo::linalg::add_matrix_vector;
use surfrank::{Graph, PageRank, PageRankConfig, RandomSurfer, RandomSurferConfig};

/// Ring with a chord from every node to the node halfway round
fn ring_graph(size: usize) -> Graph {
    let mut graph = Graph::new(size).unwrap();
    for i in 0..size {
        graph.add_edge(i, (i + 1) % size).unwrap();
        graph.add_edge(i, (i + size / 2) % size).unwrap();
    }
    graph
}

/// Benchmark power-iteration PageRank over the dense operator
fn bench_pagerank(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagerank");

    for size in [100, 500, 1000].iter() {
        let graph = ring_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let result = PageRank::new(PageRankConfig::default()).run(&graph).unwrap();
                criterion::black_box(result.scores.len());
            });
        });
    }
    group.finish();
}

/// Benchmark random-surfer walk throughput
fn bench_random_surfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_surfer");
    group.sample_size(10);

    for steps in [100_000, 1_000_000].iter() {
        let graph = ring_graph(1000);
        let surfer = RandomSurfer::new(RandomSurferConfig {
            iterations: *steps,
            seed: Some(42),
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(steps), steps, |b, _| {
            b.iter(|| {
                let result = surfer.run(&graph).unwrap();
                criterion::black_box(result.visits.len());
            });
        });
    }
    group.finish();
}

/// Benchmark the dense matrix-vector primitive on its own
fn bench_matrix_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_vector");

    for size in [100, 1000].iter() {
        let graph = ring_graph(*size);
        let a = graph.transition_matrix(0.85);
        let x = graph.dangling_mask() + 1.0;
        let mut out = x.clone();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                out.fill(0.0);
                add_matrix_vector(&a, &x, &mut out).unwrap();
                criterion::black_box(out[0]);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pagerank, bench_random_surfer, bench_matrix_vector);
criterion_main!(benches);
