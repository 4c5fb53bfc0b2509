use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hybrid_sssp::algorithm::ShortestPathAlgorithm;
use hybrid_sssp::graph::generators::{hub_graph, random_graph};
use hybrid_sssp::{AdjacencyList, Dijkstra, HybridConfig, HybridDijkstra};

fn bench_graph(c: &mut Criterion, name: &str, graph: &AdjacencyList<i64>) {
    let sequential = Dijkstra::new();
    let hybrid = HybridDijkstra::new(HybridConfig::default()).unwrap();

    let mut group = c.benchmark_group(name);
    group.bench_with_input(BenchmarkId::new("sequential", name), graph, |b, g| {
        b.iter(|| sequential.compute_shortest_paths(g, 1).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("hybrid", name), graph, |b, g| {
        b.iter(|| hybrid.compute_shortest_paths(g, 1).unwrap())
    });
    group.finish();
}

fn sparse_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = random_graph(50_000, 5, 100, &mut rng).unwrap();
    bench_graph(c, "sparse_random_50k", &graph);
}

fn hub_heavy(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    // One node fanning out to 20k others: the case the parallel branch
    // exists for.
    let graph = hub_graph(20_000, 100, &mut rng).unwrap();
    bench_graph(c, "hub_20k", &graph);
}

criterion_group!(benches, sparse_random, hub_heavy);
criterion_main!(benches);
