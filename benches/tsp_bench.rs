//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Uses randomly generated maps to measure table construction, the
//! reproduction operators and full runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_ga::ga::operators::{half_order_crossover, swap_mutation};
use tsp_ga::ga::{GaConfig, GaRunner};
use tsp_ga::map::generate_cities;
use tsp_ga::random::create_rng;
use tsp_ga::tsp::{DistanceTable, Tour};

fn bench_distance_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_table");

    for &n in &[20usize, 100, 300] {
        let cities = generate_cities(n, &mut create_rng(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| black_box(DistanceTable::new(black_box(cities)).unwrap()))
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &n in &[20usize, 100, 500] {
        let p1 = Tour::identity(n);
        let mut p2 = Tour::identity(n);
        p2.nodes.reverse();
        group.bench_with_input(BenchmarkId::new("crossover", n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(half_order_crossover(black_box(p1), black_box(p2)).unwrap()))
        });

        let mut rng = create_rng(42);
        group.bench_with_input(BenchmarkId::new("swap_mutation", n), &n, |b, &n| {
            let mut tour = Tour::identity(n);
            b.iter(|| swap_mutation(black_box(&mut tour), 0.2, &mut rng))
        });
    }
    group.finish();
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (cities, pop, gen) in [(10usize, 20usize, 50usize), (50, 50, 30), (100, 100, 20)] {
        let map = generate_cities(cities, &mut create_rng(42));
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_g{}", cities, pop, gen), cities),
            &(map, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(m.clone()), black_box(c)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_distance_table, bench_operators, bench_ga_run);
criterion_main!(benches);
