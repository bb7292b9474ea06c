use allelefix_sim::base::ParameterSet;
use allelefix_sim::simulation::{evaluate, plan_jobs, Dispatcher, Job, RunConfig, Trial};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");

    for &population_size in &[100u64, 1_000, 10_000] {
        let params = ParameterSet::new(1, population_size, 0.001, 1);
        let trial = Trial::new(
            population_size,
            params.selection_coefficient,
            params.initial_frequency(),
            u64::MAX,
        )
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("run", population_size),
            &trial,
            |b, trial| {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
                b.iter(|| black_box(trial.run(&mut rng).unwrap()))
            },
        );
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let attempts = 200;
    group.throughput(Throughput::Elements(attempts));

    let params = ParameterSet::new(1, 1000, 0.0, attempts);
    let job = Job::new(&params, 1, u64::MAX, 7);
    group.bench_function("neutral_n1000", |b| {
        b.iter(|| black_box(evaluate(black_box(&job)).unwrap()))
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.sample_size(10);

    let params = vec![
        ParameterSet::new(1, 500, 0.0, 100),
        ParameterSet::new(2, 500, 0.01, 100),
    ];
    let config = RunConfig::new(8, u64::MAX, Some(1));
    let dispatcher = Dispatcher::new(None).unwrap();

    group.bench_function("two_sets_eight_reps", |b| {
        b.iter_batched(
            || plan_jobs(&params, &config),
            |jobs| black_box(dispatcher.dispatch(jobs).unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_trial, bench_evaluate, bench_dispatch);
criterion_main!(benches);
