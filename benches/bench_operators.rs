use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sga::{
    crossover::CrossoverParams,
    mutation::MutationParams,
    rng::RandomNumberGenerator,
    Crossover, Mutation, Selection,
};

const DIM: usize = 20;

fn random_pool(size: usize, rng: &mut RandomNumberGenerator) -> Vec<Vec<f64>> {
    (0..size)
        .map(|_| (0..DIM).map(|_| -5.0 + 10.0 * rng.uniform01()).collect())
        .collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("selection");
    for size in [10, 100, 1000].iter() {
        let fitness: Vec<Vec<f64>> = (0..*size).map(|_| vec![rng.uniform01()]).collect();
        for selection in [Selection::Tournament, Selection::Truncated] {
            group.bench_function(&format!("{}_{}", selection, size), |b| {
                b.iter(|| {
                    let result = selection.select(black_box(&fitness), 5, black_box(&mut rng));
                    assert!(result.is_ok());
                })
            });
        }
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(2);
    let lb = vec![-5.0; DIM];
    let ub = vec![5.0; DIM];
    let params = CrossoverParams {
        cr: 0.9,
        eta_c: 10.0,
        int_dim: 4,
    };

    let mut group = c.benchmark_group("crossover");
    for size in [10, 100, 1000].iter() {
        for crossover in [
            Crossover::Exponential,
            Crossover::Binomial,
            Crossover::Single,
            Crossover::Sbx,
        ] {
            let mut pool = random_pool(*size, &mut rng);
            group.bench_function(&format!("{}_{}", crossover, size), |b| {
                b.iter(|| {
                    let result = crossover.perform(
                        black_box(&mut pool),
                        &lb,
                        &ub,
                        &params,
                        black_box(&mut rng),
                    );
                    assert!(result.is_ok());
                })
            });
        }
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(3);
    let lb = vec![-5.0; DIM];
    let ub = vec![5.0; DIM];

    let mut group = c.benchmark_group("mutation");
    for mutation in [Mutation::Gaussian, Mutation::Uniform, Mutation::Polynomial] {
        let params = MutationParams {
            m: 0.1,
            param_m: if mutation == Mutation::Polynomial { 20.0 } else { 0.1 },
            int_dim: 4,
        };
        let mut pool = random_pool(100, &mut rng);
        group.bench_function(mutation.name(), |b| {
            b.iter(|| mutation.perform(black_box(&mut pool), &lb, &ub, &params, black_box(&mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection, bench_crossover, bench_mutation);
criterion_main!(benches);
