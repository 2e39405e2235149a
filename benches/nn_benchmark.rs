use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rust_perceptron::{
    matrix::{
        init::kaiming,
        ops::{Dot, Transpose},
        shuffle::shuffle,
        Matrix2,
    },
    Dataset, Optimizer, Perceptron,
};

fn train_first_feature(iterations: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    let data = Dataset::first_feature().shuffled(&mut rng).unwrap();
    let mut net = Perceptron::new(3, &mut rng).unwrap();

    let optim = Optimizer::new(iterations);
    assert!(optim.train(&mut net, data.inputs(), data.targets()).is_ok());
}

fn bench_matrix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = kaiming(100, 50, &mut rng).unwrap();
    let b = kaiming(50, 100, &mut rng).unwrap();

    c.bench_function("dot 100x50 . 50x100", |bench| {
        bench.iter(|| black_box(&a).dot(black_box(&b)))
    });
    c.bench_function("dot transposed 50x100 . 100x50", |bench| {
        bench.iter(|| black_box(&a).t().dot(black_box(&b.t())))
    });

    let targets = Matrix2::ones(100, 1);
    c.bench_function("shuffle 100 rows", |bench| {
        bench.iter(|| shuffle(black_box(&a), black_box(&targets), &mut rng))
    });
}

fn bench_train(c: &mut Criterion) {
    c.bench_function("first feature 10 iterations", |b| {
        b.iter(|| train_first_feature(black_box(10)))
    });
    c.bench_function("first feature 10,000 iterations", |b| {
        b.iter(|| train_first_feature(black_box(10_000)))
    });
}

criterion_group!(benches, bench_matrix, bench_train);
criterion_main!(benches);
