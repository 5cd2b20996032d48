use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shallownet::{Mlp, Sampler};

fn mlp_forward_bench(c: &mut Criterion) {
    let mlp = Mlp::new_with_seed(50, 0.01, 1, 0).unwrap();
    let mut scratch = mlp.scratch();
    let input = [1.3_f64, 2.1];

    c.bench_function("mlp_forward_2_50_1", |b| {
        b.iter(|| {
            let out = mlp.forward(black_box(input), &mut scratch);
            black_box(out);
        })
    });
}

fn mlp_train_epoch_bench(c: &mut Criterion) {
    let train = Sampler::from_seed(0).generate(1000);
    let mut mlp = Mlp::new_with_seed(50, 0.01, 1, 0).unwrap();

    c.bench_function("mlp_train_epoch_2_50_1", |b| {
        b.iter(|| {
            mlp.fit(black_box(train.inputs()), black_box(train.targets()))
                .unwrap();
        })
    });
}

criterion_group!(benches, mlp_forward_bench, mlp_train_epoch_bench);
criterion_main!(benches);
