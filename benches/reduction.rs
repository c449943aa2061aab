use criterion::{criterion_group, criterion_main, Criterion};

fn matfold_mat(m: usize, n: usize) -> matfold::DynMatrix<f64> {
    matfold::DynMatrix::from_fn(m, n, |i, j| ((i * 31 + j * 7) % 97) as f64 - 48.0)
}

fn nalgebra_mat(m: usize, n: usize) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(m, n, |i, j| ((i * 31 + j * 7) % 97) as f64 - 48.0)
}

fn full_sum(c: &mut Criterion) {
    let mut g = c.benchmark_group("sum_256x256");

    let a = matfold_mat(256, 256);
    g.bench_function("matfold", |bench| bench.iter(|| std::hint::black_box(a.sum())));

    let b = nalgebra_mat(256, 256);
    g.bench_function("nalgebra", |bench| bench.iter(|| std::hint::black_box(b.sum())));

    g.finish();
}

fn colwise_sum(c: &mut Criterion) {
    let mut g = c.benchmark_group("colwise_sum_256x256");

    let a = matfold_mat(256, 256);
    g.bench_function("matfold", |bench| {
        let mut out = vec![0.0; a.ncols()];
        bench.iter(|| {
            matfold::reduce::colwise_sum(&a, &mut out);
            std::hint::black_box(out[0])
        })
    });

    let b = nalgebra_mat(256, 256);
    g.bench_function("nalgebra", |bench| {
        bench.iter(|| std::hint::black_box(b.row_sum()))
    });

    g.finish();
}

fn rowwise_sum(c: &mut Criterion) {
    let mut g = c.benchmark_group("rowwise_sum_256x256");

    let a = matfold_mat(256, 256);
    g.bench_function("matfold", |bench| {
        let mut out = vec![0.0; a.nrows()];
        bench.iter(|| {
            matfold::reduce::rowwise_sum(&a, &mut out);
            std::hint::black_box(out[0])
        })
    });

    let b = nalgebra_mat(256, 256);
    g.bench_function("nalgebra", |bench| {
        bench.iter(|| std::hint::black_box(b.column_sum()))
    });

    g.finish();
}

fn colwise_maximum_tail(c: &mut Criterion) {
    // 1000 rows exercises the scalar tail on every column.
    let mut g = c.benchmark_group("colwise_maximum_1000x64");

    let a = matfold_mat(1000, 64);
    g.bench_function("matfold", |bench| {
        let mut out = vec![0.0; a.ncols()];
        bench.iter(|| {
            matfold::reduce::colwise_maximum(&a, &mut out);
            std::hint::black_box(out[0])
        })
    });

    g.finish();
}

criterion_group!(benches, full_sum, colwise_sum, rowwise_sum, colwise_maximum_tail);
criterion_main!(benches);
