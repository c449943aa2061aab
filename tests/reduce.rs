//! Integration tests for the reduction engine: concrete scenarios,
//! SIMD-width boundary shapes, degenerate shapes, and naive-fold
//! cross-checks.

use matfold::reduce::{self, AbsFun, DiffFun, IdentFun, MulFun, SqrFun};
use matfold::{DynMatrix, Matrix};

/// m×n matrix with elements 1, 2, 3, … in column-major order.
fn sequential(m: usize, n: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(m, n, |i, j| (j * m + i + 1) as f64)
}

/// Deterministic but non-monotonic fill so extrema land in interior
/// positions.
fn scrambled(m: usize, n: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(m, n, |i, j| {
        let k = j * m + i;
        ((k * 7 + 3) % 11) as f64 - 5.0
    })
}

fn naive_colwise(m: &DynMatrix<f64>, init: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    (0..m.ncols())
        .map(|j| (0..m.nrows()).fold(init, |acc, i| f(acc, m[(i, j)])))
        .collect()
}

fn naive_rowwise(m: &DynMatrix<f64>, init: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).fold(init, |acc, j| f(acc, m[(i, j)])))
        .collect()
}

// ── Concrete 4×3 scenario ───────────────────────────────────────────

#[test]
fn four_by_three_reference_values() {
    let m = sequential(4, 3);

    assert_eq!(m.colwise_sum().as_slice(), &[10.0, 26.0, 42.0]);
    assert_eq!(m.rowwise_sum().as_slice(), &[15.0, 18.0, 21.0, 24.0]);
    assert_eq!(m.colwise_mean().as_slice(), &[2.5, 6.5, 10.5]);
}

#[test]
fn four_by_three_fixed_matrix_matches_dyn() {
    let d = sequential(4, 3);
    let f: Matrix<f64, 4, 3> = (&d).try_into().unwrap();

    assert_eq!(f.colwise_sum().as_slice(), d.colwise_sum().as_slice());
    assert_eq!(f.rowwise_sum().as_slice(), d.rowwise_sum().as_slice());
    assert_eq!(f.sum(), d.sum());
    assert_eq!(f.maximum(), d.maximum());
    assert_eq!(f.minimum(), d.minimum());
}

// ── Cross-checks against naive folds over boundary shapes ───────────

#[test]
fn colwise_matches_naive_over_boundary_shapes() {
    for m in [0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17] {
        for n in [1, 2, 3] {
            let mat = scrambled(m, n);

            let mut sum = vec![0.0; n];
            reduce::colwise_sum(&mat, &mut sum);
            let expected = naive_colwise(&mat, 0.0, |a, x| a + x);
            for j in 0..n {
                assert!((sum[j] - expected[j]).abs() < 1e-12, "sum {m}x{n} col {j}");
            }

            let mut mx = vec![0.0; n];
            reduce::colwise_maximum(&mat, &mut mx);
            assert_eq!(
                mx,
                naive_colwise(&mat, f64::NEG_INFINITY, f64::max),
                "maximum {m}x{n}"
            );

            let mut mn = vec![0.0; n];
            reduce::colwise_minimum(&mat, &mut mn);
            assert_eq!(
                mn,
                naive_colwise(&mat, f64::INFINITY, f64::min),
                "minimum {m}x{n}"
            );
        }
    }
}

#[test]
fn rowwise_matches_naive_over_boundary_shapes() {
    for m in [1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17] {
        for n in [1, 2, 5] {
            let mat = scrambled(m, n);

            let mut sum = vec![0.0; m];
            reduce::rowwise_sum(&mat, &mut sum);
            let expected = naive_rowwise(&mat, 0.0, |a, x| a + x);
            for i in 0..m {
                assert!((sum[i] - expected[i]).abs() < 1e-12, "sum {m}x{n} row {i}");
            }

            let mut mx = vec![0.0; m];
            reduce::rowwise_maximum(&mat, &mut mx);
            assert_eq!(
                mx,
                naive_rowwise(&mat, f64::NEG_INFINITY, f64::max),
                "maximum {m}x{n}"
            );

            let mut mn = vec![0.0; m];
            reduce::rowwise_minimum(&mat, &mut mn);
            assert_eq!(
                mn,
                naive_rowwise(&mat, f64::INFINITY, f64::min),
                "minimum {m}x{n}"
            );
        }
    }
}

#[test]
fn colwise_mean_is_sum_over_rows() {
    for m in [1, 2, 3, 5, 8, 13] {
        let mat = scrambled(m, 4);
        let mut mean = vec![0.0; 4];
        let mut sum = vec![0.0; 4];
        reduce::colwise_mean(&mat, &mut mean);
        reduce::colwise_sum(&mat, &mut sum);
        for j in 0..4 {
            assert!((mean[j] - sum[j] / m as f64).abs() < 1e-12, "{m} rows col {j}");
        }
    }
}

#[test]
fn f32_reductions_match_naive() {
    for n in [1, 3, 4, 5, 8, 9, 16, 17, 33] {
        let mat = DynMatrix::from_fn(n, 2, |i, j| ((i * 13 + j * 5 + 1) % 17) as f32 - 8.0);
        let mut mx = vec![0.0_f32; 2];
        reduce::colwise_maximum(&mat, &mut mx);
        for j in 0..2 {
            let expected = (0..n).map(|i| mat[(i, j)]).fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(mx[j], expected, "{n} rows col {j}");
        }
    }
}

// ── Degenerate shapes ───────────────────────────────────────────────

#[test]
fn empty_reductions_yield_empty_values() {
    let zero_rows = DynMatrix::<f64>::zeros(0, 4, 0.0);
    assert_eq!(zero_rows.colwise_sum().as_slice(), &[0.0; 4]);
    assert_eq!(zero_rows.colwise_maximum().as_slice(), &[f64::NEG_INFINITY; 4]);
    assert_eq!(zero_rows.colwise_minimum().as_slice(), &[f64::INFINITY; 4]);
    assert!(zero_rows.colwise_mean().as_slice().iter().all(|x| x.is_nan()));

    let zero_cols = DynMatrix::<f64>::zeros(4, 0, 0.0);
    assert_eq!(zero_cols.rowwise_sum().as_slice(), &[0.0; 4]);
    assert_eq!(zero_cols.rowwise_maximum().as_slice(), &[f64::NEG_INFINITY; 4]);
    assert_eq!(zero_cols.rowwise_minimum().as_slice(), &[f64::INFINITY; 4]);
    assert!(zero_cols.rowwise_mean().as_slice().iter().all(|x| x.is_nan()));

    // Full reductions over nothing.
    assert_eq!(reduce::sum(&zero_rows), 0.0);
    assert_eq!(reduce::maximum(&zero_rows), f64::NEG_INFINITY);
    assert_eq!(reduce::minimum(&zero_cols), f64::INFINITY);
    assert!(reduce::mean(&zero_cols).is_nan());
}

#[test]
fn rowwise_single_column_is_identity() {
    let col = [3.5, -1.25, 0.0, 12.0, -7.5];
    let m = DynMatrix::from_slice(5, 1, &col);

    assert_eq!(m.rowwise_sum().as_slice(), &col);
    assert_eq!(m.rowwise_maximum().as_slice(), &col);
    assert_eq!(m.rowwise_minimum().as_slice(), &col);
}

#[test]
fn one_by_one_boundary() {
    let m = DynMatrix::from_slice(1, 1, &[42.0]);
    assert_eq!(m.sum(), 42.0);
    assert_eq!(m.mean(), 42.0);
    assert_eq!(m.colwise_sum().as_slice(), &[42.0]);
    assert_eq!(m.rowwise_sum().as_slice(), &[42.0]);
}

// ── Fused transforms ────────────────────────────────────────────────

#[test]
fn ident_transform_matches_direct_fold() {
    for (m, n) in [(1, 1), (8, 1), (1, 6), (4, 3), (17, 5)] {
        let mat = scrambled(m, n);

        let mut direct = vec![0.0; n];
        let mut mapped = vec![0.0; n];
        reduce::colwise_sum(&mat, &mut direct);
        reduce::colwise_sum_map(IdentFun, &mat, &mut mapped);
        assert_eq!(direct, mapped, "colwise sum {m}x{n}");

        reduce::colwise_minimum(&mat, &mut direct);
        reduce::colwise_minimum_map(IdentFun, &mat, &mut mapped);
        assert_eq!(direct, mapped, "colwise minimum {m}x{n}");

        let mut direct = vec![0.0; m];
        let mut mapped = vec![0.0; m];
        reduce::rowwise_sum(&mat, &mut direct);
        reduce::rowwise_sum_map(IdentFun, &mat, &mut mapped);
        assert_eq!(direct, mapped, "rowwise sum {m}x{n}");

        reduce::rowwise_maximum(&mat, &mut direct);
        reduce::rowwise_maximum_map(IdentFun, &mat, &mut mapped);
        assert_eq!(direct, mapped, "rowwise maximum {m}x{n}");

        assert_eq!(
            reduce::fold_map(reduce::Sum, IdentFun, &mat),
            reduce::sum(&mat),
            "full sum {m}x{n}"
        );
    }
}

#[test]
fn abs_and_square_fused_folds() {
    let m = DynMatrix::from_slice(2, 2, &[1.0_f64, -2.0, -3.0, 4.0]);

    assert_eq!(reduce::abs_sum(&m), 10.0);
    assert_eq!(reduce::sq_sum(&m), 30.0);

    let mut out = [0.0; 2];
    reduce::colwise_sum_map(AbsFun, &m, &mut out);
    assert_eq!(out, [3.0, 7.0]);

    reduce::rowwise_sum_map(SqrFun, &m, &mut out);
    assert_eq!(out, [10.0, 20.0]);
}

#[test]
fn zip_folds_fuse_two_operands() {
    for (m, n) in [(1, 1), (5, 2), (8, 3), (9, 4)] {
        let a = sequential(m, n);
        let b = scrambled(m, n);

        // sum of differences == difference of sums
        let fused: f64 = reduce::fold_zip(reduce::Sum, DiffFun, &a, &b);
        let separate = reduce::sum(&a) - reduce::sum(&b);
        assert!((fused - separate).abs() < 1e-10, "{m}x{n}");

        // sum of products == Frobenius inner product, checked naively
        let dot: f64 = reduce::fold_zip(reduce::Sum, MulFun, &a, &b);
        let mut expected = 0.0;
        for j in 0..n {
            for i in 0..m {
                expected += a[(i, j)] * b[(i, j)];
            }
        }
        assert!((dot - expected).abs() < 1e-10, "{m}x{n}");
    }
}

#[test]
fn rowwise_mean_zip_scales_by_column_count() {
    let a = DynMatrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = DynMatrix::fill(2, 3, 1.0);

    let mut out = [0.0; 2];
    reduce::rowwise_mean_zip(DiffFun, &a, &b, &mut out);
    // row 0: ((1-1) + (3-1) + (5-1)) / 3 = 2; row 1: ((2-1)+(4-1)+(6-1))/3 = 3
    assert_eq!(out, [2.0, 3.0]);
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn zip_rejects_mismatched_shapes() {
    let a = DynMatrix::<f64>::zeros(2, 3, 0.0);
    let b = DynMatrix::<f64>::zeros(2, 4, 0.0);
    let _ = reduce::fold_zip(reduce::Sum, DiffFun, &a, &b);
}

// ── Larger shapes straddling pack widths ────────────────────────────

#[test]
fn tall_matrix_partial_tail_correctness() {
    // 1000 rows is not a multiple of any pack width in use; the tail
    // must not perturb the result.
    let m = sequential(1000, 3);
    let mut out = [0.0; 3];
    reduce::colwise_sum(&m, &mut out);
    for j in 0..3 {
        // Column j holds 1000j+1 ..= 1000j+1000.
        let lo = (j * 1000 + 1) as f64;
        let hi = (j * 1000 + 1000) as f64;
        let expected = (lo + hi) * 500.0;
        assert_eq!(out[j], expected, "col {j}");
    }
}

#[test]
fn all_negative_maximum_with_tail() {
    // Zero-fill leaking into a max reduction would surface here.
    for m in [1, 2, 3, 5, 7, 9, 11, 30, 31] {
        let mat = DynMatrix::from_fn(m, 2, |i, j| -1.0 - (i + j * m) as f64);
        let mut out = [0.0; 2];
        reduce::colwise_maximum(&mat, &mut out);
        assert_eq!(out[0], -1.0, "{m} rows");
        assert_eq!(out[1], -((1 + m) as f64), "{m} rows");
    }
}
