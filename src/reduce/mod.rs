//! Full, column-wise, and row-wise reductions over dense matrices.
//!
//! Every reduction is built from three pieces: a [`Folder`] (the combine
//! rule and its empty value), an optional transform
//! ([`UnaryFun`]/[`BinaryFun`]) fused into the fold, and a driver that
//! walks the operand. Execution is vectorized per column through the
//! dispatch layer in [`crate::simd`]; element types without a pack
//! specialization use the identical logic in scalar form.
//!
//! Reducing zero elements yields the folder's empty value per output
//! slot:
//!
//! | kind    | empty value |
//! |---------|-------------|
//! | sum     | 0           |
//! | mean    | NaN         |
//! | maximum | −∞          |
//! | minimum | +∞          |
//!
//! This includes the row-wise drivers over a zero-column operand, kept
//! consistent with the column-wise zero-row case.
//!
//! Column-wise drivers produce one scalar per column (a row vector);
//! row-wise drivers accumulate a full column of partial results across
//! the matrix, combining one column at a time along the contiguous
//! dimension, and produce one scalar per row (a column vector). Mean is
//! a sum fold followed by an element-wise multiply with the reciprocal
//! count.
//!
//! Two-operand (`_zip`) forms require both operands to share a shape;
//! disagreement is a programming error and panics at the call boundary.

pub mod folder;
pub mod funs;

pub use folder::{Folder, Maximum, Minimum, Sum};
pub use funs::{AbsDiffFun, AbsFun, BinaryFun, DiffFun, IdentFun, MulFun, SqrFun, UnaryFun};

use crate::shape::Shape;
use crate::simd::{self, Arith};
use crate::traits::{FloatScalar, MatrixRef, Scalar};

// `F` carries three `Folder<_>` instantiations through the dispatch
// layer, which makes direct method calls on it ambiguous; these pin the
// element type.
#[inline]
fn empty_of<T: Copy, F: Folder<T>>(folder: &F) -> T {
    folder.empty()
}

#[inline]
fn fold_into<T: Copy + Arith, F: Folder<T>>(folder: &F, a: &mut T, x: T) {
    folder.fold(a, x);
}

/// Resolve the common shape of two operands.
///
/// Panics if the shapes disagree; reductions define no broadcasting or
/// partial-result recovery.
pub(crate) fn common_shape<T>(a: &impl MatrixRef<T>, b: &impl MatrixRef<T>) -> Shape {
    assert_eq!(
        a.shape(),
        b.shape(),
        "dimension mismatch: {} vs {}",
        a.shape(),
        b.shape(),
    );
    a.shape()
}

// ── Full reductions (matrix → scalar) ───────────────────────────────

/// Fold every element of `a` into one scalar.
pub fn fold<T, A, F>(folder: F, a: &A) -> T
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
{
    let mut r = empty_of(&folder);
    for j in 0..a.ncols() {
        let c = simd::fold_slice_dispatch(folder, a.col_as_slice(j, 0));
        fold_into(&folder, &mut r, c);
    }
    r
}

/// Fold every transformed element of `a` into one scalar.
pub fn fold_map<T, A, F, U>(folder: F, f: U, a: &A) -> T
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    U: UnaryFun,
{
    let mut r = empty_of(&folder);
    for j in 0..a.ncols() {
        let c = simd::fold_map_dispatch(folder, f, a.col_as_slice(j, 0));
        fold_into(&folder, &mut r, c);
    }
    r
}

/// Fold `f(a[i,j], b[i,j])` over all elements into one scalar.
pub fn fold_zip<T, A1, A2, F, B>(folder: F, f: B, a: &A1, b: &A2) -> T
where
    T: Scalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    B: BinaryFun,
{
    let n = common_shape(a, b).ncols;
    let mut r = empty_of(&folder);
    for j in 0..n {
        let c = simd::fold_zip_dispatch(folder, f, a.col_as_slice(j, 0), b.col_as_slice(j, 0));
        fold_into(&folder, &mut r, c);
    }
    r
}

/// Sum of all elements.
///
/// ```
/// use matfold::{reduce, DynMatrix};
/// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(reduce::sum(&m), 10.0);
/// ```
pub fn sum<T: Scalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    fold(Sum, a)
}

/// Mean of all elements; NaN for an empty matrix.
pub fn mean<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    let s: T = fold(Sum, a);
    s * (T::one() / T::from(a.nrows() * a.ncols()).unwrap())
}

/// Maximum element; −∞ for an empty matrix.
pub fn maximum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    fold(Maximum, a)
}

/// Minimum element; +∞ for an empty matrix.
pub fn minimum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    fold(Minimum, a)
}

/// Sum of absolute values.
pub fn abs_sum<T: Scalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    fold_map(Sum, AbsFun, a)
}

/// Sum of squares.
pub fn sq_sum<T: Scalar + Arith, A: MatrixRef<T>>(a: &A) -> T {
    fold_map(Sum, SqrFun, a)
}

// ── Column-wise reductions (matrix → row vector) ────────────────────

/// Fold each column of `a` into `out[j]`.
pub fn colwise_fold<T, A, F>(folder: F, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
{
    assert_eq!(
        out.len(),
        a.ncols(),
        "output length {} does not match {} columns",
        out.len(),
        a.ncols(),
    );
    for j in 0..a.ncols() {
        out[j] = simd::fold_slice_dispatch(folder, a.col_as_slice(j, 0));
    }
}

/// Transformed variant of [`colwise_fold`].
pub fn colwise_fold_map<T, A, F, U>(folder: F, f: U, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    U: UnaryFun,
{
    assert_eq!(
        out.len(),
        a.ncols(),
        "output length {} does not match {} columns",
        out.len(),
        a.ncols(),
    );
    for j in 0..a.ncols() {
        out[j] = simd::fold_map_dispatch(folder, f, a.col_as_slice(j, 0));
    }
}

/// Two-operand transformed variant of [`colwise_fold`]: folds
/// `f(a[i,j], b[i,j])` down each column.
pub fn colwise_fold_zip<T, A1, A2, F, B>(folder: F, f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: Scalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    B: BinaryFun,
{
    let n = common_shape(a, b).ncols;
    assert_eq!(
        out.len(),
        n,
        "output length {} does not match {} columns",
        out.len(),
        n,
    );
    for j in 0..n {
        out[j] = simd::fold_zip_dispatch(folder, f, a.col_as_slice(j, 0), b.col_as_slice(j, 0));
    }
}

/// Per-column sum.
///
/// ```
/// use matfold::{reduce, DynMatrix};
/// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let mut out = [0.0; 3];
/// reduce::colwise_sum(&m, &mut out);
/// assert_eq!(out, [5.0, 7.0, 9.0]);
/// ```
pub fn colwise_sum<T: Scalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    colwise_fold(Sum, a, out);
}

/// Per-column mean; NaN per slot when the matrix has zero rows.
pub fn colwise_mean<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    colwise_fold(Sum, a, out);
    let recip = T::one() / T::from(a.nrows()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-column maximum; −∞ per slot when the matrix has zero rows.
pub fn colwise_maximum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    colwise_fold(Maximum, a, out);
}

/// Per-column minimum; +∞ per slot when the matrix has zero rows.
pub fn colwise_minimum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    colwise_fold(Minimum, a, out);
}

/// Per-column sum of transformed elements.
pub fn colwise_sum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    colwise_fold_map(Sum, f, a, out);
}

/// Per-column mean of transformed elements.
pub fn colwise_mean_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    colwise_fold_map(Sum, f, a, out);
    let recip = T::one() / T::from(a.nrows()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-column maximum of transformed elements.
pub fn colwise_maximum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    colwise_fold_map(Maximum, f, a, out);
}

/// Per-column minimum of transformed elements.
pub fn colwise_minimum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    colwise_fold_map(Minimum, f, a, out);
}

/// Per-column sum of `f(a[i,j], b[i,j])`.
pub fn colwise_sum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: Scalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    colwise_fold_zip(Sum, f, a, b, out);
}

/// Per-column mean of `f(a[i,j], b[i,j])`.
pub fn colwise_mean_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    colwise_fold_zip(Sum, f, a, b, out);
    let recip = T::one() / T::from(a.nrows()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-column maximum of `f(a[i,j], b[i,j])`.
pub fn colwise_maximum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    colwise_fold_zip(Maximum, f, a, b, out);
}

/// Per-column minimum of `f(a[i,j], b[i,j])`.
pub fn colwise_minimum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    colwise_fold_zip(Minimum, f, a, b, out);
}

// ── Row-wise reductions (matrix → column vector) ────────────────────
//
// Columns are the contiguous direction, so the row-wise drivers do not
// flip the column-wise loop. The output vector is seeded from column 0
// and every further column is folded in element-wise, vectorized along
// the rows: `ncols − 1` full-column combine passes instead of
// `nrows × ncols` strided scalar folds.

/// Fold each row of `a` into `out[i]`.
pub fn rowwise_fold<T, A, F>(folder: F, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
{
    assert_eq!(
        out.len(),
        a.nrows(),
        "output length {} does not match {} rows",
        out.len(),
        a.nrows(),
    );
    let n = a.ncols();
    if n == 0 {
        out.fill(empty_of(&folder));
        return;
    }
    out.copy_from_slice(a.col_as_slice(0, 0));
    for j in 1..n {
        simd::combine_dispatch(folder, out, a.col_as_slice(j, 0));
    }
}

/// Transformed variant of [`rowwise_fold`].
pub fn rowwise_fold_map<T, A, F, U>(folder: F, f: U, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    U: UnaryFun,
{
    assert_eq!(
        out.len(),
        a.nrows(),
        "output length {} does not match {} rows",
        out.len(),
        a.nrows(),
    );
    let n = a.ncols();
    if n == 0 {
        out.fill(empty_of(&folder));
        return;
    }
    simd::map_dispatch(f, a.col_as_slice(0, 0), out);
    for j in 1..n {
        simd::combine_map_dispatch(folder, f, out, a.col_as_slice(j, 0));
    }
}

/// Two-operand transformed variant of [`rowwise_fold`]: folds
/// `f(a[i,j], b[i,j])` across each row.
pub fn rowwise_fold_zip<T, A1, A2, F, B>(folder: F, f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: Scalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    B: BinaryFun,
{
    let shape = common_shape(a, b);
    let n = shape.ncols;
    assert_eq!(
        out.len(),
        shape.nrows,
        "output length {} does not match {} rows",
        out.len(),
        shape.nrows,
    );
    if n == 0 {
        out.fill(empty_of(&folder));
        return;
    }
    simd::map_zip_dispatch(f, a.col_as_slice(0, 0), b.col_as_slice(0, 0), out);
    for j in 1..n {
        simd::combine_zip_dispatch(folder, f, out, a.col_as_slice(j, 0), b.col_as_slice(j, 0));
    }
}

/// Per-row sum.
///
/// ```
/// use matfold::{reduce, DynMatrix};
/// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let mut out = [0.0; 2];
/// reduce::rowwise_sum(&m, &mut out);
/// assert_eq!(out, [6.0, 15.0]);
/// ```
pub fn rowwise_sum<T: Scalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    rowwise_fold(Sum, a, out);
}

/// Per-row mean; NaN per slot when the matrix has zero columns.
pub fn rowwise_mean<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    rowwise_fold(Sum, a, out);
    let recip = T::one() / T::from(a.ncols()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-row maximum; −∞ per slot when the matrix has zero columns.
pub fn rowwise_maximum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    rowwise_fold(Maximum, a, out);
}

/// Per-row minimum; +∞ per slot when the matrix has zero columns.
pub fn rowwise_minimum<T: FloatScalar + Arith, A: MatrixRef<T>>(a: &A, out: &mut [T]) {
    rowwise_fold(Minimum, a, out);
}

/// Per-row sum of transformed elements.
pub fn rowwise_sum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: Scalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    rowwise_fold_map(Sum, f, a, out);
}

/// Per-row mean of transformed elements.
pub fn rowwise_mean_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    rowwise_fold_map(Sum, f, a, out);
    let recip = T::one() / T::from(a.ncols()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-row maximum of transformed elements.
pub fn rowwise_maximum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    rowwise_fold_map(Maximum, f, a, out);
}

/// Per-row minimum of transformed elements.
pub fn rowwise_minimum_map<T, A, U>(f: U, a: &A, out: &mut [T])
where
    T: FloatScalar + Arith,
    A: MatrixRef<T>,
    U: UnaryFun,
{
    rowwise_fold_map(Minimum, f, a, out);
}

/// Per-row sum of `f(a[i,j], b[i,j])`.
pub fn rowwise_sum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: Scalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    rowwise_fold_zip(Sum, f, a, b, out);
}

/// Per-row mean of `f(a[i,j], b[i,j])`.
pub fn rowwise_mean_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    rowwise_fold_zip(Sum, f, a, b, out);
    let recip = T::one() / T::from(a.ncols()).unwrap();
    simd::scale_assign_dispatch(out, recip);
}

/// Per-row maximum of `f(a[i,j], b[i,j])`.
pub fn rowwise_maximum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    rowwise_fold_zip(Maximum, f, a, b, out);
}

/// Per-row minimum of `f(a[i,j], b[i,j])`.
pub fn rowwise_minimum_zip<T, A1, A2, B>(f: B, a: &A1, b: &A2, out: &mut [T])
where
    T: FloatScalar + Arith,
    A1: MatrixRef<T>,
    A2: MatrixRef<T>,
    B: BinaryFun,
{
    rowwise_fold_zip(Minimum, f, a, b, out);
}
