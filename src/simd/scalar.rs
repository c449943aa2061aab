//! Generic scalar fallback implementations for SIMD-dispatched traversals.
//!
//! These are used for element types that don't have pack specializations
//! (integers) or on architectures without SIMD support. The combine logic
//! is the same [`crate::simd::Arith`] code the pack loops run, applied one
//! lane at a time.

use super::Arith;
use crate::reduce::folder::Folder;
use crate::reduce::funs::{BinaryFun, FoldKernel, MapFoldKernel, UnaryFun, ZipFoldKernel};
use crate::traits::Scalar;

/// Fold a slice down to one scalar (scalar fallback).
#[inline]
pub(crate) fn fold_slice<T, F>(k: &FoldKernel<F, T>, xs: &[T]) -> T
where
    T: Copy + Arith,
    F: Folder<T>,
{
    let mut r = k.folder.empty();
    for &x in xs {
        k.apply(&mut r, x);
    }
    r
}

/// Fold a transformed slice down to one scalar (scalar fallback).
#[inline]
pub(crate) fn fold_map_slice<T, F, U>(k: &MapFoldKernel<F, U, T>, xs: &[T]) -> T
where
    T: Copy + Arith,
    F: Folder<T>,
    U: UnaryFun,
{
    let mut r = k.folder.empty();
    for &x in xs {
        k.apply(&mut r, x);
    }
    r
}

/// Fold a binary transform of two slices down to one scalar (scalar
/// fallback).
#[inline]
pub(crate) fn fold_zip_slice<T, F, B>(k: &ZipFoldKernel<F, B, T>, xs: &[T], ys: &[T]) -> T
where
    T: Copy + Arith,
    F: Folder<T>,
    B: BinaryFun,
{
    debug_assert_eq!(xs.len(), ys.len());
    let mut r = k.folder.empty();
    for i in 0..xs.len() {
        k.apply(&mut r, xs[i], ys[i]);
    }
    r
}

/// Fold each element of `xs` into the matching slot of `acc` (scalar
/// fallback).
#[inline]
pub(crate) fn combine_slices<T, F>(k: &FoldKernel<F, T>, acc: &mut [T], xs: &[T])
where
    T: Copy + Arith,
    F: Folder<T>,
{
    debug_assert_eq!(acc.len(), xs.len());
    for i in 0..acc.len() {
        let mut a = acc[i];
        k.apply(&mut a, xs[i]);
        acc[i] = a;
    }
}

/// Transformed variant of [`combine_slices`].
#[inline]
pub(crate) fn combine_map_slices<T, F, U>(k: &MapFoldKernel<F, U, T>, acc: &mut [T], xs: &[T])
where
    T: Copy + Arith,
    F: Folder<T>,
    U: UnaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    for i in 0..acc.len() {
        let mut a = acc[i];
        k.apply(&mut a, xs[i]);
        acc[i] = a;
    }
}

/// Binary-transformed variant of [`combine_slices`].
#[inline]
pub(crate) fn combine_zip_slices<T, F, B>(
    k: &ZipFoldKernel<F, B, T>,
    acc: &mut [T],
    xs: &[T],
    ys: &[T],
) where
    T: Copy + Arith,
    F: Folder<T>,
    B: BinaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    debug_assert_eq!(acc.len(), ys.len());
    for i in 0..acc.len() {
        let mut a = acc[i];
        k.apply(&mut a, xs[i], ys[i]);
        acc[i] = a;
    }
}

/// `out[i] = f(src[i])` (scalar fallback).
#[inline]
pub(crate) fn map_slice<T, U>(f: U, src: &[T], out: &mut [T])
where
    T: Copy + Arith,
    U: UnaryFun,
{
    debug_assert_eq!(src.len(), out.len());
    for i in 0..src.len() {
        out[i] = f.apply(src[i]);
    }
}

/// `out[i] = f(a[i], b[i])` (scalar fallback).
#[inline]
pub(crate) fn map_zip_slice<T, B>(f: B, a: &[T], b: &[T], out: &mut [T])
where
    T: Copy + Arith,
    B: BinaryFun,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = f.apply(a[i], b[i]);
    }
}

/// In-place scale: `a[i] *= scalar`.
#[inline]
pub(crate) fn scale_assign_slices<T: Scalar>(a: &mut [T], scalar: T) {
    for i in 0..a.len() {
        a[i] = a[i] * scalar;
    }
}
