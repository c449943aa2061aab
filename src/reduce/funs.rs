//! Element transforms and the fold kernels that fuse them into a
//! reduction.
//!
//! A transform is a pure function applied lane-wise before folding; like
//! [`Folder::fold`], it is generic over [`Arith`] so one definition
//! serves scalars and packs. The kernels adapt a folder — optionally
//! composed with a transform — into the combining operation consumed by
//! the linear traversal loops, fusing the map stage into the reduction
//! pass instead of materializing a transformed matrix.

use core::marker::PhantomData;

use super::folder::Folder;
use crate::simd::Arith;

/// A pure one-argument element transform.
pub trait UnaryFun: Copy {
    fn apply<V: Arith>(&self, x: V) -> V;
}

/// A pure two-argument element transform.
pub trait BinaryFun: Copy {
    fn apply<V: Arith>(&self, x: V, y: V) -> V;
}

/// Pass-through: `x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentFun;

impl UnaryFun for IdentFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V) -> V {
        x
    }
}

/// Absolute value: `|x|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsFun;

impl UnaryFun for AbsFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V) -> V {
        x.abs()
    }
}

/// Square: `x · x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SqrFun;

impl UnaryFun for SqrFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V) -> V {
        x.mul(x)
    }
}

/// Difference: `x − y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiffFun;

impl BinaryFun for DiffFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V, y: V) -> V {
        x.sub(y)
    }
}

/// Absolute difference: `|x − y|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsDiffFun;

impl BinaryFun for AbsDiffFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V, y: V) -> V {
        x.sub(y).abs()
    }
}

/// Product: `x · y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MulFun;

impl BinaryFun for MulFun {
    #[inline]
    fn apply<V: Arith>(&self, x: V, y: V) -> V {
        x.mul(y)
    }
}

// ── Fold kernels ────────────────────────────────────────────────────

/// Direct fold: `a ← fold(a, x)`.
pub(crate) struct FoldKernel<F, T> {
    pub(crate) folder: F,
    _elem: PhantomData<T>,
}

impl<T: Copy, F: Folder<T>> FoldKernel<F, T> {
    #[inline]
    pub(crate) fn new(folder: F) -> Self {
        Self {
            folder,
            _elem: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn apply<V: Arith>(&self, a: &mut V, x: V) {
        self.folder.fold(a, x);
    }
}

/// Transform-fused fold: `a ← fold(a, f(x))`.
pub(crate) struct MapFoldKernel<F, U, T> {
    pub(crate) folder: F,
    f: U,
    _elem: PhantomData<T>,
}

impl<T: Copy, F: Folder<T>, U: UnaryFun> MapFoldKernel<F, U, T> {
    #[inline]
    pub(crate) fn new(folder: F, f: U) -> Self {
        Self {
            folder,
            f,
            _elem: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn apply<V: Arith>(&self, a: &mut V, x: V) {
        self.folder.fold(a, self.f.apply(x));
    }
}

/// Binary-transform-fused fold: `a ← fold(a, f(x, y))`.
pub(crate) struct ZipFoldKernel<F, B, T> {
    pub(crate) folder: F,
    f: B,
    _elem: PhantomData<T>,
}

impl<T: Copy, F: Folder<T>, B: BinaryFun> ZipFoldKernel<F, B, T> {
    #[inline]
    pub(crate) fn new(folder: F, f: B) -> Self {
        Self {
            folder,
            f,
            _elem: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn apply<V: Arith>(&self, a: &mut V, x: V, y: V) {
        self.folder.fold(a, self.f.apply(x, y));
    }
}
