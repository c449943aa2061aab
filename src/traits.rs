use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::shape::Shape;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
///
/// The `'static` bound enables the `TypeId`-based kernel dispatch in
/// the SIMD layer, which is resolved at monomorphization time.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + 'static {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + 'static> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need IEEE-754 special values or ordered
/// comparisons (mean, maximum, minimum, `abs`).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// This trait allows algorithms to operate generically over both
/// fixed-size `Matrix` and runtime-sized `DynMatrix` types.
///
/// `col_as_slice` is the linear-access guarantee: every column must be
/// exposable as one contiguous slice. A strided or sparse view cannot
/// implement this trait, so reductions written against it are only
/// callable on linearly-traversable operands — enforced at compile time.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T];

    /// Extents as a [`Shape`].
    #[inline]
    fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    /// Total element count.
    #[inline]
    fn nelems(&self) -> usize {
        self.shape().nelems()
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element and column access, enabling
/// in-place algorithms to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T];
}
