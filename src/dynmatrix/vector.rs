use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::matrix::vector::Vector;
use crate::reduce::{MulFun, Sum};
use crate::simd::{self, Arith};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Enforces the single-row constraint and provides single-index access
/// `v[i]`. Reduction drivers hand out `DynVector`s for both orientations;
/// the orientation is a property of the producing reduction, not the
/// vector itself.
///
/// # Examples
///
/// ```
/// use matfold::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.dot(&v), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: DynMatrix::from_slice(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }

    /// Create a vector filled with a value.
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            inner: DynMatrix::fill(1, n, value),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

impl<T: Scalar + Arith> DynVector<T> {
    /// Dot product of two vectors (a product-fused sum fold).
    ///
    /// ```
    /// use matfold::DynVector;
    /// let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        simd::fold_zip_dispatch(Sum, MulFun, self.as_slice(), rhs.as_slice())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynVector<T> {
    #[inline]
    fn nrows(&self) -> usize {
        1
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        self.inner.get(row, col)
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        self.inner.col_as_slice(col, row_start)
    }
}

impl<T> MatrixMut<T> for DynVector<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.inner.get_mut(row, col)
    }

    #[inline]
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T] {
        self.inner.col_as_mut_slice(col, row_start)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> From<Vector<T, N>> for DynVector<T> {
    /// Convert a fixed-size `Vector` into a `DynVector`.
    ///
    /// ```
    /// use matfold::{Vector, DynVector};
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// let dv: DynVector<f64> = v.into();
    /// assert_eq!(dv.len(), 3);
    /// assert_eq!(dv[0], 1.0);
    /// ```
    fn from(v: Vector<T, N>) -> Self {
        Self {
            inner: DynMatrix::from(v),
        }
    }
}

impl<T: Scalar> From<DynVector<T>> for DynMatrix<T> {
    fn from(v: DynVector<T>) -> Self {
        v.inner
    }
}

impl<T: Scalar> From<&DynVector<T>> for DynMatrix<T> {
    fn from(v: &DynVector<T>) -> Self {
        v.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_access() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[2], 3.0);

        let z = DynVector::zeros(4, 0.0_f64);
        assert_eq!(z.len(), 4);
        assert_eq!(z[3], 0.0);

        let f = DynVector::fill(2, 7.0_f64);
        assert_eq!(f.as_slice(), &[7.0, 7.0]);

        assert!(DynVector::from_vec(Vec::<f64>::new()).is_empty());
    }

    #[test]
    fn index_mut() {
        let mut v = DynVector::zeros(3, 0.0_f64);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    fn dot_boundary_lengths() {
        for n in [0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17] {
            let a = DynVector::from_vec((0..n).map(|i| (i + 1) as f64).collect());
            let b = DynVector::from_vec((0..n).map(|i| (i + 1) as f64 * 0.5).collect());
            let expected: f64 = (0..n).map(|i| (i + 1) as f64 * (i + 1) as f64 * 0.5).sum();
            assert!((a.dot(&b) - expected).abs() < 1e-10, "n={n}");
        }
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn dot_length_mismatch_panics() {
        let a = DynVector::from_slice(&[1.0, 2.0]);
        let b = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let _ = a.dot(&b);
    }

    #[test]
    fn from_fixed_vector() {
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        let dv: DynVector<f64> = v.into();
        assert_eq!(dv.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn into_dynmatrix() {
        let v = DynVector::from_slice(&[1.0, 2.0]);
        let m: DynMatrix<f64> = (&v).into();
        assert_eq!(m.nrows(), 1);
        assert_eq!(m.ncols(), 2);
    }
}
