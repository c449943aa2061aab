use alloc::vec::Vec;
use core::fmt;

use crate::reduce;
use crate::simd::Arith;
use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar + Arith> DynMatrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use matfold::DynMatrix;
    /// let m = DynMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        reduce::sum(self)
    }

    /// Sum of absolute values.
    pub fn abs_sum(&self) -> T {
        reduce::abs_sum(self)
    }

    /// Sum of squares.
    pub fn sq_sum(&self) -> T {
        reduce::sq_sum(self)
    }

    /// Per-column sums as a [`DynVector`] of length `ncols`.
    ///
    /// ```
    /// use matfold::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let s = m.colwise_sum();
    /// assert_eq!(s[0], 5.0);
    /// assert_eq!(s[2], 9.0);
    /// ```
    pub fn colwise_sum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.ncols, T::zero());
        reduce::colwise_sum(self, out.as_mut_slice());
        out
    }

    /// Per-row sums as a [`DynVector`] of length `nrows`.
    pub fn rowwise_sum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.nrows, T::zero());
        reduce::rowwise_sum(self, out.as_mut_slice());
        out
    }
}

impl<T: FloatScalar + Arith> DynMatrix<T> {
    /// Mean of all elements; NaN for an empty matrix.
    pub fn mean(&self) -> T {
        reduce::mean(self)
    }

    /// Maximum element; −∞ for an empty matrix.
    pub fn maximum(&self) -> T {
        reduce::maximum(self)
    }

    /// Minimum element; +∞ for an empty matrix.
    pub fn minimum(&self) -> T {
        reduce::minimum(self)
    }

    /// Per-column means; NaN per slot when the matrix has zero rows.
    pub fn colwise_mean(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.ncols, T::zero());
        reduce::colwise_mean(self, out.as_mut_slice());
        out
    }

    /// Per-column maxima.
    pub fn colwise_maximum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.ncols, T::zero());
        reduce::colwise_maximum(self, out.as_mut_slice());
        out
    }

    /// Per-column minima.
    pub fn colwise_minimum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.ncols, T::zero());
        reduce::colwise_minimum(self, out.as_mut_slice());
        out
    }

    /// Per-row means; NaN per slot when the matrix has zero columns.
    pub fn rowwise_mean(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.nrows, T::zero());
        reduce::rowwise_mean(self, out.as_mut_slice());
        out
    }

    /// Per-row maxima.
    pub fn rowwise_maximum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.nrows, T::zero());
        reduce::rowwise_maximum(self, out.as_mut_slice());
        out
    }

    /// Per-row minima.
    pub fn rowwise_minimum(&self) -> DynVector<T> {
        let mut out = DynVector::zeros(self.nrows, T::zero());
        reduce::rowwise_minimum(self, out.as_mut_slice());
        out
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use matfold::DynMatrix;
    /// let m = DynMatrix::from_slice(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Element-wise operations ─────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }

    /// Element-wise maximum: `c[i][j] = max(a[i][j], b[i][j])`.
    pub fn element_max(&self, rhs: &Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch",
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| if b > a { b } else { a })
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise minimum: `c[i][j] = min(a[i][j], b[i][j])`.
    pub fn element_min(&self, rhs: &Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch",
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| if b < a { b } else { a })
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// Element-wise product: `c[i][j] = a[i][j] * b[i][j]`.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch",
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a * b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise quotient: `c[i][j] = a[i][j] / b[i][j]`.
    pub fn element_div(&self, rhs: &Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch",
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a / b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.ncols {
                let ja = j * self.nrows + a;
                let jb = j * self.nrows + b;
                self.data.swap(ja, jb);
            }
        }
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            for i in 0..self.nrows {
                let ia = a * self.nrows + i;
                let ib = b * self.nrows + i;
                self.data.swap(ia, ib);
            }
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Extract row `i` as a `DynVector`.
    pub fn row(&self, i: usize) -> DynVector<T> {
        let mut data = Vec::with_capacity(self.ncols);
        for j in 0..self.ncols {
            data.push(self[(i, j)]);
        }
        DynVector::from_vec(data)
    }

    /// Set row `i` from a `DynVector`.
    pub fn set_row(&mut self, i: usize, v: &DynVector<T>) {
        assert_eq!(v.len(), self.ncols, "vector length mismatch");
        for j in 0..self.ncols {
            self[(i, j)] = v[j];
        }
    }

    /// Extract column `j` as a `DynVector`.
    pub fn col(&self, j: usize) -> DynVector<T> {
        DynVector::from_slice(self.col_as_slice_inner(j))
    }

    /// Set column `j` from a `DynVector`.
    pub fn set_col(&mut self, j: usize, v: &DynVector<T>) {
        assert_eq!(v.len(), self.nrows, "vector length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v[i];
        }
    }

    #[inline]
    fn col_as_slice_inner(&self, j: usize) -> &[T] {
        let start = j * self.nrows;
        &self.data[start..start + self.nrows]
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write as _;

        struct WriteCounting {
            count: usize,
        }

        impl fmt::Write for WriteCounting {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.count += s.len();
                Ok(())
            }
        }

        // Measure column widths for alignment
        let mut widths: Vec<usize> = alloc::vec![0; self.ncols];
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                let mut wc = WriteCounting { count: 0 };
                let _ = write!(wc, "{}", self[(i, j)]);
                if wc.count > widths[j] {
                    widths[j] = wc.count;
                }
            }
        }

        for i in 0..self.nrows {
            write!(f, "│")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
