use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::DynMatrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for DynMatrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> AddAssign for DynMatrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for DynMatrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> SubAssign for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = T::zero() - *x;
        }
        self
    }
}

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        self.clone().neg()
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
        self
    }
}

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for DynMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for DynMatrix<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
        self
    }
}

impl<T: Scalar> Div<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn div(self, rhs: T) -> DynMatrix<T> {
        self.clone() / rhs
    }
}

impl<T: Scalar> DivAssign<T> for DynMatrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_dyn {
    ($($t:ty),*) => {$(
        impl Mul<DynMatrix<$t>> for $t {
            type Output = DynMatrix<$t>;
            fn mul(self, rhs: DynMatrix<$t>) -> DynMatrix<$t> {
                rhs * self
            }
        }

        impl Mul<&DynMatrix<$t>> for $t {
            type Output = DynMatrix<$t>;
            fn mul(self, rhs: &DynMatrix<$t>) -> DynMatrix<$t> {
                rhs.clone() * self
            }
        }
    )*};
}

impl_scalar_mul_dyn!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> DynMatrix<f64> {
        DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0])
    }

    fn b() -> DynMatrix<f64> {
        DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0])
    }

    #[test]
    fn add_sub() {
        let s = a() + b();
        assert_eq!(s[(0, 0)], 6.0);
        assert_eq!(s[(1, 1)], 12.0);

        let d = b() - a();
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let mut s = a();
        s += b();
        assert_eq!(s, a() + b());

        let mut d = b();
        d -= a();
        assert_eq!(d, b() - a());
    }

    #[test]
    fn reference_variants() {
        assert_eq!(&a() + &b(), a() + b());
        assert_eq!(a() + &b(), a() + b());
        assert_eq!(&a() - b(), a() - b());
    }

    #[test]
    fn neg() {
        let n = -a();
        assert_eq!(n[(0, 0)], -1.0);
        assert_eq!(n[(1, 1)], -4.0);
        assert_eq!(-&a(), n);
    }

    #[test]
    fn scalar_mul_div() {
        let m = a() * 2.0;
        assert_eq!(m[(1, 1)], 8.0);
        assert_eq!(2.0 * a(), m);
        assert_eq!(m.clone() / 2.0, a());

        let mut ip = a();
        ip *= 4.0;
        ip /= 2.0;
        assert_eq!(ip, a() * 2.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch_panics() {
        let wide = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = a() + wide;
    }

    #[test]
    fn integer_ops() {
        let m = DynMatrix::from_rows(2, 2, &[1i32, 2, 3, 4]);
        let s = m.clone() + m.clone();
        assert_eq!(s[(1, 1)], 8);
        assert_eq!((3 * m)[(0, 1)], 6);
    }
}
