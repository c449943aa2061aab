#![cfg(feature = "complex")]

//! Element-wise arithmetic over complex matrices. Reductions are not
//! exercised here: they require ordered floats.

use matfold::{Complex, DynMatrix};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

#[test]
fn complex_add_sub() {
    let a = DynMatrix::from_slice(2, 1, &[c(1.0, 2.0), c(3.0, -1.0)]);
    let b = DynMatrix::from_slice(2, 1, &[c(0.5, 0.5), c(-3.0, 1.0)]);

    let s = &a + &b;
    assert_eq!(s[(0, 0)], c(1.5, 2.5));
    assert_eq!(s[(1, 0)], c(0.0, 0.0));

    let d = &a - &b;
    assert_eq!(d[(0, 0)], c(0.5, 1.5));
}

#[test]
fn complex_scalar_mul() {
    let a = DynMatrix::from_slice(1, 2, &[c(1.0, 1.0), c(2.0, 0.0)]);
    let m = a * c(0.0, 1.0);
    assert_eq!(m[(0, 0)], c(-1.0, 1.0));
    assert_eq!(m[(0, 1)], c(0.0, 2.0));
}

#[test]
fn complex_in_place_matches_binary() {
    let a = DynMatrix::from_slice(2, 2, &[c(1.0, 0.0), c(0.0, 1.0), c(2.0, 2.0), c(-1.0, 3.0)]);
    let b = DynMatrix::from_slice(2, 2, &[c(4.0, 1.0), c(1.0, 1.0), c(0.0, -2.0), c(5.0, 0.0)]);

    let mut ip = a.clone();
    ip += &b;
    assert_eq!(ip, &a + &b);
}

#[test]
fn complex_element_mul() {
    let a = DynMatrix::from_slice(1, 2, &[c(1.0, 1.0), c(0.0, 2.0)]);
    let b = DynMatrix::from_slice(1, 2, &[c(1.0, -1.0), c(3.0, 0.0)]);
    let p = a.element_mul(&b);
    assert_eq!(p[(0, 0)], c(2.0, 0.0));
    assert_eq!(p[(0, 1)], c(0.0, 6.0));
}
