//! # matfold
//!
//! SIMD-accelerated dense-matrix reductions and element-wise arithmetic,
//! no-std compatible. The core of the crate is a fold engine: sum, mean,
//! maximum, and minimum reductions — full, per-column, and per-row, with
//! optional fused element transforms — dispatched at compile time between
//! a scalar path and the widest vector path the build enables.
//!
//! ## Quick start
//!
//! ```
//! use matfold::DynMatrix;
//!
//! // 4×3, elements 1..=12 in column-major order
//! let m = DynMatrix::from_slice(4, 3, &(1..=12).map(f64::from).collect::<Vec<_>>());
//!
//! assert_eq!(m.colwise_sum().as_slice(), &[10.0, 26.0, 42.0]);
//! assert_eq!(m.rowwise_sum().as_slice(), &[15.0, 18.0, 21.0, 24.0]);
//! assert_eq!(m.colwise_mean().as_slice(), &[2.5, 6.5, 10.5]);
//! assert_eq!(m.maximum(), 12.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic
//!   dimensions, stack-allocated column-major storage, element-wise
//!   arithmetic, and reduction methods. [`Vector<T, N>`] and
//!   [`ColumnVector<T, N>`] are 1-row / 1-column aliases, so the
//!   orientation of a reduction result is a compile-time fact.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime
//!   dimensions (requires the `alloc` feature, included with `std`).
//!   Column-major `Vec<T>` storage. Implements [`MatrixRef`] /
//!   [`MatrixMut`], so every reduction driver works with it directly.
//!
//! - [`reduce`] — The reduction engine: [`reduce::Folder`] policies
//!   (sum/maximum/minimum with defined empty values), fused transforms,
//!   and full/column-wise/row-wise drivers with degenerate-shape
//!   handling (empty reductions yield 0 / NaN / −∞ / +∞, never errors).
//!
//! - [`simd`] — The vector-pack abstraction the engine runs on: per-ISA
//!   fixed-width register types behind one trait, a shared scalar/pack
//!   lane-arithmetic trait, and `TypeId`-at-monomorphization dispatch.
//!   `f32`/`f64` data takes the SIMD path; all other element types use
//!   the identical logic in scalar form.
//!
//! - [`traits`] — Element trait hierarchy ([`Scalar`], [`FloatScalar`])
//!   and the [`MatrixRef`] / [`MatrixMut`] access traits whose
//!   contiguous-column accessors are the engine's linear-access
//!   precondition.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `DynMatrix` / `DynVector` (heap-allocated, runtime-sized) |
//! | `libm`    | no       | Pure-Rust software float fallback |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` (element-wise arithmetic only; reductions need ordered floats) |
//! | `all`     | no       | `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod matrix;
pub mod reduce;
pub mod shape;
pub mod simd;
pub mod traits;

pub use matrix::aliases::{
    ColumnVector1, ColumnVector2, ColumnVector3, ColumnVector4, ColumnVector5, ColumnVector6,
    Matrix1, Matrix2, Matrix3, Matrix4, Matrix5, Matrix6, Vector1, Vector2, Vector3, Vector4,
    Vector5, Vector6,
};
pub use matrix::vector::{ColumnVector, Vector};
pub use matrix::Matrix;
pub use shape::Shape;
pub use simd::Arith;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "alloc")]
pub use dynmatrix::{
    DynMatrix, DynMatrixf32, DynMatrixf64, DynMatrixi32, DynMatrixi64, DynMatrixu32, DynMatrixu64,
    DynVector, DynVectorf32, DynVectorf64, DynVectori32, DynVectori64, DynVectoru32, DynVectoru64,
};
#[cfg(all(feature = "alloc", feature = "complex"))]
pub use dynmatrix::{DynMatrixz32, DynMatrixz64, DynVectorz32, DynVectorz64};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
