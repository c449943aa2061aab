//! Pre-defined type aliases for common matrix and vector sizes.

use crate::matrix::vector::{ColumnVector, Vector};
use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;

// ── Vector aliases ─────────────────────────────────────────────────

/// A 1-element row vector.
pub type Vector1<T> = Vector<T, 1>;
/// A 2-element row vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element row vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element row vector.
pub type Vector4<T> = Vector<T, 4>;
/// A 5-element row vector.
pub type Vector5<T> = Vector<T, 5>;
/// A 6-element row vector.
pub type Vector6<T> = Vector<T, 6>;

/// A 1-element column vector.
pub type ColumnVector1<T> = ColumnVector<T, 1>;
/// A 2-element column vector.
pub type ColumnVector2<T> = ColumnVector<T, 2>;
/// A 3-element column vector.
pub type ColumnVector3<T> = ColumnVector<T, 3>;
/// A 4-element column vector.
pub type ColumnVector4<T> = ColumnVector<T, 4>;
/// A 5-element column vector.
pub type ColumnVector5<T> = ColumnVector<T, 5>;
/// A 6-element column vector.
pub type ColumnVector6<T> = ColumnVector<T, 6>;
