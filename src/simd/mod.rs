//! SIMD abstraction layer with compile-time architecture dispatch.
//!
//! This module provides the vector-pack abstraction the reduction engine
//! runs on: a fixed-width register type per (element type, instruction-set
//! kind), a lane-arithmetic trait shared by scalars and packs, and the
//! dispatch functions that pick an execution strategy per element type.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: for `f32`/`f64`, the
//! compiler selects pack kernels and dead-code-eliminates the fallback.
//! For all other element types (integers), the scalar fallback is used.
//!
//! On x86_64, the widest available instruction set is selected at compile
//! time: AVX > SSE2. Enable via `-C target-cpu=native` or
//! `-C target-feature=+avx` etc.
//!
//! A reduction folder can opt out of vectorization entirely through
//! [`crate::reduce::Folder::VECTORIZABLE`]; the dispatchers honour the
//! flag before considering the element type.
//!
//! ## Architecture support
//!
//! | Arch      | ISA     | f64 lanes | f32 lanes |
//! |-----------|---------|-----------|-----------|
//! | `aarch64` | NEON    | 2         | 4         |
//! | `x86_64`  | SSE2    | 2         | 4         |
//! | `x86_64`  | AVX     | 4         | 8         |
//! | other     | scalar  | —         | —         |

pub(crate) mod linear;
pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;
#[cfg(target_arch = "aarch64")]
pub(crate) mod f64_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod f64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod f32_avx;
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod f64_avx;

use core::any::TypeId;

use crate::reduce::folder::Folder;
use crate::reduce::funs::{BinaryFun, FoldKernel, MapFoldKernel, UnaryFun, ZipFoldKernel};
use crate::traits::Scalar;

/// Lane-level arithmetic shared by scalar elements and SIMD packs.
///
/// Fold and transform logic is written once against this trait and
/// monomorphized twice — for a scalar lane and for a full pack — which is
/// what lets the reduction drivers run the identical combine logic in the
/// vector body and the scalar tail of a traversal.
pub trait Arith: Copy {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    /// `self > rhs ? self : rhs`, in SIMD operand order.
    fn max(self, rhs: Self) -> Self;
    /// `self < rhs ? self : rhs`, in SIMD operand order.
    fn min(self, rhs: Self) -> Self;
    fn abs(self) -> Self;
}

// The comparison form mirrors the hardware max/min operand convention
// (second operand wins on unordered compare), so a scalar tail produces
// the same bit pattern as the pack body for the same input order.
macro_rules! impl_arith_float {
    ($($t:ty),*) => {$(
        impl Arith for $t {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }
            #[inline]
            fn max(self, rhs: Self) -> Self {
                if self > rhs { self } else { rhs }
            }
            #[inline]
            fn min(self, rhs: Self) -> Self {
                if self < rhs { self } else { rhs }
            }
            #[inline]
            fn abs(self) -> Self {
                num_traits::Float::abs(self)
            }
        }
    )*};
}

impl_arith_float!(f32, f64);

macro_rules! impl_arith_signed {
    ($($t:ty),*) => {$(
        impl Arith for $t {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }
            #[inline]
            fn max(self, rhs: Self) -> Self {
                if self > rhs { self } else { rhs }
            }
            #[inline]
            fn min(self, rhs: Self) -> Self {
                if self < rhs { self } else { rhs }
            }
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_arith_signed!(i8, i16, i32, i64, i128);

macro_rules! impl_arith_unsigned {
    ($($t:ty),*) => {$(
        impl Arith for $t {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }
            #[inline]
            fn max(self, rhs: Self) -> Self {
                if self > rhs { self } else { rhs }
            }
            #[inline]
            fn min(self, rhs: Self) -> Self {
                if self < rhs { self } else { rhs }
            }
            #[inline]
            fn abs(self) -> Self {
                self
            }
        }
    )*};
}

impl_arith_unsigned!(u8, u16, u32, u64, u128);

/// A fixed-width SIMD register holding `WIDTH` lanes of `Elem`.
///
/// Packs are value types (copy semantics). Width is fixed per
/// (element type, instruction-set kind) pair and known at compile time.
///
/// Lane indices passed to `extract`/`broadcast` and the `count` passed to
/// the partial load/store forms are preconditions checked with
/// `debug_assert!`; out-of-range values are never a recoverable error.
pub trait SimdPack: Arith + Sized {
    type Elem: Copy;

    /// Number of lanes, fixed at compile time.
    const WIDTH: usize;

    /// All lanes zero.
    fn zeros() -> Self;
    /// All lanes one.
    fn ones() -> Self;
    /// All lanes +∞.
    fn inf() -> Self;
    /// All lanes −∞.
    fn neg_inf() -> Self;
    /// All lanes quiet NaN.
    fn nan() -> Self;

    /// Broadcast one scalar to every lane.
    fn splat(v: Self::Elem) -> Self;
    /// Per-lane values from the first `WIDTH` elements of `lanes`.
    fn from_lanes(lanes: &[Self::Elem]) -> Self;

    /// Re-assign every lane from a scalar. Same semantics as `splat`.
    fn set(&mut self, v: Self::Elem);
    /// Re-assign per-lane values. Same semantics as `from_lanes`.
    fn set_lanes(&mut self, lanes: &[Self::Elem]);

    /// Load `WIDTH` contiguous elements from an address aligned to the
    /// pack's natural alignment.
    ///
    /// # Safety
    /// `ptr` must be valid for `WIDTH` reads and suitably aligned.
    unsafe fn load_a(ptr: *const Self::Elem) -> Self;

    /// Load `WIDTH` contiguous elements from an arbitrary address.
    ///
    /// # Safety
    /// `ptr` must be valid for `WIDTH` reads.
    unsafe fn load_u(ptr: *const Self::Elem) -> Self;

    /// Load the first `count` lanes (`0 < count <= WIDTH`); remaining
    /// lanes are zero. `count == WIDTH` behaves exactly like `load_u`.
    ///
    /// # Safety
    /// `ptr` must be valid for `count` reads.
    unsafe fn load_part(count: usize, ptr: *const Self::Elem) -> Self;

    /// Store `WIDTH` contiguous elements to an aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for `WIDTH` writes and suitably aligned.
    unsafe fn store_a(self, ptr: *mut Self::Elem);

    /// Store `WIDTH` contiguous elements to an arbitrary address.
    ///
    /// # Safety
    /// `ptr` must be valid for `WIDTH` writes.
    unsafe fn store_u(self, ptr: *mut Self::Elem);

    /// Store only the first `count` lanes (`0 < count <= WIDTH`); memory
    /// beyond `count` elements is left untouched. `count == WIDTH`
    /// behaves exactly like `store_u`.
    ///
    /// # Safety
    /// `ptr` must be valid for `count` writes.
    unsafe fn store_part(self, count: usize, ptr: *mut Self::Elem);

    /// Lane 0.
    fn to_scalar(self) -> Self::Elem;
    /// Lane `lane` (`lane < WIDTH`).
    fn extract(self, lane: usize) -> Self::Elem;
    /// Full-width pack with every lane set to lane `lane` of `self`.
    fn broadcast(self, lane: usize) -> Self;

    /// Horizontal sum of all lanes.
    fn hsum(self) -> Self::Elem;
    /// Horizontal maximum of all lanes.
    fn hmax(self) -> Self::Elem;
    /// Horizontal minimum of all lanes.
    fn hmin(self) -> Self::Elem;
}

// ── Reduction dispatch ──────────────────────────────────────────────
//
// Each dispatcher resolves one traversal primitive to either a pack
// kernel (f32/f64 on a SIMD-capable target, folder permitting) or the
// generic scalar loop. The TypeId comparisons fold away entirely during
// monomorphization.

/// Fold a contiguous slice down to one scalar.
#[inline]
pub(crate) fn fold_slice_dispatch<T, F>(folder: F, xs: &[T]) -> T
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
{
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let r = linear::vecfold::<f64_neon::F64x2, F>(&FoldKernel::new(folder), xs);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let r = linear::vecfold::<f32_neon::F32x4, F>(&FoldKernel::new(folder), xs);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold::<f64_avx::F64x4, F>(&FoldKernel::new(folder), xs);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold::<f64_sse2::F64x2, F>(&FoldKernel::new(folder), xs);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold::<f32_avx::F32x8, F>(&FoldKernel::new(folder), xs);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold::<f32_sse2::F32x4, F>(&FoldKernel::new(folder), xs);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
    }
    scalar::fold_slice(&FoldKernel::new(folder), xs)
}

/// Fold a transformed slice down to one scalar.
#[inline]
pub(crate) fn fold_map_dispatch<T, F, U>(folder: F, f: U, xs: &[T]) -> T
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    U: UnaryFun,
{
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let r = linear::vecfold_map::<f64_neon::F64x2, F, U>(&MapFoldKernel::new(folder, f), xs);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let r = linear::vecfold_map::<f32_neon::F32x4, F, U>(&MapFoldKernel::new(folder, f), xs);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold_map::<f64_avx::F64x4, F, U>(&MapFoldKernel::new(folder, f), xs);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold_map::<f64_sse2::F64x2, F, U>(&MapFoldKernel::new(folder, f), xs);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold_map::<f32_avx::F32x8, F, U>(&MapFoldKernel::new(folder, f), xs);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold_map::<f32_sse2::F32x4, F, U>(&MapFoldKernel::new(folder, f), xs);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
    }
    scalar::fold_map_slice(&MapFoldKernel::new(folder, f), xs)
}

/// Fold a binary transform of two co-indexed slices down to one scalar.
#[inline]
pub(crate) fn fold_zip_dispatch<T, F, B>(folder: F, f: B, xs: &[T], ys: &[T]) -> T
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    B: BinaryFun,
{
    debug_assert_eq!(xs.len(), ys.len());
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f64]) };
                let r = linear::vecfold_zip::<f64_neon::F64x2, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f32]) };
                let r = linear::vecfold_zip::<f32_neon::F32x4, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold_zip::<f64_avx::F64x4, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold_zip::<f64_sse2::F64x2, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                return unsafe { *(&r as *const f64 as *const T) };
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                let r = linear::vecfold_zip::<f32_avx::F32x8, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                #[cfg(not(target_feature = "avx"))]
                let r = linear::vecfold_zip::<f32_sse2::F32x4, F, B>(&ZipFoldKernel::new(folder, f), xs, ys);
                return unsafe { *(&r as *const f32 as *const T) };
            }
        }
    }
    scalar::fold_zip_slice(&ZipFoldKernel::new(folder, f), xs, ys)
}

/// Fold each element of `xs` into the matching slot of `acc`.
#[inline]
pub(crate) fn combine_dispatch<T, F>(folder: F, acc: &mut [T], xs: &[T])
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
{
    debug_assert_eq!(acc.len(), xs.len());
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                linear::veccombine::<f64_neon::F64x2, F>(&FoldKernel::new(folder), acc, xs);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                linear::veccombine::<f32_neon::F32x4, F>(&FoldKernel::new(folder), acc, xs);
                return;
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine::<f64_avx::F64x4, F>(&FoldKernel::new(folder), acc, xs);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine::<f64_sse2::F64x2, F>(&FoldKernel::new(folder), acc, xs);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine::<f32_avx::F32x8, F>(&FoldKernel::new(folder), acc, xs);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine::<f32_sse2::F32x4, F>(&FoldKernel::new(folder), acc, xs);
                return;
            }
        }
    }
    scalar::combine_slices(&FoldKernel::new(folder), acc, xs)
}

/// Fold each transformed element of `xs` into the matching slot of `acc`.
#[inline]
pub(crate) fn combine_map_dispatch<T, F, U>(folder: F, f: U, acc: &mut [T], xs: &[T])
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    U: UnaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                linear::veccombine_map::<f64_neon::F64x2, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                linear::veccombine_map::<f32_neon::F32x4, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                return;
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine_map::<f64_avx::F64x4, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine_map::<f64_sse2::F64x2, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine_map::<f32_avx::F32x8, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine_map::<f32_sse2::F32x4, F, U>(&MapFoldKernel::new(folder, f), acc, xs);
                return;
            }
        }
    }
    scalar::combine_map_slices(&MapFoldKernel::new(folder, f), acc, xs)
}

/// Fold each binary-transformed pair of `xs`/`ys` into the matching slot
/// of `acc`.
#[inline]
pub(crate) fn combine_zip_dispatch<T, F, B>(folder: F, f: B, acc: &mut [T], xs: &[T], ys: &[T])
where
    T: Scalar + Arith,
    F: Folder<T> + Folder<f64> + Folder<f32>,
    B: BinaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    debug_assert_eq!(acc.len(), ys.len());
    if <F as Folder<T>>::VECTORIZABLE {
        #[cfg(target_arch = "aarch64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f64]) };
                linear::veccombine_zip::<f64_neon::F64x2, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f32]) };
                linear::veccombine_zip::<f32_neon::F32x4, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                return;
            }
        }
        #[cfg(target_arch = "x86_64")]
        {
            if TypeId::of::<T>() == TypeId::of::<f64>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f64]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f64]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f64]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine_zip::<f64_avx::F64x4, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine_zip::<f64_sse2::F64x2, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                return;
            }
            if TypeId::of::<T>() == TypeId::of::<f32>() {
                let acc = unsafe { &mut *(acc as *mut [T] as *mut [f32]) };
                let xs = unsafe { &*(xs as *const [T] as *const [f32]) };
                let ys = unsafe { &*(ys as *const [T] as *const [f32]) };
                #[cfg(target_feature = "avx")]
                linear::veccombine_zip::<f32_avx::F32x8, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                #[cfg(not(target_feature = "avx"))]
                linear::veccombine_zip::<f32_sse2::F32x4, F, B>(&ZipFoldKernel::new(folder, f), acc, xs, ys);
                return;
            }
        }
    }
    scalar::combine_zip_slices(&ZipFoldKernel::new(folder, f), acc, xs, ys)
}

/// `out[i] = f(src[i])`.
#[inline]
pub(crate) fn map_dispatch<T, U>(f: U, src: &[T], out: &mut [T])
where
    T: Scalar + Arith,
    U: UnaryFun,
{
    debug_assert_eq!(src.len(), out.len());
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let src = unsafe { &*(src as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            linear::vecmap::<f64_neon::F64x2, U>(f, src, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let src = unsafe { &*(src as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            linear::vecmap::<f32_neon::F32x4, U>(f, src, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let src = unsafe { &*(src as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            #[cfg(target_feature = "avx")]
            linear::vecmap::<f64_avx::F64x4, U>(f, src, out);
            #[cfg(not(target_feature = "avx"))]
            linear::vecmap::<f64_sse2::F64x2, U>(f, src, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let src = unsafe { &*(src as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            #[cfg(target_feature = "avx")]
            linear::vecmap::<f32_avx::F32x8, U>(f, src, out);
            #[cfg(not(target_feature = "avx"))]
            linear::vecmap::<f32_sse2::F32x4, U>(f, src, out);
            return;
        }
    }
    scalar::map_slice(f, src, out)
}

/// `out[i] = f(a[i], b[i])`.
#[inline]
pub(crate) fn map_zip_dispatch<T, B>(f: B, a: &[T], b: &[T], out: &mut [T])
where
    T: Scalar + Arith,
    B: BinaryFun,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            linear::vecmap_zip::<f64_neon::F64x2, B>(f, a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            linear::vecmap_zip::<f32_neon::F32x4, B>(f, a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            #[cfg(target_feature = "avx")]
            linear::vecmap_zip::<f64_avx::F64x4, B>(f, a, b, out);
            #[cfg(not(target_feature = "avx"))]
            linear::vecmap_zip::<f64_sse2::F64x2, B>(f, a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            #[cfg(target_feature = "avx")]
            linear::vecmap_zip::<f32_avx::F32x8, B>(f, a, b, out);
            #[cfg(not(target_feature = "avx"))]
            linear::vecmap_zip::<f32_sse2::F32x4, B>(f, a, b, out);
            return;
        }
    }
    scalar::map_zip_slice(f, a, b, out)
}

/// In-place multiply by a broadcast scalar: `out[i] *= c`.
///
/// This is the mean post-scaling primitive (multiply by a reciprocal
/// count).
#[inline]
pub(crate) fn scale_assign_dispatch<T>(out: &mut [T], c: T)
where
    T: Scalar + Arith,
{
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            let c = unsafe { *(&c as *const T as *const f64) };
            linear::vecscale::<f64_neon::F64x2>(out, c);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            let c = unsafe { *(&c as *const T as *const f32) };
            linear::vecscale::<f32_neon::F32x4>(out, c);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            let c = unsafe { *(&c as *const T as *const f64) };
            #[cfg(target_feature = "avx")]
            linear::vecscale::<f64_avx::F64x4>(out, c);
            #[cfg(not(target_feature = "avx"))]
            linear::vecscale::<f64_sse2::F64x2>(out, c);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            let c = unsafe { *(&c as *const T as *const f32) };
            #[cfg(target_feature = "avx")]
            linear::vecscale::<f32_avx::F32x8>(out, c);
            #[cfg(not(target_feature = "avx"))]
            linear::vecscale::<f32_sse2::F32x4>(out, c);
            return;
        }
    }
    scalar::scale_assign_slices(out, c)
}
