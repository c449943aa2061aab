//! AVX f64 vector pack for x86_64.
//!
//! AVX provides 256-bit registers → 4×f64 lanes.
//! Compiled in when the build enables `target_feature = "avx"`.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{Arith, SimdPack};

/// Four f64 lanes in one AVX register.
#[derive(Clone, Copy)]
pub(crate) struct F64x4(__m256d);

impl SimdPack for F64x4 {
    type Elem = f64;

    const WIDTH: usize = 4;

    #[inline]
    fn zeros() -> Self {
        unsafe { Self(_mm256_setzero_pd()) }
    }

    #[inline]
    fn ones() -> Self {
        Self::splat(1.0)
    }

    #[inline]
    fn inf() -> Self {
        Self::splat(f64::INFINITY)
    }

    #[inline]
    fn neg_inf() -> Self {
        Self::splat(f64::NEG_INFINITY)
    }

    #[inline]
    fn nan() -> Self {
        Self::splat(f64::NAN)
    }

    #[inline]
    fn splat(v: f64) -> Self {
        unsafe { Self(_mm256_set1_pd(v)) }
    }

    #[inline]
    fn from_lanes(lanes: &[f64]) -> Self {
        debug_assert!(lanes.len() >= 4);
        unsafe { Self(_mm256_setr_pd(lanes[0], lanes[1], lanes[2], lanes[3])) }
    }

    #[inline]
    fn set(&mut self, v: f64) {
        *self = Self::splat(v);
    }

    #[inline]
    fn set_lanes(&mut self, lanes: &[f64]) {
        *self = Self::from_lanes(lanes);
    }

    #[inline]
    unsafe fn load_a(ptr: *const f64) -> Self {
        unsafe { Self(_mm256_load_pd(ptr)) }
    }

    #[inline]
    unsafe fn load_u(ptr: *const f64) -> Self {
        unsafe { Self(_mm256_loadu_pd(ptr)) }
    }

    #[inline]
    unsafe fn load_part(count: usize, ptr: *const f64) -> Self {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f64; 4];
        unsafe {
            for i in 0..count {
                buf[i] = *ptr.add(i);
            }
            Self(_mm256_loadu_pd(buf.as_ptr()))
        }
    }

    #[inline]
    unsafe fn store_a(self, ptr: *mut f64) {
        unsafe { _mm256_store_pd(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_u(self, ptr: *mut f64) {
        unsafe { _mm256_storeu_pd(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_part(self, count: usize, ptr: *mut f64) {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f64; 4];
        unsafe {
            _mm256_storeu_pd(buf.as_mut_ptr(), self.0);
            for i in 0..count {
                *ptr.add(i) = buf[i];
            }
        }
    }

    #[inline]
    fn to_scalar(self) -> f64 {
        unsafe { _mm256_cvtsd_f64(self.0) }
    }

    #[inline]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < 4);
        let mut buf = [0.0_f64; 4];
        unsafe {
            _mm256_storeu_pd(buf.as_mut_ptr(), self.0);
        }
        buf[lane]
    }

    #[inline]
    fn broadcast(self, lane: usize) -> Self {
        Self::splat(self.extract(lane))
    }

    #[inline]
    fn hsum(self) -> f64 {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let s = _mm_add_pd(lo, hi);
            let h = _mm_unpackhi_pd(s, s);
            _mm_cvtsd_f64(_mm_add_sd(s, h))
        }
    }

    #[inline]
    fn hmax(self) -> f64 {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let s = _mm_max_pd(lo, hi);
            let h = _mm_unpackhi_pd(s, s);
            _mm_cvtsd_f64(_mm_max_sd(s, h))
        }
    }

    #[inline]
    fn hmin(self) -> f64 {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let s = _mm_min_pd(lo, hi);
            let h = _mm_unpackhi_pd(s, s);
            _mm_cvtsd_f64(_mm_min_sd(s, h))
        }
    }
}

impl Arith for F64x4 {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_add_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_sub_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_mul_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_div_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_max_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_min_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn abs(self) -> Self {
        // Clear the sign bit.
        unsafe { Self(_mm256_andnot_pd(_mm256_set1_pd(-0.0), self.0)) }
    }
}
