//! SSE2 f32 vector pack for x86_64.
//!
//! SSE2 provides 128-bit registers → 4×f32 lanes.
//! SSE2 is baseline on x86_64 (always available).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{Arith, SimdPack};

/// Four f32 lanes in one SSE2 register.
#[derive(Clone, Copy)]
pub(crate) struct F32x4(__m128);

impl SimdPack for F32x4 {
    type Elem = f32;

    const WIDTH: usize = 4;

    #[inline]
    fn zeros() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }

    #[inline]
    fn ones() -> Self {
        Self::splat(1.0)
    }

    #[inline]
    fn inf() -> Self {
        Self::splat(f32::INFINITY)
    }

    #[inline]
    fn neg_inf() -> Self {
        Self::splat(f32::NEG_INFINITY)
    }

    #[inline]
    fn nan() -> Self {
        Self::splat(f32::NAN)
    }

    #[inline]
    fn splat(v: f32) -> Self {
        unsafe { Self(_mm_set1_ps(v)) }
    }

    #[inline]
    fn from_lanes(lanes: &[f32]) -> Self {
        debug_assert!(lanes.len() >= 4);
        unsafe { Self(_mm_setr_ps(lanes[0], lanes[1], lanes[2], lanes[3])) }
    }

    #[inline]
    fn set(&mut self, v: f32) {
        *self = Self::splat(v);
    }

    #[inline]
    fn set_lanes(&mut self, lanes: &[f32]) {
        *self = Self::from_lanes(lanes);
    }

    #[inline]
    unsafe fn load_a(ptr: *const f32) -> Self {
        unsafe { Self(_mm_load_ps(ptr)) }
    }

    #[inline]
    unsafe fn load_u(ptr: *const f32) -> Self {
        unsafe { Self(_mm_loadu_ps(ptr)) }
    }

    #[inline]
    unsafe fn load_part(count: usize, ptr: *const f32) -> Self {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            for i in 0..count {
                buf[i] = *ptr.add(i);
            }
            Self(_mm_loadu_ps(buf.as_ptr()))
        }
    }

    #[inline]
    unsafe fn store_a(self, ptr: *mut f32) {
        unsafe { _mm_store_ps(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_u(self, ptr: *mut f32) {
        unsafe { _mm_storeu_ps(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_part(self, count: usize, ptr: *mut f32) {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            _mm_storeu_ps(buf.as_mut_ptr(), self.0);
            for i in 0..count {
                *ptr.add(i) = buf[i];
            }
        }
    }

    #[inline]
    fn to_scalar(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.0) }
    }

    #[inline]
    fn extract(self, lane: usize) -> f32 {
        debug_assert!(lane < 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            _mm_storeu_ps(buf.as_mut_ptr(), self.0);
        }
        buf[lane]
    }

    #[inline]
    fn broadcast(self, lane: usize) -> Self {
        Self::splat(self.extract(lane))
    }

    #[inline]
    fn hsum(self) -> f32 {
        unsafe {
            // [0+2, 1+3, _, _] then lane0 + lane1
            let hi = _mm_movehl_ps(self.0, self.0);
            let s = _mm_add_ps(self.0, hi);
            let s1 = _mm_shuffle_ps::<0x55>(s, s);
            _mm_cvtss_f32(_mm_add_ss(s, s1))
        }
    }

    #[inline]
    fn hmax(self) -> f32 {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0);
            let s = _mm_max_ps(self.0, hi);
            let s1 = _mm_shuffle_ps::<0x55>(s, s);
            _mm_cvtss_f32(_mm_max_ss(s, s1))
        }
    }

    #[inline]
    fn hmin(self) -> f32 {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0);
            let s = _mm_min_ps(self.0, hi);
            let s1 = _mm_shuffle_ps::<0x55>(s, s);
            _mm_cvtss_f32(_mm_min_ss(s, s1))
        }
    }
}

impl Arith for F32x4 {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(_mm_max_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(_mm_min_ps(self.0, rhs.0)) }
    }

    #[inline]
    fn abs(self) -> Self {
        // Clear the sign bit.
        unsafe { Self(_mm_andnot_ps(_mm_set1_ps(-0.0), self.0)) }
    }
}
