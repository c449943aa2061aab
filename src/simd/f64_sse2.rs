//! SSE2 f64 vector pack for x86_64.
//!
//! SSE2 provides 128-bit registers → 2×f64 lanes.
//! SSE2 is baseline on x86_64 (always available).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{Arith, SimdPack};

/// Two f64 lanes in one SSE2 register.
#[derive(Clone, Copy)]
pub(crate) struct F64x2(__m128d);

impl SimdPack for F64x2 {
    type Elem = f64;

    const WIDTH: usize = 2;

    #[inline]
    fn zeros() -> Self {
        unsafe { Self(_mm_setzero_pd()) }
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
        unsafe { Self(_mm_set1_pd(v)) }
    }

    #[inline]
    fn from_lanes(lanes: &[f64]) -> Self {
        debug_assert!(lanes.len() >= 2);
        unsafe { Self(_mm_setr_pd(lanes[0], lanes[1])) }
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
        unsafe { Self(_mm_load_pd(ptr)) }
    }

    #[inline]
    unsafe fn load_u(ptr: *const f64) -> Self {
        unsafe { Self(_mm_loadu_pd(ptr)) }
    }

    #[inline]
    unsafe fn load_part(count: usize, ptr: *const f64) -> Self {
        debug_assert!(count > 0 && count <= 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            for i in 0..count {
                buf[i] = *ptr.add(i);
            }
            Self(_mm_loadu_pd(buf.as_ptr()))
        }
    }

    #[inline]
    unsafe fn store_a(self, ptr: *mut f64) {
        unsafe { _mm_store_pd(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_u(self, ptr: *mut f64) {
        unsafe { _mm_storeu_pd(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_part(self, count: usize, ptr: *mut f64) {
        debug_assert!(count > 0 && count <= 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            _mm_storeu_pd(buf.as_mut_ptr(), self.0);
            for i in 0..count {
                *ptr.add(i) = buf[i];
            }
        }
    }

    #[inline]
    fn to_scalar(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.0) }
    }

    #[inline]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            _mm_storeu_pd(buf.as_mut_ptr(), self.0);
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
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_add_sd(self.0, hi))
        }
    }

    #[inline]
    fn hmax(self) -> f64 {
        unsafe {
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_max_sd(self.0, hi))
        }
    }

    #[inline]
    fn hmin(self) -> f64 {
        unsafe {
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_min_sd(self.0, hi))
        }
    }
}

impl Arith for F64x2 {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(_mm_max_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(_mm_min_pd(self.0, rhs.0)) }
    }

    #[inline]
    fn abs(self) -> Self {
        // Clear the sign bit.
        unsafe { Self(_mm_andnot_pd(_mm_set1_pd(-0.0), self.0)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(16))]
    struct Aligned([f64; 8]);

    #[test]
    fn special_value_constructors() {
        let z = F64x2::zeros();
        let o = F64x2::ones();
        for i in 0..2 {
            assert_eq!(z.extract(i), 0.0);
            assert_eq!(o.extract(i), 1.0);
            assert!(F64x2::inf().extract(i).is_infinite());
            assert!(F64x2::inf().extract(i) > 0.0);
            assert!(F64x2::neg_inf().extract(i).is_infinite());
            assert!(F64x2::neg_inf().extract(i) < 0.0);
            assert!(F64x2::nan().extract(i).is_nan());
        }
    }

    #[test]
    fn splat_and_from_lanes() {
        let pk = F64x2::splat(2.5);
        assert_eq!(pk.extract(0), 2.5);
        assert_eq!(pk.extract(1), 2.5);

        let pk = F64x2::from_lanes(&[1.5, 2.5]);
        assert_eq!(pk.extract(0), 1.5);
        assert_eq!(pk.extract(1), 2.5);
    }

    #[test]
    fn set_reassigns() {
        let mut pk = F64x2::zeros();
        pk.set(3.2);
        assert_eq!(pk.extract(0), 3.2);
        assert_eq!(pk.extract(1), 3.2);

        pk.set_lanes(&[2.5, 3.5]);
        assert_eq!(pk.extract(0), 2.5);
        assert_eq!(pk.extract(1), 3.5);
    }

    #[test]
    fn aligned_load_store_round_trip() {
        let mut src = Aligned([0.0; 8]);
        for i in 0..8 {
            src.0[i] = 1.8 + i as f64;
        }

        let pk = unsafe { F64x2::load_a(src.0.as_ptr()) };
        let mut dst = Aligned([0.0; 8]);
        unsafe { pk.store_a(dst.0.as_mut_ptr()) };
        assert_eq!(&dst.0[..2], &src.0[..2]);
    }

    #[test]
    fn unaligned_load_store_round_trip() {
        let mut src = [0.0_f64; 5];
        for i in 0..5 {
            src[i] = 1.8 + i as f64;
        }

        let pk = unsafe { F64x2::load_u(src.as_ptr().add(1)) };
        let mut dst = [0.0_f64; 5];
        unsafe { pk.store_u(dst.as_mut_ptr().add(1)) };
        assert_eq!(&dst[1..3], &src[1..3]);
        assert_eq!(dst[0], 0.0);
        assert_eq!(dst[3], 0.0);
    }

    #[test]
    fn partial_load_zero_fills() {
        let src = [2.4_f64, 3.4];
        for count in 1..=2 {
            let pk = unsafe { F64x2::load_part(count, src.as_ptr()) };
            for i in 0..count {
                assert_eq!(pk.extract(i), src[i], "count={count} lane={i}");
            }
            for i in count..2 {
                assert_eq!(pk.extract(i), 0.0, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn partial_store_preserves_tail() {
        let pk = F64x2::from_lanes(&[2.4, 3.4]);
        for count in 1..=2 {
            let mut dst = [2.3_f64; 2];
            unsafe { pk.store_part(count, dst.as_mut_ptr()) };
            for i in 0..count {
                assert_eq!(dst[i], pk.extract(i), "count={count} lane={i}");
            }
            for i in count..2 {
                assert_eq!(dst[i], 2.3, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn to_scalar_is_lane_zero() {
        let pk = F64x2::from_lanes(&[2.4, 3.4]);
        assert_eq!(pk.to_scalar(), 2.4);
    }

    #[test]
    fn broadcast_each_lane() {
        let pk = F64x2::from_lanes(&[2.4, 3.4]);
        for lane in 0..2 {
            let b = pk.broadcast(lane);
            for i in 0..2 {
                assert_eq!(b.extract(i), pk.extract(lane));
            }
        }
    }

    #[test]
    fn lane_arithmetic() {
        let a = F64x2::from_lanes(&[1.0, -6.0]);
        let b = F64x2::from_lanes(&[3.0, 2.0]);

        let s = a.add(b);
        assert_eq!(s.extract(0), 4.0);
        assert_eq!(s.extract(1), -4.0);

        let m = a.max(b);
        assert_eq!(m.extract(0), 3.0);
        assert_eq!(m.extract(1), 2.0);

        let n = a.min(b);
        assert_eq!(n.extract(0), 1.0);
        assert_eq!(n.extract(1), -6.0);

        let ab = a.abs();
        assert_eq!(ab.extract(0), 1.0);
        assert_eq!(ab.extract(1), 6.0);
    }

    #[test]
    fn horizontal_reductions() {
        let pk = F64x2::from_lanes(&[3.0, -5.0]);
        assert_eq!(pk.hsum(), -2.0);
        assert_eq!(pk.hmax(), 3.0);
        assert_eq!(pk.hmin(), -5.0);
    }
}
