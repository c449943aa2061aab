//! NEON f64 vector pack for aarch64.
//!
//! NEON provides 128-bit registers → 2×f64 lanes. NEON loads have no
//! alignment requirement, so the aligned and unaligned forms are the same
//! instruction; `load_a` keeps the stricter contract for portability.

use core::arch::aarch64::*;

use super::{Arith, SimdPack};

/// Two f64 lanes in one NEON register.
#[derive(Clone, Copy)]
pub(crate) struct F64x2(float64x2_t);

impl SimdPack for F64x2 {
    type Elem = f64;

    const WIDTH: usize = 2;

    #[inline]
    fn zeros() -> Self {
        Self::splat(0.0)
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
        unsafe { Self(vdupq_n_f64(v)) }
    }

    #[inline]
    fn from_lanes(lanes: &[f64]) -> Self {
        debug_assert!(lanes.len() >= 2);
        unsafe { Self(vld1q_f64(lanes.as_ptr())) }
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
        unsafe { Self(vld1q_f64(ptr)) }
    }

    #[inline]
    unsafe fn load_u(ptr: *const f64) -> Self {
        unsafe { Self(vld1q_f64(ptr)) }
    }

    #[inline]
    unsafe fn load_part(count: usize, ptr: *const f64) -> Self {
        debug_assert!(count > 0 && count <= 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            for i in 0..count {
                buf[i] = *ptr.add(i);
            }
            Self(vld1q_f64(buf.as_ptr()))
        }
    }

    #[inline]
    unsafe fn store_a(self, ptr: *mut f64) {
        unsafe { vst1q_f64(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_u(self, ptr: *mut f64) {
        unsafe { vst1q_f64(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_part(self, count: usize, ptr: *mut f64) {
        debug_assert!(count > 0 && count <= 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            vst1q_f64(buf.as_mut_ptr(), self.0);
            for i in 0..count {
                *ptr.add(i) = buf[i];
            }
        }
    }

    #[inline]
    fn to_scalar(self) -> f64 {
        unsafe { vgetq_lane_f64::<0>(self.0) }
    }

    #[inline]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < 2);
        let mut buf = [0.0_f64; 2];
        unsafe {
            vst1q_f64(buf.as_mut_ptr(), self.0);
        }
        buf[lane]
    }

    #[inline]
    fn broadcast(self, lane: usize) -> Self {
        Self::splat(self.extract(lane))
    }

    #[inline]
    fn hsum(self) -> f64 {
        unsafe { vaddvq_f64(self.0) }
    }

    #[inline]
    fn hmax(self) -> f64 {
        unsafe { vmaxvq_f64(self.0) }
    }

    #[inline]
    fn hmin(self) -> f64 {
        unsafe { vminvq_f64(self.0) }
    }
}

impl Arith for F64x2 {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(vdivq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(vmaxq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(vminq_f64(self.0, rhs.0)) }
    }

    #[inline]
    fn abs(self) -> Self {
        unsafe { Self(vabsq_f64(self.0)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(16))]
    struct Aligned([f64; 8]);

    #[test]
    fn special_value_constructors() {
        for i in 0..2 {
            assert_eq!(F64x2::zeros().extract(i), 0.0);
            assert_eq!(F64x2::ones().extract(i), 1.0);
            assert!(F64x2::inf().extract(i).is_infinite());
            assert!(F64x2::inf().extract(i) > 0.0);
            assert!(F64x2::neg_inf().extract(i) < 0.0);
            assert!(F64x2::nan().extract(i).is_nan());
        }
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
    fn set_broadcast_extract() {
        let mut pk = F64x2::zeros();
        pk.set(3.2);
        assert_eq!(pk.extract(1), 3.2);

        pk.set_lanes(&[2.4, 3.4]);
        assert_eq!(pk.to_scalar(), 2.4);
        for lane in 0..2 {
            let b = pk.broadcast(lane);
            for i in 0..2 {
                assert_eq!(b.extract(i), pk.extract(lane));
            }
        }
    }

    #[test]
    fn horizontal_reductions() {
        let pk = F64x2::from_lanes(&[3.0, -5.0]);
        assert_eq!(pk.hsum(), -2.0);
        assert_eq!(pk.hmax(), 3.0);
        assert_eq!(pk.hmin(), -5.0);
    }
}
