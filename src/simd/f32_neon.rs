//! NEON f32 vector pack for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes. NEON loads have no
//! alignment requirement, so the aligned and unaligned forms are the same
//! instruction; `load_a` keeps the stricter contract for portability.

use core::arch::aarch64::*;

use super::{Arith, SimdPack};

/// Four f32 lanes in one NEON register.
#[derive(Clone, Copy)]
pub(crate) struct F32x4(float32x4_t);

impl SimdPack for F32x4 {
    type Elem = f32;

    const WIDTH: usize = 4;

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
        unsafe { Self(vdupq_n_f32(v)) }
    }

    #[inline]
    fn from_lanes(lanes: &[f32]) -> Self {
        debug_assert!(lanes.len() >= 4);
        unsafe { Self(vld1q_f32(lanes.as_ptr())) }
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
        unsafe { Self(vld1q_f32(ptr)) }
    }

    #[inline]
    unsafe fn load_u(ptr: *const f32) -> Self {
        unsafe { Self(vld1q_f32(ptr)) }
    }

    #[inline]
    unsafe fn load_part(count: usize, ptr: *const f32) -> Self {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            for i in 0..count {
                buf[i] = *ptr.add(i);
            }
            Self(vld1q_f32(buf.as_ptr()))
        }
    }

    #[inline]
    unsafe fn store_a(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_u(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.0) }
    }

    #[inline]
    unsafe fn store_part(self, count: usize, ptr: *mut f32) {
        debug_assert!(count > 0 && count <= 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            vst1q_f32(buf.as_mut_ptr(), self.0);
            for i in 0..count {
                *ptr.add(i) = buf[i];
            }
        }
    }

    #[inline]
    fn to_scalar(self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.0) }
    }

    #[inline]
    fn extract(self, lane: usize) -> f32 {
        debug_assert!(lane < 4);
        let mut buf = [0.0_f32; 4];
        unsafe {
            vst1q_f32(buf.as_mut_ptr(), self.0);
        }
        buf[lane]
    }

    #[inline]
    fn broadcast(self, lane: usize) -> Self {
        Self::splat(self.extract(lane))
    }

    #[inline]
    fn hsum(self) -> f32 {
        unsafe { vaddvq_f32(self.0) }
    }

    #[inline]
    fn hmax(self) -> f32 {
        unsafe { vmaxvq_f32(self.0) }
    }

    #[inline]
    fn hmin(self) -> f32 {
        unsafe { vminvq_f32(self.0) }
    }
}

impl Arith for F32x4 {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(vmaxq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(vminq_f32(self.0, rhs.0)) }
    }

    #[inline]
    fn abs(self) -> Self {
        unsafe { Self(vabsq_f32(self.0)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(16))]
    struct Aligned([f32; 12]);

    #[test]
    fn special_value_constructors() {
        for i in 0..4 {
            assert_eq!(F32x4::zeros().extract(i), 0.0);
            assert_eq!(F32x4::ones().extract(i), 1.0);
            assert!(F32x4::inf().extract(i).is_infinite());
            assert!(F32x4::inf().extract(i) > 0.0);
            assert!(F32x4::neg_inf().extract(i) < 0.0);
            assert!(F32x4::nan().extract(i).is_nan());
        }
    }

    #[test]
    fn aligned_load_store_round_trip() {
        let mut src = Aligned([0.0; 12]);
        for i in 0..12 {
            src.0[i] = 1.8 + i as f32;
        }

        let pk = unsafe { F32x4::load_a(src.0.as_ptr()) };
        let mut dst = Aligned([0.0; 12]);
        unsafe { pk.store_a(dst.0.as_mut_ptr()) };
        assert_eq!(&dst.0[..4], &src.0[..4]);
    }

    #[test]
    fn unaligned_load_store_round_trip() {
        let mut src = [0.0_f32; 9];
        for i in 0..9 {
            src[i] = 1.8 + i as f32;
        }

        let pk = unsafe { F32x4::load_u(src.as_ptr().add(1)) };
        let mut dst = [0.0_f32; 9];
        unsafe { pk.store_u(dst.as_mut_ptr().add(1)) };
        assert_eq!(&dst[1..5], &src[1..5]);
        assert_eq!(dst[0], 0.0);
        assert_eq!(dst[5], 0.0);
    }

    #[test]
    fn partial_load_zero_fills() {
        let src = [2.4_f32, 3.4, 4.4, 5.4];
        for count in 1..=4 {
            let pk = unsafe { F32x4::load_part(count, src.as_ptr()) };
            for i in 0..count {
                assert_eq!(pk.extract(i), src[i], "count={count} lane={i}");
            }
            for i in count..4 {
                assert_eq!(pk.extract(i), 0.0, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn partial_store_preserves_tail() {
        let pk = F32x4::from_lanes(&[2.4, 3.4, 4.4, 5.4]);
        for count in 1..=4 {
            let mut dst = [2.3_f32; 4];
            unsafe { pk.store_part(count, dst.as_mut_ptr()) };
            for i in 0..count {
                assert_eq!(dst[i], pk.extract(i), "count={count} lane={i}");
            }
            for i in count..4 {
                assert_eq!(dst[i], 2.3, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn set_broadcast_extract() {
        let lanes = [2.4_f32, 3.4, 4.4, 5.4];
        let mut pk = F32x4::zeros();
        pk.set_lanes(&lanes);
        assert_eq!(pk.to_scalar(), 2.4);
        for lane in 0..4 {
            let b = pk.broadcast(lane);
            for i in 0..4 {
                assert_eq!(b.extract(i), pk.extract(lane));
            }
        }
    }

    #[test]
    fn horizontal_reductions() {
        let pk = F32x4::from_lanes(&[3.0, -5.0, 8.0, 1.0]);
        assert_eq!(pk.hsum(), 7.0);
        assert_eq!(pk.hmax(), 8.0);
        assert_eq!(pk.hmin(), -5.0);
    }
}
