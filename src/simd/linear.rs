//! Pack-parameterized linear traversal primitives.
//!
//! Every routine walks a contiguous slice in whole packs and finishes the
//! `len mod WIDTH` remainder with a scalar tail running the identical
//! combine logic, so vectorized and scalar execution agree element for
//! element. Loads are unaligned: column slices come from caller-owned
//! buffers with no alignment guarantee beyond the element type's.
//!
//! Fold accumulators start from a full pack of the folder's empty value.
//! The empty value is the identity of the fold, so lanes that see no
//! element leave the horizontal reduction unchanged and the degenerate
//! (empty-slice) case needs no special path.

use super::{Arith, SimdPack};
use crate::reduce::folder::Folder;
use crate::reduce::funs::{BinaryFun, FoldKernel, MapFoldKernel, UnaryFun, ZipFoldKernel};

/// Fold a slice down to one scalar.
#[inline]
pub(crate) fn vecfold<P, F>(k: &FoldKernel<F, P::Elem>, xs: &[P::Elem]) -> P::Elem
where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
{
    let n = xs.len();
    let w = P::WIDTH;

    let mut acc = P::splat(k.folder.empty());
    let mut i = 0;
    unsafe {
        let p = xs.as_ptr();
        while i + w <= n {
            k.apply(&mut acc, P::load_u(p.add(i)));
            i += w;
        }
    }

    let mut r = k.folder.reduce(acc);
    for &x in &xs[i..] {
        k.apply(&mut r, x);
    }
    r
}

/// Fold a transformed slice down to one scalar.
#[inline]
pub(crate) fn vecfold_map<P, F, U>(k: &MapFoldKernel<F, U, P::Elem>, xs: &[P::Elem]) -> P::Elem
where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
    U: UnaryFun,
{
    let n = xs.len();
    let w = P::WIDTH;

    let mut acc = P::splat(k.folder.empty());
    let mut i = 0;
    unsafe {
        let p = xs.as_ptr();
        while i + w <= n {
            k.apply(&mut acc, P::load_u(p.add(i)));
            i += w;
        }
    }

    let mut r = k.folder.reduce(acc);
    for &x in &xs[i..] {
        k.apply(&mut r, x);
    }
    r
}

/// Fold a binary transform of two co-indexed slices down to one scalar.
#[inline]
pub(crate) fn vecfold_zip<P, F, B>(
    k: &ZipFoldKernel<F, B, P::Elem>,
    xs: &[P::Elem],
    ys: &[P::Elem],
) -> P::Elem
where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
    B: BinaryFun,
{
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    let w = P::WIDTH;

    let mut acc = P::splat(k.folder.empty());
    let mut i = 0;
    unsafe {
        let xp = xs.as_ptr();
        let yp = ys.as_ptr();
        while i + w <= n {
            k.apply(&mut acc, P::load_u(xp.add(i)), P::load_u(yp.add(i)));
            i += w;
        }
    }

    let mut r = k.folder.reduce(acc);
    for j in i..n {
        k.apply(&mut r, xs[j], ys[j]);
    }
    r
}

/// Fold each element of `xs` into the matching slot of `acc`.
#[inline]
pub(crate) fn veccombine<P, F>(k: &FoldKernel<F, P::Elem>, acc: &mut [P::Elem], xs: &[P::Elem])
where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
{
    debug_assert_eq!(acc.len(), xs.len());
    let n = acc.len();
    let w = P::WIDTH;
    let chunks = n / w;

    unsafe {
        let ap = acc.as_mut_ptr();
        let xp = xs.as_ptr();
        for i in 0..chunks {
            let off = i * w;
            let mut a = P::load_u(ap.add(off) as *const P::Elem);
            k.apply(&mut a, P::load_u(xp.add(off)));
            a.store_u(ap.add(off));
        }
    }

    for i in chunks * w..n {
        let mut a = acc[i];
        k.apply(&mut a, xs[i]);
        acc[i] = a;
    }
}

/// Fold each transformed element of `xs` into the matching slot of `acc`.
#[inline]
pub(crate) fn veccombine_map<P, F, U>(
    k: &MapFoldKernel<F, U, P::Elem>,
    acc: &mut [P::Elem],
    xs: &[P::Elem],
) where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
    U: UnaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    let n = acc.len();
    let w = P::WIDTH;
    let chunks = n / w;

    unsafe {
        let ap = acc.as_mut_ptr();
        let xp = xs.as_ptr();
        for i in 0..chunks {
            let off = i * w;
            let mut a = P::load_u(ap.add(off) as *const P::Elem);
            k.apply(&mut a, P::load_u(xp.add(off)));
            a.store_u(ap.add(off));
        }
    }

    for i in chunks * w..n {
        let mut a = acc[i];
        k.apply(&mut a, xs[i]);
        acc[i] = a;
    }
}

/// Fold each binary-transformed pair of `xs`/`ys` into the matching slot
/// of `acc`.
#[inline]
pub(crate) fn veccombine_zip<P, F, B>(
    k: &ZipFoldKernel<F, B, P::Elem>,
    acc: &mut [P::Elem],
    xs: &[P::Elem],
    ys: &[P::Elem],
) where
    P: SimdPack,
    P::Elem: Arith,
    F: Folder<P::Elem>,
    B: BinaryFun,
{
    debug_assert_eq!(acc.len(), xs.len());
    debug_assert_eq!(acc.len(), ys.len());
    let n = acc.len();
    let w = P::WIDTH;
    let chunks = n / w;

    unsafe {
        let ap = acc.as_mut_ptr();
        let xp = xs.as_ptr();
        let yp = ys.as_ptr();
        for i in 0..chunks {
            let off = i * w;
            let mut a = P::load_u(ap.add(off) as *const P::Elem);
            k.apply(&mut a, P::load_u(xp.add(off)), P::load_u(yp.add(off)));
            a.store_u(ap.add(off));
        }
    }

    for i in chunks * w..n {
        let mut a = acc[i];
        k.apply(&mut a, xs[i], ys[i]);
        acc[i] = a;
    }
}

/// `out[i] = f(src[i])`.
#[inline]
pub(crate) fn vecmap<P, U>(f: U, src: &[P::Elem], out: &mut [P::Elem])
where
    P: SimdPack,
    P::Elem: Arith,
    U: UnaryFun,
{
    debug_assert_eq!(src.len(), out.len());
    let n = src.len();
    let w = P::WIDTH;
    let chunks = n / w;

    unsafe {
        let sp = src.as_ptr();
        let op = out.as_mut_ptr();
        for i in 0..chunks {
            let off = i * w;
            f.apply(P::load_u(sp.add(off))).store_u(op.add(off));
        }
    }

    for i in chunks * w..n {
        out[i] = f.apply(src[i]);
    }
}

/// `out[i] = f(a[i], b[i])`.
#[inline]
pub(crate) fn vecmap_zip<P, B>(f: B, a: &[P::Elem], b: &[P::Elem], out: &mut [P::Elem])
where
    P: SimdPack,
    P::Elem: Arith,
    B: BinaryFun,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let w = P::WIDTH;
    let chunks = n / w;

    unsafe {
        let ap = a.as_ptr();
        let bp = b.as_ptr();
        let op = out.as_mut_ptr();
        for i in 0..chunks {
            let off = i * w;
            f.apply(P::load_u(ap.add(off)), P::load_u(bp.add(off))).store_u(op.add(off));
        }
    }

    for i in chunks * w..n {
        out[i] = f.apply(a[i], b[i]);
    }
}

/// In-place multiply by a broadcast scalar: `out[i] *= c`.
#[inline]
pub(crate) fn vecscale<P>(out: &mut [P::Elem], c: P::Elem)
where
    P: SimdPack,
    P::Elem: Arith,
{
    let n = out.len();
    let w = P::WIDTH;
    let chunks = n / w;

    let vc = P::splat(c);
    unsafe {
        let op = out.as_mut_ptr();
        for i in 0..chunks {
            let off = i * w;
            let v = P::load_u(op.add(off) as *const P::Elem);
            v.mul(vc).store_u(op.add(off));
        }
    }

    for i in chunks * w..n {
        out[i] = out[i].mul(c);
    }
}
