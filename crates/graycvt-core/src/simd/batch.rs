//! SIMD-friendly batch u8 → f64 conversions
//!
//! These functions process entire grids in one call. The inner loops are
//! written over fixed-width chunks so the compiler can keep whole vectors in
//! registers for each dispatched target.

use multiversion::multiversion;

/// Reciprocal of the 8-bit full scale
pub const INV_255: f64 = 1.0 / 255.0;

/// Lanes processed per unrolled step
const CHUNK: usize = 8;

const fn build_gray8_lut() -> [f64; 256] {
    let mut lut = [0.0f64; 256];
    let mut i = 0;
    while i < 256 {
        lut[i] = i as f64 / 255.0;
        i += 1;
    }
    lut
}

/// `GRAY8_LUT[v] == v as f64 / 255.0` for every 8-bit value
pub static GRAY8_LUT: [f64; 256] = build_gray8_lut();

/// Convert samples by multiplying with the reciprocal of 255
///
/// May differ from true division in the last bit.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn gray8_to_f64_scaled_batch(src: &[u8], dst: &mut [f64]) {
    assert!(dst.len() >= src.len());

    let src_chunks = src.chunks_exact(CHUNK);
    let src_tail = src_chunks.remainder();
    let mut dst_chunks = dst.chunks_exact_mut(CHUNK);

    for (inp, out) in src_chunks.zip(&mut dst_chunks) {
        for lane in 0..CHUNK {
            out[lane] = inp[lane] as f64 * INV_255;
        }
    }

    let done = src.len() - src_tail.len();
    for (inp, out) in src_tail.iter().zip(dst[done..].iter_mut()) {
        *out = *inp as f64 * INV_255;
    }
}

/// Convert samples through [`GRAY8_LUT`]
///
/// Bit-identical to division since the table is built with division.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn gray8_to_f64_lut_batch(src: &[u8], dst: &mut [f64]) {
    assert!(dst.len() >= src.len());

    for (inp, out) in src.iter().zip(dst.iter_mut()) {
        *out = GRAY8_LUT[*inp as usize];
    }
}
