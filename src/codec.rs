//! Canonical half-precision encoding used by every kernel path.
//!
//! Elements are IEEE 754 binary16 values stored little-endian, two bytes per
//! element. The block and per-element decoders below are the only places
//! bytes are turned into floats, so the lane path and the residual path can
//! never disagree on what an element means.

use half::f16;
use half::slice::{HalfBitsSliceExt, HalfFloatSliceExt};

use crate::lanes::LANES;

/// Bytes occupied by one encoded element.
pub const HALF_BYTES: usize = 2;

/// Bytes occupied by one full lane block.
pub const BLOCK_BYTES: usize = LANES * HALF_BYTES;

/// Widen a binary16 bit pattern to `f32`.
#[inline]
#[must_use]
pub fn decode_half(bits: u16) -> f32 {
    f16::from_bits(bits).to_f32()
}

/// Narrow an `f32` to a binary16 bit pattern, rounding to nearest even.
#[inline]
#[must_use]
pub fn encode_half(value: f32) -> u16 {
    f16::from_f32(value).to_bits()
}

/// Decode element `index` of an encoded buffer. Panics if the buffer is too short.
#[inline]
#[must_use]
pub fn read_half(buf: &[u8], index: usize) -> f32 {
    let offset = index * HALF_BYTES;
    decode_half(u16::from_le_bytes([buf[offset], buf[offset + 1]]))
}

/// Expand one block of `LANES` encoded elements in a single slice conversion.
///
/// `block` must be exactly [`BLOCK_BYTES`] long.
#[inline]
pub(crate) fn expand_block(block: &[u8]) -> [f32; LANES] {
    debug_assert_eq!(block.len(), BLOCK_BYTES);

    let mut bits = [0u16; LANES];
    for (slot, pair) in bits.iter_mut().zip(block.chunks_exact(HALF_BYTES)) {
        *slot = u16::from_le_bytes([pair[0], pair[1]]);
    }

    let mut lanes = [0.0f32; LANES];
    bits[..].reinterpret_cast::<f16>().convert_to_f32_slice(&mut lanes);
    lanes
}

/// Decode fewer than `LANES` trailing elements into a zero-padded block.
#[inline]
pub(crate) fn expand_tail(tail: &[u8]) -> [f32; LANES] {
    debug_assert!(tail.len() < BLOCK_BYTES);

    let mut lanes = [0.0f32; LANES];
    for (index, slot) in lanes.iter_mut().take(tail.len() / HALF_BYTES).enumerate() {
        *slot = read_half(tail, index);
    }
    lanes
}

/// Encode a full-precision vector into a packed little-endian buffer.
#[must_use]
pub fn encode_vector(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * HALF_BYTES);
    for &value in values {
        bytes.extend_from_slice(&encode_half(value).to_le_bytes());
    }
    bytes
}

/// Decode a packed buffer back to `f32`. A trailing odd byte is ignored.
#[must_use]
pub fn decode_vector(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(HALF_BYTES)
        .map(|pair| decode_half(u16::from_le_bytes([pair[0], pair[1]])))
        .collect()
}
