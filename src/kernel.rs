//! Squared L2 distance over packed half-precision vectors.
//!
//! Full blocks of [`LANES`] elements are widened in one slice conversion and
//! folded into an 8-lane accumulator. The residual `length % LANES` elements
//! are decoded one at a time into a zero-padded block and folded into the same
//! accumulator, so each element lands in exactly one lane. The accumulator is
//! then reduced in a fixed tree.

use half::f16;
use half::slice::HalfFloatSliceExt;

use crate::codec::{BLOCK_BYTES, HALF_BYTES, expand_block, expand_tail, read_half};
use crate::error::{KernelError, Operand, Result};
use crate::lanes::{Accumulator, LANES};

/// Sum of `(a_i - b_i)^2` over the first `length` elements of two encoded vectors.
///
/// No validation is performed. Both buffers must hold at least
/// `2 * length` bytes; a shorter buffer panics on the slice bound rather than
/// reading past it. Bytes beyond `2 * length` are ignored. Use
/// [`try_distance`] to get a typed error instead.
#[must_use]
pub fn distance(vec1: &[u8], vec2: &[u8], length: usize) -> f32 {
    let byte_len = length.saturating_mul(HALF_BYTES);
    let a = &vec1[..byte_len];
    let b = &vec2[..byte_len];

    let mut acc = Accumulator::new();
    let mut blocks_a = a.chunks_exact(BLOCK_BYTES);
    let mut blocks_b = b.chunks_exact(BLOCK_BYTES);
    for (block_a, block_b) in (&mut blocks_a).zip(&mut blocks_b) {
        acc.add_squared_diff(expand_block(block_a), expand_block(block_b));
    }

    let tail_a = blocks_a.remainder();
    if !tail_a.is_empty() {
        acc.add_squared_diff(expand_tail(tail_a), expand_tail(blocks_b.remainder()));
    }

    acc.reduce()
}

/// Checked form of [`distance`].
///
/// Fails before touching any element when `length` does not fit in the
/// address space or either buffer is shorter than `2 * length` bytes.
pub fn try_distance(vec1: &[u8], vec2: &[u8], length: usize) -> Result<f32> {
    let Some(required) = length.checked_mul(HALF_BYTES) else {
        tracing::debug!(length, "rejected distance call: byte length overflows");
        return Err(KernelError::LengthOverflow { length });
    };

    for (operand, buf) in [(Operand::First, vec1), (Operand::Second, vec2)] {
        if buf.len() < required {
            tracing::debug!(
                %operand,
                required,
                actual = buf.len(),
                "rejected distance call: buffer too short"
            );
            return Err(KernelError::BufferTooShort {
                operand,
                required,
                actual: buf.len(),
            });
        }
    }

    Ok(distance(vec1, vec2, length))
}

/// [`distance`] over typed half-precision slices.
#[must_use]
pub fn distance_f16(a: &[f16], b: &[f16]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same length");

    let len = a.len();
    let b = &b[..len];

    let mut acc = Accumulator::new();
    let mut lanes_a = [0.0f32; LANES];
    let mut lanes_b = [0.0f32; LANES];
    for (chunk_a, chunk_b) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        chunk_a.convert_to_f32_slice(&mut lanes_a);
        chunk_b.convert_to_f32_slice(&mut lanes_b);
        acc.add_squared_diff(lanes_a, lanes_b);
    }

    let offset = len - len % LANES;
    if offset < len {
        let mut tail_a = [0.0f32; LANES];
        let mut tail_b = [0.0f32; LANES];
        for (i, (x, y)) in a[offset..].iter().zip(&b[offset..]).enumerate() {
            tail_a[i] = x.to_f32();
            tail_b[i] = y.to_f32();
        }
        acc.add_squared_diff(tail_a, tail_b);
    }

    acc.reduce()
}

/// Element-order reference: one running `f32` sum, no lanes.
#[must_use]
pub fn distance_scalar(vec1: &[u8], vec2: &[u8], length: usize) -> f32 {
    let mut sum = 0.0f32;
    for i in 0..length {
        let diff = read_half(vec1, i) - read_half(vec2, i);
        sum += diff * diff;
    }
    sum
}

/// Euclidean distance (square root of [`distance`]).
#[must_use]
pub fn l2_distance(vec1: &[u8], vec2: &[u8], length: usize) -> f32 {
    distance(vec1, vec2, length).sqrt()
}
