//! 8-lane accumulator for squared differences.
//!
//! With the `simd` feature the lanes live in a `wide::f32x8` (AVX on
//! `x86_64`, paired NEON registers on aarch64). Without it a plain array
//! performs the same per-lane IEEE operations, so both backends produce
//! bit-identical results.

#[cfg(feature = "simd")]
use wide::f32x8;

/// Number of lanes processed per block.
pub const LANES: usize = 8;

/// Name of the lane backend compiled into this build.
#[must_use]
pub const fn lane_backend() -> &'static str {
    if cfg!(feature = "simd") {
        "wide-f32x8"
    } else {
        "scalar-lanes"
    }
}

#[cfg(feature = "simd")]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator(f32x8);

#[cfg(feature = "simd")]
impl Accumulator {
    #[inline]
    pub(crate) fn new() -> Self {
        Self(f32x8::ZERO)
    }

    /// Add `(a - b)^2` lane-wise.
    #[inline]
    pub(crate) fn add_squared_diff(&mut self, a: [f32; LANES], b: [f32; LANES]) {
        let diff = f32x8::from(a) - f32x8::from(b);
        self.0 += diff * diff;
    }

    #[inline]
    pub(crate) fn lanes(self) -> [f32; LANES] {
        self.0.into()
    }
}

#[cfg(not(feature = "simd"))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator([f32; LANES]);

#[cfg(not(feature = "simd"))]
impl Accumulator {
    #[inline]
    pub(crate) fn new() -> Self {
        Self([0.0; LANES])
    }

    /// Add `(a - b)^2` lane-wise.
    #[inline]
    pub(crate) fn add_squared_diff(&mut self, a: [f32; LANES], b: [f32; LANES]) {
        for ((acc, x), y) in self.0.iter_mut().zip(a).zip(b) {
            let diff = x - y;
            *acc += diff * diff;
        }
    }

    #[inline]
    pub(crate) fn lanes(self) -> [f32; LANES] {
        self.0
    }
}

impl Accumulator {
    /// Horizontal sum in a fixed tree: halves, then quarters, then the last pair.
    #[inline]
    pub(crate) fn reduce(self) -> f32 {
        let l = self.lanes();
        let s4 = [l[0] + l[4], l[1] + l[5], l[2] + l[6], l[3] + l[7]];
        let s2 = [s4[0] + s4[2], s4[1] + s4[3]];
        s2[0] + s2[1]
    }
}
