//! Squared L2 distance kernel over packed half-precision vectors.
//!
//! Vectors arrive as byte buffers holding little-endian IEEE 754 binary16
//! elements. [`distance`] widens them to `f32` in blocks of [`LANES`],
//! accumulates squared differences lane-wise, folds the residual elements into
//! the same accumulator, and reduces the lanes in a fixed order.
//!
//! ```
//! use halfdist::{distance, encode_vector};
//!
//! let a = encode_vector(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! let b = encode_vector(&[1.0; 8]);
//! assert_eq!(distance(&a, &b, 8), 140.0);
//! ```

pub mod codec;
mod error;
pub mod kernel;
mod lanes;

pub use codec::{
    BLOCK_BYTES, HALF_BYTES, decode_half, decode_vector, encode_half, encode_vector, read_half,
};
pub use error::{KernelError, Operand, Result};
pub use kernel::{distance, distance_f16, distance_scalar, l2_distance, try_distance};
pub use lanes::{LANES, lane_backend};

/// Re-exported so callers can build typed inputs for [`distance_f16`].
pub use half::f16;
