use std::fmt;

use thiserror::Error;

/// Result alias used by the checked kernel entry points.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Which input buffer violated the length contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("vec1"),
            Self::Second => f.write_str("vec2"),
        }
    }
}

/// Precondition violations reported by [`crate::try_distance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("{operand} holds {actual} bytes, {required} required")]
    BufferTooShort {
        operand: Operand,
        required: usize,
        actual: usize,
    },

    #[error("Element count {length} overflows the addressable byte range")]
    LengthOverflow { length: usize },
}
