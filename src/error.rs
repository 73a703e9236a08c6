//! Defines container errors.

use std::{error, fmt};

/// An error type for all operations on vectors and matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// A container was requested with a size of zero or at least the configured maximum.
    InvalidSize {
        /// The requested size.
        size: usize,
        /// The exclusive upper bound that applied.
        max: usize,
    },
    /// An element or row was accessed outside of `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the indexed container.
        len: usize,
    },
    /// A binary operation was performed on 2 objects with incompatible sizes.
    DimensionMismatch(usize, usize),
    /// A vector was constructed from a source with no backing data.
    NullSource,
    /// Text input ran out before every element was read.
    UnexpectedEnd {
        /// The number of tokens needed.
        expected: usize,
        /// The number of tokens actually read.
        found: usize,
    },
    /// A token of text input could not be parsed as an element.
    Parse {
        /// Zero-based position of the token in the input.
        position: usize,
        /// The token itself.
        token: String,
        /// The message reported by the element parser.
        reason: String,
    },
}

impl error::Error for ContainerError {}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => write!(
                f,
                "Invalid size {}, expected a value in the range 1..{}.",
                size, max
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}.", index, len)
            }
            Self::DimensionMismatch(l, r) => write!(f, "Mismatched dimensions {} and {}.", l, r),
            Self::NullSource => write!(f, "Source buffer holds no data."),
            Self::UnexpectedEnd { expected, found } => write!(
                f,
                "Unexpected end of input after {} of {} elements.",
                found, expected
            ),
            Self::Parse {
                position,
                token,
                reason,
            } => write!(f, "Cannot parse token {:?} at {}: {}.", token, position, reason),
        }
    }
}
