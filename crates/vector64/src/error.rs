//! Error types for checked vector operations.
//!
//! Every variant is a caller-contract violation: the same inputs always produce the same
//! error, so nothing here is retryable.

use thiserror::Error;

/// Errors reported by the checked (safe) vector API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A lane index was not in `[0, count)`.
    #[error("lane index {index} out of range for a vector of {count} lanes")]
    IndexOutOfRange {
        /// Requested lane index
        index: usize,
        /// Number of lanes in the vector
        count: usize,
    },

    /// A source or destination buffer cannot hold a full vector.
    #[error("buffer too short: {required} elements required, {actual} available")]
    BufferTooShort {
        /// Elements needed (the vector lane count)
        required: usize,
        /// Elements available after the start offset
        actual: usize,
    },

    /// A start offset lies past the end of the buffer.
    #[error("start index {start} out of range for a buffer of {len} elements")]
    StartIndexOutOfRange {
        /// Requested start offset
        start: usize,
        /// Buffer length
        len: usize,
    },

    /// An aligned transfer was attempted on a misaligned buffer.
    #[error("address {address:#x} is not aligned to {alignment} bytes")]
    Misaligned {
        /// Address of the first element
        address: usize,
        /// Required alignment in bytes
        alignment: usize,
    },
}

/// Result type alias for checked vector operations.
pub type Result<T> = core::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_messages_name_the_precondition() {
        extern crate std;
        use std::string::ToString;

        let err = VectorError::IndexOutOfRange { index: 9, count: 8 };
        assert_eq!(
            err.to_string(),
            "lane index 9 out of range for a vector of 8 lanes"
        );

        let err = VectorError::BufferTooShort {
            required: 4,
            actual: 3,
        };
        assert!(err.to_string().contains("4 elements required"));

        let err = VectorError::Misaligned {
            address: 0x1003,
            alignment: 8,
        };
        assert_eq!(err.to_string(), "address 0x1003 is not aligned to 8 bytes");
    }

    #[test]
    fn test_errors_are_distinguishable() {
        let a = VectorError::BufferTooShort {
            required: 2,
            actual: 1,
        };
        let b = VectorError::StartIndexOutOfRange { start: 5, len: 4 };
        assert_ne!(a, b);
    }
}
