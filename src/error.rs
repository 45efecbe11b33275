//! Error types for CIDR arithmetic.

use thiserror::Error;

/// Result type for CIDR operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by address conversion, navigation and splitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed CIDR text.
    #[error("Invalid CIDR '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Address byte length is neither 4 nor 16.
    #[error("Unsupported address length {0}")]
    UnsupportedAddressLength(usize),

    /// Prefix narrowed beyond the width of the address family.
    #[error("Prefix length /{prefix} exceeds {bits} bit address")]
    PrefixOverflow { prefix: u8, bits: u8 },

    /// A subnet list does not exactly partition its parent block.
    #[error("Invalid partition: {0}")]
    InvalidPartition(String),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Error {
        Error::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
