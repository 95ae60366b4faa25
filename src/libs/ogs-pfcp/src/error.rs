//! PFCP Error Types
//!
//! Error types for PFCP IE and message codec operations.

use thiserror::Error;

/// PFCP Error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PfcpError {
    /// Not enough bytes left to read a declared field
    #[error("Buffer too short: needed {needed} bytes, available {available}")]
    BufferTooShort { needed: usize, available: usize },

    /// Destination buffer cannot hold the encoded form
    #[error("Buffer too small: needed {needed} bytes, available {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Declared length is inconsistent with the IE layout
    #[error("Invalid length {length} for IE type {ie_type}")]
    InvalidLength { ie_type: u16, length: usize },

    /// IE type is neither the requested field nor one of its containers
    #[error("Invalid IE type: {0}")]
    InvalidIeType(u16),

    /// Container search finished without a matching child
    #[error("IE not found: {0}")]
    IeNotFound(u16),

    /// Node ID discriminant is not IPv4, IPv6 or FQDN
    #[error("Invalid node ID type: {0}")]
    InvalidNodeIdType(u8),

    /// Grouped IEs nested deeper than the decoder allows
    #[error("Grouped IE nesting exceeds {depth} levels")]
    NestingTooDeep { depth: usize },

    /// Invalid message format
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    /// Missing mandatory IE
    #[error("Missing mandatory IE: {0}")]
    MissingMandatoryIe(&'static str),

    /// Version not supported
    #[error("PFCP version not supported: {0}")]
    VersionNotSupported(u8),
}

impl PfcpError {
    pub(crate) fn short(needed: usize, available: usize) -> Self {
        Self::BufferTooShort { needed, available }
    }

    /// True for errors caused by input that ended early
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::BufferTooShort { .. })
    }
}

/// PFCP Result type
pub type PfcpResult<T> = Result<T, PfcpError>;
