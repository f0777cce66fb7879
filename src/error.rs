//! # Error Types
//!
//! Error handling for the TPM wire codec.
//!
//! This module defines every failure a marshaling operation can produce,
//! from a truncated input buffer to a union selector that maps to no known
//! variant.
//!
//! ## Error Categories
//! - **Decode Errors**: `Truncated`, `SizeMismatch`, `TrailingData`, `UnknownVariant`
//! - **Encode Errors**: `ValueOutOfRange`, `BufferTooLong`
//! - **Usage Errors**: `NestingTooDeep`, `UnbalancedSizeContext`
//! - **Configuration Errors**: invalid codec limits or TOML parse failures
//!
//! Every error is terminal for the encode/decode call in progress. The codec
//! never retries, never returns a partially populated structure, and never
//! tolerates a deviation from the expected layout: the wire format is closed
//! and fixed by the TPM 2.0 specification, so any mismatch is a hard error
//! surfaced to the caller, which owns retry/abort policy.
//!
//! All errors implement `std::error::Error` for interoperability.

use thiserror::Error;

/// TpmWireError is the primary error type for all marshaling operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TpmWireError {
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("sized region declared {declared} bytes but inner decode consumed {consumed}")]
    SizeMismatch { declared: usize, consumed: usize },

    #[error("{remaining} trailing bytes after top-level decode")]
    TrailingData { remaining: usize },

    #[error("value {value:#x} does not fit in {width} bytes")]
    ValueOutOfRange { value: u64, width: usize },

    #[error("union selector {selector:#06x} maps to no known variant")]
    UnknownVariant { selector: u16 },

    #[error("sized regions nested deeper than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("size context popped with none open")]
    UnbalancedSizeContext,

    #[error("sized buffer payload of {len} bytes exceeds the u16 length prefix")]
    BufferTooLong { len: usize },

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using TpmWireError
pub type Result<T> = std::result::Result<T, TpmWireError>;
