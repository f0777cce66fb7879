//! # Configuration Management
//!
//! Wire-format constants and tunable codec limits.
//!
//! The wire format itself is fixed by the TPM 2.0 specification and is not
//! configurable. What *is* configurable are the defensive limits the reader
//! enforces while walking untrusted response bytes: how deep sized regions
//! may nest and how large a single input buffer may be.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Security Considerations
//! - The nesting cap bounds stack growth when decoding hostile input
//! - The input cap rejects oversized buffers before any allocation

use crate::error::{Result, TpmWireError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Width in bytes of every sized-buffer length prefix (TPM2B)
pub const SIZE_PREFIX_BYTES: usize = 2;

/// Default cap on sized-region nesting depth
pub const MAX_NESTING_DEPTH: usize = 32;

/// Default cap on a single input buffer, matching TPM2_MAX_COMMAND_SIZE
/// in common TPM implementations (4 KB)
pub const MAX_INPUT_SIZE: usize = 4096;

/// Tunable limits applied by [`WireReader`](crate::core::reader::WireReader)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Maximum number of simultaneously open size contexts
    pub max_nesting_depth: usize,

    /// Maximum accepted input buffer length in bytes
    pub max_input_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
            max_input_size: MAX_INPUT_SIZE,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| TpmWireError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| TpmWireError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| TpmWireError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(depth) = std::env::var("TPM_WIRE_MAX_NESTING_DEPTH") {
            if let Ok(val) = depth.parse::<usize>() {
                config.max_nesting_depth = val;
            }
        }

        if let Ok(size) = std::env::var("TPM_WIRE_MAX_INPUT_SIZE") {
            if let Ok(val) = size.parse::<usize>() {
                config.max_input_size = val;
            }
        }

        Ok(config)
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_nesting_depth == 0 {
            errors.push("Max nesting depth must be greater than 0".to_string());
        } else if self.max_nesting_depth > 1024 {
            errors.push(format!(
                "Max nesting depth too large: {} (maximum recommended: 1024)",
                self.max_nesting_depth
            ));
        }

        if self.max_input_size < SIZE_PREFIX_BYTES {
            errors.push(format!(
                "Max input size too small: {} bytes (minimum: {SIZE_PREFIX_BYTES})",
                self.max_input_size
            ));
        } else if self.max_input_size > 16 * 1024 * 1024 {
            errors.push(format!(
                "Max input size too large: {} bytes (maximum recommended: 16 MB)",
                self.max_input_size
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(TpmWireError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
