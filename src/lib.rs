//! # tpm-wire
//!
//! Marshaling codec for the TPM 2.0 wire format.
//!
//! The crate is the generic encode/decode engine a TPM stack builds on: the
//! [`Marshal`] contract every structure type implements, the size-prefixed
//! sized-buffer (TPM2B) idiom with a nested validation stack that pins
//! malformed input to the innermost corrupt region, and discriminant-free
//! union dispatch driven by selectors carried in enclosing structures.
//!
//! ## Layers
//! - [`core`]: cursors, the marshaling contract, sized buffers, union dispatch
//! - [`types`]: a representative structure catalog exercising every codec path
//! - [`config`]: defensive reader limits (nesting depth, input size)
//! - [`error`]: the closed error surface; every deviation is a hard error
//!
//! Device transport, sessions, authorization, and command dispatch live in
//! consuming crates; they see only [`Marshal::encode`] / [`Marshal::decode`]
//! and opaque byte sequences.
//!
//! ## Example
//! ```rust
//! use tpm_wire::core::Marshal;
//! use tpm_wire::types::{SigScheme, TpmAlgId, TpmtSigScheme};
//!
//! # fn main() -> tpm_wire::error::Result<()> {
//! let scheme = TpmtSigScheme {
//!     details: SigScheme::Rsassa { hash_alg: TpmAlgId::Sha256 },
//! };
//! let bytes = scheme.encode()?;
//! assert_eq!(TpmtSigScheme::decode(&bytes)?, scheme);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::CodecConfig;
pub use core::{Marshal, UnionMarshal, WireReader, WireWriter};
pub use error::{Result, TpmWireError};
