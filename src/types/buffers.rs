//! # Raw Sized Buffers
//!
//! The degenerate form of the sized-buffer idiom: a u16 length prefix
//! followed by opaque payload bytes with no inner structure to decode.
//! These back digests, key material, nonces, and auth values.
//!
//! Because the payload is raw bytes rather than a structure, the reader
//! consumes exactly `length` bytes directly; an empty payload is legal and
//! means "no value present".

use crate::core::{Marshal, WireReader, WireWriter};
use crate::error::{Result, TpmWireError};

/// TPM2B_DIGEST: a sized buffer holding a hash digest or similar secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tpm2bDigest {
    buffer: Vec<u8>,
}

/// TPM2B_DATA: a sized buffer holding caller-supplied opaque data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tpm2bData {
    buffer: Vec<u8>,
}

macro_rules! raw_sized_buffer {
    ($name:ident) => {
        impl $name {
            /// Wrap `bytes`, rejecting payloads the u16 prefix cannot describe
            pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
                let buffer = bytes.into();
                if buffer.len() > usize::from(u16::MAX) {
                    return Err(TpmWireError::BufferTooLong { len: buffer.len() });
                }
                Ok(Self { buffer })
            }

            /// An empty buffer, the wire encoding `00 00`
            pub fn empty() -> Self {
                Self::default()
            }

            /// The payload bytes
            pub fn as_bytes(&self) -> &[u8] {
                &self.buffer
            }

            /// Payload length in bytes
            pub fn len(&self) -> usize {
                self.buffer.len()
            }

            /// Whether no value is present
            pub fn is_empty(&self) -> bool {
                self.buffer.is_empty()
            }
        }

        impl Marshal for $name {
            fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
                // new() guarantees the length fits the prefix
                writer.write_num(self.buffer.len() as u64, 2)?;
                writer.write_bytes(&self.buffer);
                Ok(())
            }

            fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
                let len = reader.read_u16()? as usize;
                let buffer = reader.read_bytes(len)?.to_vec();
                Ok(Self { buffer })
            }
        }
    };
}

raw_sized_buffer!(Tpm2bDigest);
raw_sized_buffer!(Tpm2bData);
