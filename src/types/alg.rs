//! # Algorithm Identifiers
//!
//! The TCG algorithm registry values used as union selectors throughout the
//! wire format. Only the subset exercised by this crate's structure catalog
//! is listed; the registry is closed, so an identifier outside the known set
//! is rejected at decode time rather than carried opaquely.

use crate::core::{Marshal, WireReader, WireWriter};
use crate::error::{Result, TpmWireError};

/// TPM_ALG_ID: a 16-bit algorithm identifier from the TCG registry.
///
/// `Null` doubles as the "no algorithm selected" selector, steering every
/// union that permits an empty state toward its zero-byte null variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TpmAlgId {
    Rsa = 0x0001,
    Sha1 = 0x0004,
    Hmac = 0x0005,
    Aes = 0x0006,
    Mgf1 = 0x0007,
    KeyedHash = 0x0008,
    Xor = 0x000A,
    Sha256 = 0x000B,
    Sha384 = 0x000C,
    Sha512 = 0x000D,
    Null = 0x0010,
    Rsassa = 0x0014,
    Rsapss = 0x0016,
    Ecdsa = 0x0018,
    Ecc = 0x0023,
    Kdf1Sp800_56a = 0x0020,
    Kdf1Sp800_108 = 0x0022,
    Cfb = 0x0043,
}

impl TpmAlgId {
    /// The registry value carried on the wire
    pub fn value(self) -> u16 {
        self as u16
    }

    /// Map a wire value back to its identifier
    pub fn from_value(value: u16) -> Result<Self> {
        let alg = match value {
            0x0001 => Self::Rsa,
            0x0004 => Self::Sha1,
            0x0005 => Self::Hmac,
            0x0006 => Self::Aes,
            0x0007 => Self::Mgf1,
            0x0008 => Self::KeyedHash,
            0x000A => Self::Xor,
            0x000B => Self::Sha256,
            0x000C => Self::Sha384,
            0x000D => Self::Sha512,
            0x0010 => Self::Null,
            0x0014 => Self::Rsassa,
            0x0016 => Self::Rsapss,
            0x0018 => Self::Ecdsa,
            0x0023 => Self::Ecc,
            0x0020 => Self::Kdf1Sp800_56a,
            0x0022 => Self::Kdf1Sp800_108,
            0x0043 => Self::Cfb,
            _ => return Err(TpmWireError::UnknownVariant { selector: value }),
        };
        Ok(alg)
    }
}

impl Marshal for TpmAlgId {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        writer.write_u16(self.value());
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Self::from_value(reader.read_u16()?)
    }
}
