//! # Public Area
//!
//! The public-area structure (TPMT_PUBLIC) and its sized wrapper
//! (TPM2B_PUBLIC), the shape load commands send and key-creation responses
//! return. This is the catalog's deepest composition: a sized buffer whose
//! payload is a structure that itself contains further sized buffers and a
//! union selected by one of its own leading fields.

use crate::core::{decode_sized, encode_sized, Marshal, UnionMarshal, WireReader, WireWriter};
use crate::error::{Result, TpmWireError};
use crate::types::alg::TpmAlgId;
use crate::types::buffers::Tpm2bDigest;
use crate::types::schemes::TpmtSigScheme;

/// TPMU_PUBLIC_PARMS: key-family parameters, selected by the public area's
/// object type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicParms {
    /// TPMS_RSA_PARMS (reduced to the fields this catalog exercises)
    Rsa {
        scheme: TpmtSigScheme,
        key_bits: u16,
        exponent: u32,
    },
    /// TPMS_KEYEDHASH_PARMS
    KeyedHash { scheme: TpmtSigScheme },
    /// TPMS_NULL_UNION: data-only object, no key parameters
    Null,
}

impl UnionMarshal for PublicParms {
    type Selector = TpmAlgId;

    fn selector(&self) -> TpmAlgId {
        match self {
            Self::Rsa { .. } => TpmAlgId::Rsa,
            Self::KeyedHash { .. } => TpmAlgId::KeyedHash,
            Self::Null => TpmAlgId::Null,
        }
    }

    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        match self {
            Self::Rsa {
                scheme,
                key_bits,
                exponent,
            } => {
                scheme.encode_into(writer)?;
                writer.write_u16(*key_bits);
                writer.write_u32(*exponent);
                Ok(())
            }
            Self::KeyedHash { scheme } => scheme.encode_into(writer),
            Self::Null => Ok(()),
        }
    }

    fn decode_variant(reader: &mut WireReader<'_>, selector: TpmAlgId) -> Result<Self> {
        match selector {
            TpmAlgId::Rsa => Ok(Self::Rsa {
                scheme: TpmtSigScheme::decode_from(reader)?,
                key_bits: reader.read_u16()?,
                exponent: reader.read_u32()?,
            }),
            TpmAlgId::KeyedHash => Ok(Self::KeyedHash {
                scheme: TpmtSigScheme::decode_from(reader)?,
            }),
            TpmAlgId::Null => Ok(Self::Null),
            other => Err(TpmWireError::UnknownVariant {
                selector: other.value(),
            }),
        }
    }
}

/// TPMT_PUBLIC: the public area of a TPM object.
///
/// The object type doubles as the selector for the `parameters` union, so
/// decode reads it once and reuses it for dispatch; the wire carries no
/// second copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpmtPublic {
    pub name_alg: TpmAlgId,
    pub object_attributes: u32,
    pub auth_policy: Tpm2bDigest,
    pub parameters: PublicParms,
    pub unique: Tpm2bDigest,
}

impl Marshal for TpmtPublic {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        self.parameters.selector().encode_into(writer)?;
        self.name_alg.encode_into(writer)?;
        writer.write_u32(self.object_attributes);
        self.auth_policy.encode_into(writer)?;
        self.parameters.encode_into(writer)?;
        self.unique.encode_into(writer)
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        let object_type = TpmAlgId::decode_from(reader)?;
        let name_alg = TpmAlgId::decode_from(reader)?;
        let object_attributes = reader.read_u32()?;
        let auth_policy = Tpm2bDigest::decode_from(reader)?;
        let parameters = PublicParms::decode_variant(reader, object_type)?;
        let unique = Tpm2bDigest::decode_from(reader)?;
        Ok(Self {
            name_alg,
            object_attributes,
            auth_policy,
            parameters,
            unique,
        })
    }
}

/// TPM2B_PUBLIC: sized wrapper embedding a public area in a command or
/// response. An absent public area is legal and encodes as `00 00`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tpm2bPublic {
    pub public_area: Option<TpmtPublic>,
}

impl Marshal for Tpm2bPublic {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        encode_sized(self.public_area.as_ref(), writer)
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            public_area: decode_sized(reader)?,
        })
    }
}
