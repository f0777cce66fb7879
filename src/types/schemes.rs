//! # Scheme Unions
//!
//! Signing and key-derivation scheme unions (TPMU_SIG_SCHEME,
//! TPMU_KDF_SCHEME) and their tagged carriers (TPMT_SIG_SCHEME,
//! TPMT_KDF_SCHEME). The carriers demonstrate the enclosing-structure side
//! of union dispatch: the selector is a sibling field written immediately
//! before the union's bare bytes, and on decode it is read first and handed
//! to the union.
//!
//! Every hash-parameterised scheme variant carries a single hash algorithm
//! field; the shared null case carries nothing.

use crate::core::{Marshal, UnionMarshal, WireReader, WireWriter};
use crate::error::{Result, TpmWireError};
use crate::types::alg::TpmAlgId;

/// TPMU_SIG_SCHEME: one of the signing schemes, or the null scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigScheme {
    /// TPMS_SCHEME_HMAC
    Hmac { hash_alg: TpmAlgId },
    /// TPMS_SIG_SCHEME_RSASSA
    Rsassa { hash_alg: TpmAlgId },
    /// TPMS_SIG_SCHEME_RSAPSS
    Rsapss { hash_alg: TpmAlgId },
    /// TPMS_SIG_SCHEME_ECDSA
    Ecdsa { hash_alg: TpmAlgId },
    /// TPMS_NULL_UNION: no scheme selected, zero bytes on the wire
    Null,
}

impl UnionMarshal for SigScheme {
    type Selector = TpmAlgId;

    fn selector(&self) -> TpmAlgId {
        match self {
            Self::Hmac { .. } => TpmAlgId::Hmac,
            Self::Rsassa { .. } => TpmAlgId::Rsassa,
            Self::Rsapss { .. } => TpmAlgId::Rsapss,
            Self::Ecdsa { .. } => TpmAlgId::Ecdsa,
            Self::Null => TpmAlgId::Null,
        }
    }

    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        match self {
            Self::Hmac { hash_alg }
            | Self::Rsassa { hash_alg }
            | Self::Rsapss { hash_alg }
            | Self::Ecdsa { hash_alg } => hash_alg.encode_into(writer),
            Self::Null => Ok(()),
        }
    }

    fn decode_variant(reader: &mut WireReader<'_>, selector: TpmAlgId) -> Result<Self> {
        match selector {
            TpmAlgId::Hmac => Ok(Self::Hmac {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Rsassa => Ok(Self::Rsassa {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Rsapss => Ok(Self::Rsapss {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Ecdsa => Ok(Self::Ecdsa {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Null => Ok(Self::Null),
            other => Err(TpmWireError::UnknownVariant {
                selector: other.value(),
            }),
        }
    }
}

/// TPMU_KDF_SCHEME: one of the key-derivation schemes, or the null scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfScheme {
    /// TPMS_SCHEME_MGF1
    Mgf1 { hash_alg: TpmAlgId },
    /// TPMS_SCHEME_KDF1_SP800_56A
    Kdf1Sp800_56a { hash_alg: TpmAlgId },
    /// TPMS_SCHEME_KDF1_SP800_108
    Kdf1Sp800_108 { hash_alg: TpmAlgId },
    /// TPMS_NULL_UNION: no scheme selected, zero bytes on the wire
    Null,
}

impl UnionMarshal for KdfScheme {
    type Selector = TpmAlgId;

    fn selector(&self) -> TpmAlgId {
        match self {
            Self::Mgf1 { .. } => TpmAlgId::Mgf1,
            Self::Kdf1Sp800_56a { .. } => TpmAlgId::Kdf1Sp800_56a,
            Self::Kdf1Sp800_108 { .. } => TpmAlgId::Kdf1Sp800_108,
            Self::Null => TpmAlgId::Null,
        }
    }

    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        match self {
            Self::Mgf1 { hash_alg }
            | Self::Kdf1Sp800_56a { hash_alg }
            | Self::Kdf1Sp800_108 { hash_alg } => hash_alg.encode_into(writer),
            Self::Null => Ok(()),
        }
    }

    fn decode_variant(reader: &mut WireReader<'_>, selector: TpmAlgId) -> Result<Self> {
        match selector {
            TpmAlgId::Mgf1 => Ok(Self::Mgf1 {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Kdf1Sp800_56a => Ok(Self::Kdf1Sp800_56a {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Kdf1Sp800_108 => Ok(Self::Kdf1Sp800_108 {
                hash_alg: TpmAlgId::decode_from(reader)?,
            }),
            TpmAlgId::Null => Ok(Self::Null),
            other => Err(TpmWireError::UnknownVariant {
                selector: other.value(),
            }),
        }
    }
}

/// TPMT_SIG_SCHEME: selector field followed by the union's bare encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpmtSigScheme {
    pub details: SigScheme,
}

impl Marshal for TpmtSigScheme {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        self.details.selector().encode_into(writer)?;
        self.details.encode_into(writer)
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        let scheme = TpmAlgId::decode_from(reader)?;
        Ok(Self {
            details: SigScheme::decode_variant(reader, scheme)?,
        })
    }
}

/// TPMT_KDF_SCHEME: selector field followed by the union's bare encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpmtKdfScheme {
    pub details: KdfScheme,
}

impl Marshal for TpmtKdfScheme {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        self.details.selector().encode_into(writer)?;
        self.details.encode_into(writer)
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        let kdf = TpmAlgId::decode_from(reader)?;
        Ok(Self {
            details: KdfScheme::decode_variant(reader, kdf)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_scheme_is_selector_only() {
        let scheme = TpmtSigScheme {
            details: SigScheme::Null,
        };
        // TPM_ALG_NULL and nothing else
        assert_eq!(scheme.encode().unwrap(), vec![0x00, 0x10]);
        assert_eq!(TpmtSigScheme::decode(&[0x00, 0x10]).unwrap(), scheme);
    }

    #[test]
    fn test_sig_scheme_roundtrip() {
        let schemes = [
            SigScheme::Hmac {
                hash_alg: TpmAlgId::Sha256,
            },
            SigScheme::Rsassa {
                hash_alg: TpmAlgId::Sha384,
            },
            SigScheme::Ecdsa {
                hash_alg: TpmAlgId::Sha1,
            },
            SigScheme::Null,
        ];
        for details in schemes {
            let tagged = TpmtSigScheme { details };
            let bytes = tagged.encode().unwrap();
            assert_eq!(TpmtSigScheme::decode(&bytes).unwrap(), tagged);
        }
    }

    #[test]
    fn test_selector_not_in_sig_union() {
        // TPM_ALG_AES is a valid algorithm but not a signing scheme
        assert_eq!(
            TpmtSigScheme::decode(&[0x00, 0x06]),
            Err(TpmWireError::UnknownVariant { selector: 0x0006 })
        );
    }

    #[test]
    fn test_kdf_scheme_roundtrip() {
        let tagged = TpmtKdfScheme {
            details: KdfScheme::Kdf1Sp800_108 {
                hash_alg: TpmAlgId::Sha256,
            },
        };
        let bytes = tagged.encode().unwrap();
        assert_eq!(bytes, vec![0x00, 0x22, 0x00, 0x0B]);
        assert_eq!(TpmtKdfScheme::decode(&bytes).unwrap(), tagged);
    }

    #[test]
    fn test_same_selector_bytes_decode_per_union() {
        // TPM_ALG_NULL steers every union to its own zero-byte null case
        let bytes = TpmAlgId::Null.encode().unwrap();
        let mut r = WireReader::new(&bytes);
        let sel = TpmAlgId::decode_from(&mut r).unwrap();
        assert_eq!(
            SigScheme::decode_variant(&mut r, sel).unwrap(),
            SigScheme::Null
        );
        assert_eq!(
            KdfScheme::decode_variant(&mut r, sel).unwrap(),
            KdfScheme::Null
        );
        assert_eq!(r.remaining(), 0);
    }
}
