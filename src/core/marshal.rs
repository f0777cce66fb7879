//! # Marshaling Contract
//!
//! The interface every TPM wire structure implements, plus the sized-buffer
//! idiom (TPM2B) used wherever the format embeds a self-describing
//! variable-length region.
//!
//! ## The Contract
//! A structure encodes itself by appending its fields in declaration order
//! to a [`WireWriter`], and decodes by consuming the same fields from a
//! [`WireReader`]. The provided `encode`/`decode` pair wraps cursor
//! creation for callers holding standalone byte sequences; `decode`
//! additionally rejects trailing bytes, so a top-level parse either consumes
//! its input exactly or fails.
//!
//! ## Round-Trip Contract
//! `decode(encode(v)) == v` for every legal value. Encoding is deterministic
//! and side-effect-free beyond producing bytes.

use crate::core::reader::WireReader;
use crate::core::writer::WireWriter;
use crate::error::{Result, TpmWireError};

/// Serialization contract for TPM wire structures.
///
/// Implementations are plain values: equality is structural, and decode
/// builds the value once, field by field, before returning it complete.
/// No partially populated value ever escapes a failed decode.
pub trait Marshal: Sized {
    /// Append this value's wire encoding to `writer`
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()>;

    /// Consume this value's wire encoding from `reader`
    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self>;

    /// Encode into a standalone byte sequence
    fn encode(&self) -> Result<Vec<u8>> {
        let mut writer = WireWriter::new();
        self.encode_into(&mut writer)?;
        Ok(writer.finish())
    }

    /// Decode from a standalone byte sequence, requiring exact consumption
    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(bytes);
        let value = Self::decode_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TpmWireError::TrailingData {
                remaining: reader.remaining(),
            });
        }
        Ok(value)
    }
}

impl Marshal for u8 {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        writer.write_u8(*self);
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        reader.read_u8()
    }
}

impl Marshal for u16 {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        writer.write_u16(*self);
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        reader.read_u16()
    }
}

impl Marshal for u32 {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        writer.write_u32(*self);
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        reader.read_u32()
    }
}

impl Marshal for u64 {
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()> {
        writer.write_u64(*self);
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        reader.read_u64()
    }
}

/// Encode an optional inner structure as a sized buffer (TPM2B).
///
/// The inner value is encoded into a scratch writer first to learn its byte
/// length `L`; `L` goes out as a u16 prefix followed by the inner bytes. An
/// absent inner value encodes as `00 00` and nothing else.
pub fn encode_sized<T: Marshal>(inner: Option<&T>, writer: &mut WireWriter) -> Result<()> {
    match inner {
        None => {
            writer.write_u16(0);
            Ok(())
        }
        Some(value) => {
            let mut scratch = WireWriter::new();
            value.encode_into(&mut scratch)?;
            let payload = scratch.finish();
            let len = u16::try_from(payload.len())
                .map_err(|_| TpmWireError::BufferTooLong { len: payload.len() })?;
            writer.write_u16(len);
            writer.write_bytes(&payload);
            Ok(())
        }
    }
}

/// Decode a sized buffer (TPM2B) holding an optional inner structure.
///
/// Reads the u16 length prefix, then decodes the inner value under a size
/// context so the inner decode is bound-checked against the declared length.
/// A zero length means the inner value is absent; no further bytes are read.
pub fn decode_sized<T: Marshal>(reader: &mut WireReader<'_>) -> Result<Option<T>> {
    let declared = reader.read_u16()? as usize;
    if declared == 0 {
        return Ok(None);
    }
    reader.push_size_context(declared)?;
    let inner = T::decode_from(reader)?;
    reader.pop_size_context()?;
    Ok(Some(inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_roundtrip() {
        assert_eq!(u8::decode(&0xAAu8.encode().unwrap()).unwrap(), 0xAA);
        assert_eq!(u16::decode(&0x1234u16.encode().unwrap()).unwrap(), 0x1234);
        assert_eq!(
            u32::decode(&0xDEAD_BEEFu32.encode().unwrap()).unwrap(),
            0xDEAD_BEEF
        );
        assert_eq!(u64::decode(&u64::MAX.encode().unwrap()).unwrap(), u64::MAX);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        assert_eq!(
            u16::decode(&[0x12, 0x34, 0x00]),
            Err(TpmWireError::TrailingData { remaining: 1 })
        );
    }

    #[test]
    fn test_sized_absent_is_two_zero_bytes() {
        let mut w = WireWriter::new();
        encode_sized::<u32>(None, &mut w).unwrap();
        assert_eq!(w.finish(), vec![0x00, 0x00]);
    }

    #[test]
    fn test_sized_roundtrip() {
        let mut w = WireWriter::new();
        encode_sized(Some(&0xCAFE_F00Du32), &mut w).unwrap();
        let bytes = w.finish();
        assert_eq!(bytes, vec![0x00, 0x04, 0xCA, 0xFE, 0xF0, 0x0D]);

        let mut r = WireReader::new(&bytes);
        assert_eq!(decode_sized::<u32>(&mut r).unwrap(), Some(0xCAFE_F00D));
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_sized_zero_decodes_absent() {
        let mut r = WireReader::new(&[0x00, 0x00]);
        assert_eq!(decode_sized::<u32>(&mut r).unwrap(), None);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_sized_length_overstates_payload() {
        // prefix claims 4 bytes, payload decode only consumes 2
        let mut r = WireReader::new(&[0x00, 0x04, 0x12, 0x34, 0x56, 0x78]);
        assert!(matches!(
            decode_sized::<u16>(&mut r),
            Err(TpmWireError::SizeMismatch {
                declared: 4,
                consumed: 2
            })
        ));
    }

    #[test]
    fn test_sized_length_understates_payload() {
        // prefix claims 2 bytes but the inner u32 needs 4
        let mut r = WireReader::new(&[0x00, 0x02, 0x12, 0x34, 0x56, 0x78]);
        assert!(matches!(
            decode_sized::<u32>(&mut r),
            Err(TpmWireError::SizeMismatch { declared: 2, .. })
        ));
    }
}
