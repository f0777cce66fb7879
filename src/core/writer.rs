//! # Wire Writer
//!
//! Append-only big-endian byte builder used by every `encode_into`
//! implementation.
//!
//! The writer owns its buffer exclusively for the duration of an encode, so
//! encoding never branches on content and never fails except when a value
//! does not fit the requested integer width.

use crate::error::{Result, TpmWireError};
use bytes::{BufMut, BytesMut};

/// Growable big-endian writer backing the encode path.
///
/// Encoding is caller-driven and top-down: a structure appends each of its
/// fields in declaration order, recursing into sub-structures as it goes.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Create a writer with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append `value` big-endian in exactly `width` bytes (1, 2, 4, or 8).
    ///
    /// Fails with `ValueOutOfRange` when `value` cannot be represented in
    /// `width` bytes. A `width` outside the fixed set supported by the wire
    /// format is rejected the same way.
    pub fn write_num(&mut self, value: u64, width: usize) -> Result<()> {
        let fits = match width {
            1 => value <= u64::from(u8::MAX),
            2 => value <= u64::from(u16::MAX),
            4 => value <= u64::from(u32::MAX),
            8 => true,
            _ => false,
        };
        if !fits {
            return Err(TpmWireError::ValueOutOfRange { value, width });
        }

        let be = value.to_be_bytes();
        self.buf.put_slice(&be[8 - width..]);
        Ok(())
    }

    /// Append a single byte
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Append a big-endian u16
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    /// Append a big-endian u32
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    /// Append a big-endian u64
    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64(value);
    }

    /// Append a raw byte run verbatim
    pub fn write_bytes(&mut self, raw: &[u8]) {
        self.buf.put_slice(raw);
    }

    /// Number of bytes accumulated so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer into the finished byte sequence
    pub fn finish(self) -> Vec<u8> {
        self.buf.freeze().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_num_widths() {
        let mut w = WireWriter::new();
        w.write_num(0xAB, 1).unwrap();
        w.write_num(0x1234, 2).unwrap();
        w.write_num(0xDEAD_BEEF, 4).unwrap();
        w.write_num(0x0102_0304_0506_0708, 8).unwrap();
        assert_eq!(
            w.finish(),
            vec![
                0xAB, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
                0x07, 0x08
            ]
        );
    }

    #[test]
    fn test_write_num_out_of_range() {
        let mut w = WireWriter::new();
        assert_eq!(
            w.write_num(0x100, 1),
            Err(TpmWireError::ValueOutOfRange {
                value: 0x100,
                width: 1
            })
        );
        assert_eq!(
            w.write_num(0x1_0000, 2),
            Err(TpmWireError::ValueOutOfRange {
                value: 0x1_0000,
                width: 2
            })
        );
        // A failed write must not leave partial bytes behind
        assert!(w.is_empty());
    }

    #[test]
    fn test_write_num_bad_width() {
        let mut w = WireWriter::new();
        assert!(w.write_num(0, 3).is_err());
        assert!(w.write_num(0, 0).is_err());
    }

    #[test]
    fn test_write_bytes_verbatim() {
        let mut w = WireWriter::new();
        w.write_bytes(&[1, 2, 3]);
        w.write_bytes(&[]);
        w.write_bytes(&[4]);
        assert_eq!(w.len(), 4);
        assert_eq!(w.finish(), vec![1, 2, 3, 4]);
    }
}
