//! # Wire Reader
//!
//! Position-tracked big-endian reader over a borrowed input slice, plus the
//! size-context stack that validates every sized region the decode path
//! enters.
//!
//! ## Size Contexts
//! A sized buffer declares up front how many bytes its payload occupies.
//! Before decoding the payload the reader pushes a [`SizeContext`]; while
//! that context is open, any read that would cross its declared boundary is
//! rejected immediately, and popping the context asserts the inner decode
//! consumed exactly the declared byte count. Contexts nest arbitrarily deep
//! (one per open sized region), so corruption is reported at the innermost
//! level where it occurs rather than only at the outer boundary.

use crate::config::CodecConfig;
use crate::error::{Result, TpmWireError};
use tracing::{debug, trace};

/// Bounds for one currently-open sized region.
///
/// Invariant at pop time: `position - start_position == declared_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SizeContext {
    declared_size: usize,
    start_position: usize,
}

/// Borrowing big-endian reader backing the decode path.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
    contexts: Vec<SizeContext>,
    max_depth: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader over `buf` with default limits
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            contexts: Vec::new(),
            max_depth: crate::config::MAX_NESTING_DEPTH,
        }
    }

    /// Create a reader with explicit limits, rejecting oversized input
    pub fn with_config(buf: &'a [u8], config: &CodecConfig) -> Result<Self> {
        if buf.len() > config.max_input_size {
            return Err(TpmWireError::ConfigError(format!(
                "input of {} bytes exceeds configured maximum of {}",
                buf.len(),
                config.max_input_size
            )));
        }
        Ok(Self {
            buf,
            pos: 0,
            contexts: Vec::new(),
            max_depth: config.max_nesting_depth,
        })
    }

    /// Unread byte count.
    ///
    /// Used after a top-level decode to assert full consumption; leftover
    /// bytes there are `TrailingData`, never silently ignored.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current read position in the input
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bounds-check an upcoming read of `n` bytes.
    ///
    /// Running off the end of the input is `Truncated`; crossing the
    /// innermost open size-context boundary is `SizeMismatch`, caught here
    /// so an inner decode can never escape its declared region and corrupt
    /// interpretation of sibling fields.
    fn check_read(&self, n: usize) -> Result<()> {
        if let Some(ctx) = self.contexts.last() {
            let region_end = ctx.start_position + ctx.declared_size;
            if self.pos + n > region_end {
                debug!(
                    declared = ctx.declared_size,
                    consumed = self.pos + n - ctx.start_position,
                    "read crosses open sized-region boundary"
                );
                return Err(TpmWireError::SizeMismatch {
                    declared: ctx.declared_size,
                    consumed: self.pos + n - ctx.start_position,
                });
            }
        }
        if n > self.remaining() {
            debug!(needed = n, remaining = self.remaining(), "input truncated");
            return Err(TpmWireError::Truncated {
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Consume a big-endian integer of `width` bytes (1, 2, 4, or 8)
    pub fn read_num(&mut self, width: usize) -> Result<u64> {
        if !matches!(width, 1 | 2 | 4 | 8) {
            return Err(TpmWireError::ValueOutOfRange { value: 0, width });
        }
        let raw = self.read_bytes(width)?;
        let mut be = [0u8; 8];
        be[8 - width..].copy_from_slice(raw);
        Ok(u64::from_be_bytes(be))
    }

    /// Consume a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_num(1)? as u8)
    }

    /// Consume a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_num(2)? as u16)
    }

    /// Consume a big-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.read_num(4)? as u32)
    }

    /// Consume a big-endian u64
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_num(8)
    }

    /// Consume `n` raw bytes, borrowed from the input
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check_read(n)?;
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Open a sized region of `declared_size` bytes starting at the current
    /// position. Must be paired with exactly one [`pop_size_context`].
    ///
    /// [`pop_size_context`]: WireReader::pop_size_context
    pub fn push_size_context(&mut self, declared_size: usize) -> Result<()> {
        if self.contexts.len() >= self.max_depth {
            return Err(TpmWireError::NestingTooDeep {
                max: self.max_depth,
            });
        }
        // The declared region must fit inside whatever region encloses it;
        // check_read applies the same rule the region's own reads will see.
        self.check_read(declared_size)?;
        trace!(declared_size, start = self.pos, depth = self.contexts.len() + 1, "push size context");
        self.contexts.push(SizeContext {
            declared_size,
            start_position: self.pos,
        });
        Ok(())
    }

    /// Close the innermost sized region, asserting the bytes consumed since
    /// the matching push equal the declared size exactly.
    pub fn pop_size_context(&mut self) -> Result<()> {
        let ctx = self
            .contexts
            .pop()
            .ok_or(TpmWireError::UnbalancedSizeContext)?;
        let consumed = self.pos - ctx.start_position;
        trace!(declared = ctx.declared_size, consumed, depth = self.contexts.len(), "pop size context");
        if consumed != ctx.declared_size {
            debug!(
                declared = ctx.declared_size,
                consumed, "sized region under-consumed"
            );
            return Err(TpmWireError::SizeMismatch {
                declared: ctx.declared_size,
                consumed,
            });
        }
        Ok(())
    }

    /// Number of currently open size contexts
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_num_widths() {
        let buf = [
            0xAB, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
            0x08,
        ];
        let mut r = WireReader::new(&buf);
        assert_eq!(r.read_num(1).unwrap(), 0xAB);
        assert_eq!(r.read_num(2).unwrap(), 0x1234);
        assert_eq!(r.read_num(4).unwrap(), 0xDEAD_BEEF);
        assert_eq!(r.read_num(8).unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_read_truncated() {
        let mut r = WireReader::new(&[0x01]);
        assert_eq!(
            r.read_u16(),
            Err(TpmWireError::Truncated {
                needed: 2,
                remaining: 1
            })
        );
        // Position must be untouched after a failed read
        assert_eq!(r.remaining(), 1);
    }

    #[test]
    fn test_size_context_exact_consumption() {
        let buf = [0x01, 0x02, 0x03];
        let mut r = WireReader::new(&buf);
        r.push_size_context(3).unwrap();
        r.read_bytes(3).unwrap();
        r.pop_size_context().unwrap();
        assert_eq!(r.depth(), 0);
    }

    #[test]
    fn test_size_context_under_consumption() {
        let buf = [0x01, 0x02, 0x03];
        let mut r = WireReader::new(&buf);
        r.push_size_context(3).unwrap();
        r.read_bytes(2).unwrap();
        assert_eq!(
            r.pop_size_context(),
            Err(TpmWireError::SizeMismatch {
                declared: 3,
                consumed: 2
            })
        );
    }

    #[test]
    fn test_read_cannot_escape_region() {
        let buf = [0x01, 0x02, 0x03, 0x04];
        let mut r = WireReader::new(&buf);
        r.push_size_context(2).unwrap();
        assert_eq!(
            r.read_bytes(3),
            Err(TpmWireError::SizeMismatch {
                declared: 2,
                consumed: 3
            })
        );
    }

    #[test]
    fn test_declared_region_larger_than_input() {
        let mut r = WireReader::new(&[0x01]);
        assert_eq!(
            r.push_size_context(5),
            Err(TpmWireError::Truncated {
                needed: 5,
                remaining: 1
            })
        );
    }

    #[test]
    fn test_nested_contexts_validate_independently() {
        // outer region of 5: [len-free inner region of 2] + 3 loose bytes
        let buf = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE];
        let mut r = WireReader::new(&buf);
        r.push_size_context(5).unwrap();
        r.push_size_context(2).unwrap();
        r.read_bytes(2).unwrap();
        r.pop_size_context().unwrap();
        r.read_bytes(3).unwrap();
        r.pop_size_context().unwrap();
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_inner_region_cannot_exceed_outer() {
        let buf = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE];
        let mut r = WireReader::new(&buf);
        r.push_size_context(2).unwrap();
        assert!(matches!(
            r.push_size_context(4),
            Err(TpmWireError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_pop_without_push() {
        let mut r = WireReader::new(&[]);
        assert_eq!(
            r.pop_size_context(),
            Err(TpmWireError::UnbalancedSizeContext)
        );
    }

    #[test]
    fn test_nesting_depth_cap() {
        let config = CodecConfig {
            max_nesting_depth: 2,
            ..CodecConfig::default()
        };
        let buf = [0u8; 8];
        let mut r = WireReader::with_config(&buf, &config).unwrap();
        r.push_size_context(4).unwrap();
        r.push_size_context(4).unwrap();
        assert_eq!(
            r.push_size_context(4),
            Err(TpmWireError::NestingTooDeep { max: 2 })
        );
    }

    #[test]
    fn test_oversized_input_rejected() {
        let config = CodecConfig {
            max_input_size: 4,
            ..CodecConfig::default()
        };
        let buf = [0u8; 5];
        assert!(WireReader::with_config(&buf, &config).is_err());
    }
}
