//! # Core Codec Components
//!
//! The generic encode/decode engine: byte cursors, the marshaling contract,
//! the sized-buffer idiom, and tagged-union dispatch.
//!
//! ## Components
//! - **WireWriter**: append-only big-endian byte builder
//! - **WireReader**: position-tracked reader with the size-context stack
//! - **Marshal**: the contract every wire structure implements
//! - **UnionMarshal**: selector-driven dispatch for discriminant-free unions
//!
//! ## Wire Format
//! ```text
//! integers:      big-endian, fixed width 1/2/4/8
//! structures:    fields concatenated in declaration order
//! sized buffers: [Length(2)] [Payload(Length)]
//! unions:        bare encoding of the selected variant, no discriminant
//! ```
//!
//! ## Security
//! - Sized regions are bound-checked before the inner decode starts
//! - Declared-vs-consumed byte counts validated at every nesting level
//! - Nesting depth capped to bound stack growth on hostile input

pub mod marshal;
pub mod reader;
pub mod union;
pub mod writer;

pub use marshal::{decode_sized, encode_sized, Marshal};
pub use reader::WireReader;
pub use union::UnionMarshal;
pub use writer::WireWriter;
