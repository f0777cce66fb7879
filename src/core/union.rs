//! # Tagged-Union Dispatch
//!
//! TPM unions (TPMU types) carry no discriminant of their own on the wire.
//! The selector that identifies the active variant lives in a sibling field
//! of the enclosing structure, so the enclosing decode must pass it in
//! explicitly. Encoding delegates straight to the chosen variant with no
//! added framing.
//!
//! Each union type is a closed enum over its permitted variant shapes. The
//! format's "no algorithm selected" state is a zero-byte null case shared
//! across every union that permits it; here that is modeled as a `Null`
//! variant per union enum by composition rather than a single type wearing
//! many interfaces.

use crate::core::reader::WireReader;
use crate::core::writer::WireWriter;
use crate::error::Result;

/// Dispatch contract for selector-tagged unions.
///
/// The selector is external to the union's bytes: `decode_variant` maps it
/// to exactly one variant and decodes that variant's fields. An unmapped
/// selector is [`UnknownVariant`](crate::error::TpmWireError::UnknownVariant),
/// fatal for the decode in progress. The selector→variant mapping is a
/// strict total function; an external table that maps one selector to two
/// shapes is a defect in that table, not something the codec resolves.
pub trait UnionMarshal: Sized {
    /// Selector type carried by the enclosing structure (typically an
    /// algorithm identifier)
    type Selector: Copy;

    /// The selector value an enclosing structure must write for this variant
    fn selector(&self) -> Self::Selector;

    /// Append the active variant's bare encoding, no discriminant byte
    fn encode_into(&self, writer: &mut WireWriter) -> Result<()>;

    /// Decode the variant identified by `selector` from `reader`
    fn decode_variant(reader: &mut WireReader<'_>, selector: Self::Selector) -> Result<Self>;
}
