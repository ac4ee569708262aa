//! Decode/encode traits shared by every record type.

use crate::{BinaryReader, BinaryWriter, Result};

/// A value with a fixed, ordered wire schema.
pub trait Decode: Sized {
    /// Entity name used in "while decoding" trails.
    const NAME: &'static str;

    /// Consume exactly the bytes of one record.
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self>;
}

/// Write support, the inverse of [`Decode`].
///
/// Only a subset of record types implement this; it exists to verify
/// `decode(encode(value)) == value`.
pub trait Encode {
    /// Append the wire form of `self`.
    fn encode(&self, writer: &mut BinaryWriter);

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.encode(&mut writer);
        writer.into_inner()
    }
}

/// An enum stored on the wire as an int32 discriminant.
pub trait WireEnum: Sized + Copy {
    /// Enum name used in error messages.
    const NAME: &'static str;

    /// Map a discriminant to a variant.
    fn from_wire(value: i32) -> Option<Self>;

    /// The discriminant of this variant.
    fn to_wire(self) -> i32;
}
