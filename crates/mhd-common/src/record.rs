//! Field-annotating reader used by record and container decoders.

use crate::array;
use crate::{BinaryReader, Decode, Error, FormatErrorKind, Result, ResultExt, WireEnum};

/// A [`BinaryReader`] borrowed for the duration of one record.
///
/// Every read takes the field name and, on failure, appends the frame
/// `"<entity>.<field>"` to the error trail.
///
/// ```
/// use mhd_common::BinaryReader;
///
/// let data = [0x02, b'h', b'i'];
/// let mut reader = BinaryReader::new(&data);
/// let mut record = reader.record("Salvage");
///
/// assert_eq!(record.string("internal_name").unwrap(), "hi");
/// let err = record.i32("level_min").unwrap_err();
/// assert_eq!(err.trail().path(), "Salvage.level_min");
/// ```
pub struct RecordReader<'r, 'a> {
    reader: &'r mut BinaryReader<'a>,
    entity: &'static str,
}

impl<'r, 'a> RecordReader<'r, 'a> {
    pub(crate) fn new(reader: &'r mut BinaryReader<'a>, entity: &'static str) -> Self {
        Self { reader, entity }
    }

    /// Current position of the underlying reader.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Name of the entity being decoded.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Access the underlying reader for reads that need no annotation.
    pub fn inner(&mut self) -> &mut BinaryReader<'a> {
        self.reader
    }

    fn frame(&self, field: &'static str) -> String {
        format!("{}.{}", self.entity, field)
    }

    fn annotate<T>(&self, field: &'static str, result: Result<T>) -> Result<T> {
        result.with_context(|| self.frame(field))
    }

    /// Read a boolean field.
    pub fn bool(&mut self, field: &'static str) -> Result<bool> {
        let result = self.reader.read_bool();
        self.annotate(field, result)
    }

    /// Read an int32 field.
    pub fn i32(&mut self, field: &'static str) -> Result<i32> {
        let result = self.reader.read_i32();
        self.annotate(field, result)
    }

    /// Read a uint32 field.
    pub fn u32(&mut self, field: &'static str) -> Result<u32> {
        let result = self.reader.read_u32();
        self.annotate(field, result)
    }

    /// Read an int64 field.
    pub fn i64(&mut self, field: &'static str) -> Result<i64> {
        let result = self.reader.read_i64();
        self.annotate(field, result)
    }

    /// Read an f32 field.
    pub fn f32(&mut self, field: &'static str) -> Result<f32> {
        let result = self.reader.read_f32();
        self.annotate(field, result)
    }

    /// Read a string field.
    pub fn string(&mut self, field: &'static str) -> Result<String> {
        let result = self.reader.read_string();
        self.annotate(field, result)
    }

    /// Read an int32 discriminant and map it to `E`.
    pub fn enumeration<E: WireEnum>(&mut self, field: &'static str) -> Result<E> {
        let offset = self.reader.position();
        let result = self.reader.read_i32().and_then(|value| {
            E::from_wire(value).ok_or_else(|| {
                Error::format(
                    offset,
                    FormatErrorKind::InvalidEnumValue {
                        name: E::NAME,
                        value,
                    },
                )
            })
        });
        self.annotate(field, result)
    }

    /// Read a nested record.
    pub fn nested<T: Decode>(&mut self, field: &'static str) -> Result<T> {
        let result = T::decode(self.reader);
        self.annotate(field, result)
    }

    /// Read a counted list with a custom element reader.
    pub fn counted<T, F>(&mut self, field: &'static str, element: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut BinaryReader<'a>) -> Result<T>,
    {
        let result = array::read_counted_array(self.reader, element);
        self.annotate(field, result)
    }

    /// Read a counted list of nested records.
    pub fn counted_records<T: Decode>(&mut self, field: &'static str) -> Result<Vec<T>> {
        self.counted(field, T::decode)
    }

    /// Read a counted list of strings.
    pub fn counted_strings(&mut self, field: &'static str) -> Result<Vec<String>> {
        self.counted(field, BinaryReader::read_string)
    }

    /// Read a counted list of int32 values.
    pub fn counted_i32s(&mut self, field: &'static str) -> Result<Vec<i32>> {
        self.counted(field, BinaryReader::read_i32)
    }

    /// Read a list whose stream holds one element more than its count.
    pub fn off_by_one<T, F>(&mut self, field: &'static str, element: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut BinaryReader<'a>) -> Result<T>,
    {
        let result = array::read_off_by_one_array(self.reader, element);
        self.annotate(field, result)
    }

    /// Read int32 values up to the `-1` terminator.
    pub fn sentinel_i32s(&mut self, field: &'static str) -> Result<Vec<i32>> {
        let result = array::read_sentinel_array(self.reader);
        self.annotate(field, result)
    }
}
