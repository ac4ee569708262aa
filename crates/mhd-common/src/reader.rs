//! Forward-only binary reader for MHD streams.
//!
//! This module provides [`BinaryReader`], a cursor over a byte slice that
//! decodes the little-endian wire primitives of the format. The cursor only
//! moves forward: nothing is re-read and a failed read leaves no partial result.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, FormatErrorKind, RecordReader, Result};

/// Maximum number of bytes in a 7-bit chunked length prefix (32-bit value).
const MAX_LENGTH_PREFIX_BYTES: usize = 5;

/// A binary reader over a byte slice.
///
/// # Example
///
/// ```
/// use mhd_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x03, b'a', b'b', b'c'];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// assert_eq!(reader.read_string().unwrap(), "abc");
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Start decoding a record, annotating field failures with `entity`.
    #[inline]
    pub fn record<'r>(&'r mut self, entity: &'static str) -> RecordReader<'r, 'a> {
        RecordReader::new(self, entity)
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < count {
            return Err(Error::eof(self.position, count, available));
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a boolean (non-zero = true).
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_u8().map(|b| b != 0)
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_bytes(4).map(LittleEndian::read_i32)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    /// Read a little-endian i64.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_bytes(8).map(LittleEndian::read_i64)
    }

    /// Read a little-endian IEEE-754 f32.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_bytes(4).map(LittleEndian::read_f32)
    }

    /// Read a 7-bit chunked length prefix.
    ///
    /// Each byte carries 7 data bits, low-order chunk first, with the high bit
    /// set when another byte follows.
    pub fn read_7bit_length(&mut self) -> Result<usize> {
        let start = self.position;
        let mut value: u32 = 0;

        for index in 0..MAX_LENGTH_PREFIX_BYTES {
            let byte = self.read_u8()?;
            let shift = index * 7;

            // Only the low 4 bits of the fifth byte fit in 32 bits
            if index == MAX_LENGTH_PREFIX_BYTES - 1 && byte > 0x0F {
                return Err(Error::format(start, FormatErrorKind::InvalidLengthPrefix));
            }

            value |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as usize);
            }
        }

        Err(Error::format(start, FormatErrorKind::InvalidLengthPrefix))
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// A zero-length prefix yields an empty string.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_7bit_length()?;
        if length == 0 {
            return Ok(String::new());
        }

        let start = self.position;
        let bytes = self.read_bytes(length)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::format(start, FormatErrorKind::InvalidUtf8))
    }
}
