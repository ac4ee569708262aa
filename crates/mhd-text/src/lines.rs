//! Line splitting over raw bytes.

use memchr::memchr_iter;
use mhd_common::{Error, FormatErrorKind, Result};

/// One line of input with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub offset: usize,
    pub text: &'a str,
}

/// Split `data` on `\n`, stripping one trailing `\r` per line.
///
/// A final line without a terminator is yielded; an empty tail is not.
pub(crate) fn lines(data: &[u8]) -> impl Iterator<Item = Result<Line<'_>>> {
    let ends = memchr_iter(b'\n', data).chain(std::iter::once(data.len()));

    let mut start = 0;
    ends.enumerate().filter_map(move |(number, end)| {
        if end == data.len() && start == end {
            return None;
        }
        let offset = start;
        start = end + 1;

        Some(decode_line(&data[offset..end], offset).map(|text| Line {
            number,
            offset,
            text,
        }))
    })
}

/// The first line of `data`, without its terminator.
pub(crate) fn first_line(data: &[u8]) -> Result<&str> {
    let end = memchr::memchr(b'\n', data).unwrap_or(data.len());
    decode_line(&data[..end], 0)
}

fn decode_line(bytes: &[u8], offset: usize) -> Result<&str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|e| {
        Error::format(offset + e.valid_up_to(), FormatErrorKind::InvalidUtf8)
    })
}
