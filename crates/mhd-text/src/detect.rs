//! Format sniffing.

use std::fmt;

use mhd_common::{BinaryReader, Error, FormatErrorKind, Result};
use tracing::debug;

use crate::lines::first_line;

/// Longest header string accepted as evidence of a binary container.
pub const MAX_BINARY_HEADER_LEN: usize = 128;

/// Keyword of the optional version line in text tables.
pub const VERSION_KEYWORD: &str = "Version";

/// The layout an MHD stream uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatKind {
    /// Length-prefixed binary container.
    Binary,
    /// Text table whose first line is `Version <token>`.
    TextWithVersion,
    /// Tab-separated text table.
    TextTsv,
    /// One value per line.
    TextPlain,
}

impl FormatKind {
    /// Check if this is one of the text layouts.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Binary)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::TextWithVersion => "text (versioned)",
            Self::TextTsv => "text (tab-separated)",
            Self::TextPlain => "text (plain)",
        };
        f.write_str(name)
    }
}

/// Classify a stream by its first bytes.
///
/// A `Version <token>` first line always means a versioned text table.
/// Otherwise a binary container is recognised by its header and version
/// strings: two length-prefixed runs of printable ASCII. Anything else is
/// classified by its first line. An empty stream is an end-of-stream error.
///
/// ```
/// use mhd_text::{detect, FormatKind};
///
/// assert_eq!(detect(b"\x0bHello world\x033.1").unwrap(), FormatKind::Binary);
/// assert_eq!(detect(b"Version 1.0\nfoo\n").unwrap(), FormatKind::TextWithVersion);
/// assert_eq!(detect(b"name\tlevel\n").unwrap(), FormatKind::TextTsv);
/// assert_eq!(detect(b"Accuracy\nDamage\n").unwrap(), FormatKind::TextPlain);
/// assert!(detect(b"").unwrap_err().is_eof());
/// ```
pub fn detect(data: &[u8]) -> Result<FormatKind> {
    if data.is_empty() {
        return Err(Error::eof(0, 1, 0).push_frame("FormatKind.detect"));
    }

    if first_line(data).is_ok_and(|line| version_token(line).is_some()) {
        debug!("detected versioned text table");
        return Ok(FormatKind::TextWithVersion);
    }

    if has_binary_header(data) {
        debug!(len = data.len(), "detected binary container");
        return Ok(FormatKind::Binary);
    }

    let line = first_line(data)?;
    let kind = if line.contains('\t') {
        FormatKind::TextTsv
    } else {
        FormatKind::TextPlain
    };

    debug!(%kind, "detected text table");
    Ok(kind)
}

/// The version in a `Version <token>` line, if the line is one.
pub(crate) fn version_token(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(VERSION_KEYWORD)?;
    if !rest.starts_with(' ') {
        return None;
    }

    let mut tokens = rest.split_whitespace();
    let token = tokens.next()?;
    tokens.next().is_none().then_some(token)
}

/// Header string (non-empty) then version string (possibly empty), both
/// printable ASCII of at most [`MAX_BINARY_HEADER_LEN`] bytes.
fn has_binary_header(data: &[u8]) -> bool {
    let mut reader = BinaryReader::new(data);
    printable_string(&mut reader).is_some_and(|len| len > 0)
        && printable_string(&mut reader).is_some()
}

/// Length of the next length-prefixed string if it is short printable ASCII.
fn printable_string(reader: &mut BinaryReader<'_>) -> Option<usize> {
    let length = reader.read_7bit_length().ok()?;
    if length > MAX_BINARY_HEADER_LEN {
        return None;
    }

    let text = reader.read_bytes(length).ok()?;
    text.iter()
        .all(|&b| (0x20..=0x7E).contains(&b))
        .then_some(length)
}
