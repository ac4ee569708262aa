//! Error types for MHD decoding.
//!
//! Every failure carries the byte offset at which the failing read started and
//! a [`Trail`] of "while decoding" frames. Frames are appended innermost-first
//! as the error propagates outward through nested decoders.

use std::fmt;

use thiserror::Error;

/// A "while decoding X.Y" context trail.
///
/// Frames starting with `.` or `[` are rendered attached to the frame that
/// encloses them, so `MainDatabase.powers`, `[3]`, `Power.effects`, `[0]`,
/// `Effect.magnitude` renders as
/// `MainDatabase.powers[3] > Power.effects[0] > Effect.magnitude`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    /// Innermost frame first.
    frames: Vec<String>,
}

impl Trail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an enclosing frame.
    pub fn push(&mut self, frame: impl Into<String>) {
        self.frames.push(frame.into());
    }

    /// Check if no frames were recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate over the frames, outermost first.
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().rev().map(String::as_str)
    }

    /// Render the frames without the leading "while decoding".
    pub fn path(&self) -> String {
        let mut out = String::new();
        for frame in self.frames() {
            if !out.is_empty() && !frame.starts_with('.') && !frame.starts_with('[') {
                out.push_str(" > ");
            }
            out.push_str(frame);
        }
        out
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, " while decoding {}", self.path())
    }
}

/// The stream ran out of bytes in the middle of a field.
///
/// This is the EOF error of the format: there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected end of stream at offset {offset}: needed {needed} bytes but only {available} available{trail}")]
pub struct DecodeError {
    /// Offset at which the failing read started.
    pub offset: usize,
    /// Bytes the read required.
    pub needed: usize,
    /// Bytes that were left.
    pub available: usize,
    /// Decoding context.
    pub trail: Trail,
}

/// What was structurally wrong with the stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The header string does not contain the marker for this database kind.
    #[error("missing header marker {expected:?} (found {found:?})")]
    MissingHeader { expected: &'static str, found: String },

    /// A section marker was not the one the fixed section order requires.
    #[error("invalid section marker: expected {expected:?}, found {found:?}")]
    InvalidSectionMarker { expected: &'static str, found: String },

    /// An enum field held a discriminant with no known meaning.
    #[error("unrecognized {name} value {value}")]
    InvalidEnumValue { name: &'static str, value: i32 },

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,

    /// A 7-bit chunked length prefix overflowed 32 bits.
    #[error("malformed 7-bit length prefix")]
    InvalidLengthPrefix,

    /// A tick date outside the representable calendar range.
    #[error("tick date {ticks} is out of range")]
    InvalidDate { ticks: i64 },

    /// The input matched no known binary or text layout.
    #[error("unrecognized input format")]
    UnrecognizedFormat,
}

/// The stream is well-formed bytes but not a valid MHD structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}{trail}")]
pub struct FormatError {
    /// Offset of the offending value.
    pub offset: usize,
    /// What went wrong.
    pub kind: FormatErrorKind,
    /// Decoding context.
    pub trail: Trail,
}

/// Error type for all MHD decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Stream exhausted mid-field.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Structural violation of the format.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    /// Build an end-of-stream error.
    pub fn eof(offset: usize, needed: usize, available: usize) -> Self {
        Self::Decode(DecodeError {
            offset,
            needed,
            available,
            trail: Trail::new(),
        })
    }

    /// Build a format error.
    pub fn format(offset: usize, kind: FormatErrorKind) -> Self {
        Self::Format(FormatError {
            offset,
            kind,
            trail: Trail::new(),
        })
    }

    /// Check if the stream ran out of bytes.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if the stream was structurally invalid.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// The format error kind, if this is a format error.
    pub fn format_kind(&self) -> Option<&FormatErrorKind> {
        match self {
            Self::Format(e) => Some(&e.kind),
            Self::Decode(_) => None,
        }
    }

    /// Byte offset of the failure.
    pub fn offset(&self) -> usize {
        match self {
            Self::Decode(e) => e.offset,
            Self::Format(e) => e.offset,
        }
    }

    /// The "while decoding" trail.
    pub fn trail(&self) -> &Trail {
        match self {
            Self::Decode(e) => &e.trail,
            Self::Format(e) => &e.trail,
        }
    }

    fn trail_mut(&mut self) -> &mut Trail {
        match self {
            Self::Decode(e) => &mut e.trail,
            Self::Format(e) => &mut e.trail,
        }
    }

    /// Append an enclosing context frame.
    pub fn push_frame(mut self, frame: impl Into<String>) -> Self {
        self.trail_mut().push(frame);
        self
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach decoding context to a failed result.
pub trait ResultExt<T> {
    /// Append a static frame such as `"Archetype.origins"`.
    fn context(self, frame: &'static str) -> Result<T>;

    /// Append a lazily built frame such as `"[12]"`.
    fn with_context<S, F>(self, frame: F) -> Result<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T> ResultExt<T> for Result<T> {
    #[inline]
    fn context(self, frame: &'static str) -> Result<T> {
        self.map_err(|e| e.push_frame(frame))
    }

    #[inline]
    fn with_context<S, F>(self, frame: F) -> Result<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        self.map_err(|e| e.push_frame(frame()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_renders_outermost_first() {
        let err: Result<()> = Err(Error::eof(40, 4, 1));
        let err = err
            .context("Effect.magnitude")
            .with_context(|| "[0]")
            .context("Power.effects")
            .with_context(|| format!("[{}]", 3))
            .context("MainDatabase.powers")
            .unwrap_err();

        assert_eq!(
            err.trail().path(),
            "MainDatabase.powers[3] > Power.effects[0] > Effect.magnitude"
        );
        assert_eq!(err.offset(), 40);
        assert!(err.is_eof());
    }

    #[test]
    fn test_display_includes_offset_and_trail() {
        let err = Error::eof(7, 4, 0).push_frame("RecipeDatabase.count");
        let message = err.to_string();

        assert!(message.contains("unexpected end of stream at offset 7"));
        assert!(message.ends_with("while decoding RecipeDatabase.count"));
    }

    #[test]
    fn test_format_error_kind() {
        let err = Error::format(
            12,
            FormatErrorKind::InvalidEnumValue {
                name: "ClassType",
                value: 99,
            },
        );

        assert!(err.is_format());
        assert!(!err.is_eof());
        assert!(matches!(
            err.format_kind(),
            Some(FormatErrorKind::InvalidEnumValue { value: 99, .. })
        ));
        assert_eq!(err.to_string(), "unrecognized ClassType value 99 at offset 12");
    }
}
