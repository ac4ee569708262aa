//! Line-oriented text tables.
//!
//! ```text
//! Version 2.5.1          optional
//! Name<TAB>Level         header row (tab-separated layouts only)
//! Fire_Blast<TAB>1       data rows
//! ```
//!
//! There is no quoting: a cell cannot contain a tab or a newline.

use mhd_common::{Error, FormatErrorKind, Result, ResultExt};
use tracing::debug;

use crate::detect::{detect, version_token};
use crate::lines::{lines, Line};
use crate::FormatKind;

/// A decoded text table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTable {
    format: FormatKind,
    version: Option<String>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Detect the layout of `data` and parse it.
    ///
    /// Binary containers are rejected with
    /// [`FormatErrorKind::UnrecognizedFormat`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        match detect(data)? {
            FormatKind::Binary => Err(Error::format(0, FormatErrorKind::UnrecognizedFormat)
                .push_frame("TextTable.format")),
            format => Self::parse_as(format, data),
        }
    }

    /// Parse `data` with a known text layout.
    pub fn parse_as(format: FormatKind, data: &[u8]) -> Result<Self> {
        let mut lines = lines(data).filter(|line| {
            line.as_ref().map_or(true, |line| !line.text.trim().is_empty())
        });
        let mut next_line = || lines.next().transpose().context("TextTable.lines");

        let version = match format {
            FormatKind::Binary => {
                return Err(Error::format(0, FormatErrorKind::UnrecognizedFormat)
                    .push_frame("TextTable.format"))
            }
            FormatKind::TextWithVersion => {
                let line = next_line()?.ok_or_else(|| {
                    Error::eof(data.len(), 1, 0).push_frame("TextTable.version")
                })?;
                let token = version_token(line.text).ok_or_else(|| {
                    Error::format(line.offset, FormatErrorKind::UnrecognizedFormat)
                        .push_frame("TextTable.version")
                })?;
                Some(token.to_owned())
            }
            FormatKind::TextTsv | FormatKind::TextPlain => None,
        };

        let first = next_line()?;
        let tabbed = match format {
            FormatKind::TextTsv => true,
            _ => first.is_some_and(|line| line.text.contains('\t')),
        };

        let mut header = None;
        let mut rows = Vec::new();

        if tabbed {
            header = first.map(split_row);
            while let Some(line) = next_line()? {
                rows.push(split_row(line));
            }
        } else {
            let mut current = first;
            while let Some(line) = current {
                rows.push(vec![line.text.trim().to_owned()]);
                current = next_line()?;
            }
        }

        debug!(%format, rows = rows.len(), tabbed, "parsed text table");
        Ok(Self {
            format,
            version,
            header,
            rows,
        })
    }

    /// The detected layout.
    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// Token from the `Version` line, if present.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Column names, for tab-separated tables.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.as_ref()?.iter().position(|column| column == name)
    }

    /// Cell at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column(column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }
}

fn split_row(line: Line<'_>) -> Vec<String> {
    line.text.split('\t').map(str::to_owned).collect()
}
