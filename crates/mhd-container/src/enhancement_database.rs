//! Enhancement database parser.
//!
//! # Layout
//!
//! ```text
//! string   header            (contains "Enhancement Database")
//! string   version
//! if version is empty:
//!   u32    legacy sentinel   (discarded, no date follows)
//! else:
//!   i64/i32 date
//! u32      count             Enhancement    * count
//! u32      count             EnhancementSet * count
//! ```

use mhd_common::{BinaryReader, Result};
use mhd_records::{Enhancement, EnhancementSet};
use tracing::{debug, warn};

use crate::layout::{read_header, read_records, trailing_bytes, DatabaseInfo};
use crate::{DatabaseDate, DateFormat};

/// Substring the enhancement database header must contain.
pub const ENHANCEMENT_HEADER_MARKER: &str = "Enhancement Database";

/// Value observed in the 4 bytes that replace the date when the version is
/// empty.
pub const LEGACY_VERSION_SENTINEL: u32 = 0x4000_0000;

const ENTITY: &str = "EnhancementDatabase";

/// What sits between the version string and the enhancement count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preamble {
    /// Empty version: a 4-byte sentinel and no date.
    Legacy,
    /// Versioned: a date in the given format.
    Dated(DateFormat),
}

impl Preamble {
    fn for_version(version: &str) -> Self {
        if version.is_empty() {
            Self::Legacy
        } else {
            Self::Dated(DateFormat::for_version(version))
        }
    }
}

/// A decoded enhancement database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancementDatabase {
    info: DatabaseInfo,
    enhancements: Vec<Enhancement>,
    sets: Vec<EnhancementSet>,
    trailing_bytes: usize,
}

impl EnhancementDatabase {
    /// Parse an enhancement database from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let mut r = reader.record(ENTITY);

        let header = read_header(&mut r, ENHANCEMENT_HEADER_MARKER)?;
        let version = r.string("version")?;

        let date = match Preamble::for_version(&version) {
            Preamble::Legacy => {
                let sentinel = r.u32("legacy_sentinel")?;
                if sentinel == LEGACY_VERSION_SENTINEL {
                    debug!("skipped legacy version sentinel");
                } else {
                    warn!(sentinel = %format_args!("{sentinel:#010x}"), "unexpected legacy sentinel");
                }
                None
            }
            Preamble::Dated(format) => Some(format.read(&mut r)?),
        };

        let count = r.u32("enhancements.count")?;
        debug!(count, "reading enhancements");
        let enhancements = read_records(&mut reader, count, "EnhancementDatabase.enhancements")?;

        let count = reader.record(ENTITY).u32("sets.count")?;
        debug!(count, "reading enhancement sets");
        let sets = read_records(&mut reader, count, "EnhancementDatabase.sets")?;

        Ok(Self {
            info: DatabaseInfo {
                header,
                version,
                date,
            },
            enhancements,
            sets,
            trailing_bytes: trailing_bytes(&reader, ENTITY),
        })
    }

    /// Header, version and date.
    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }

    /// The header string.
    pub fn header(&self) -> &str {
        &self.info.header
    }

    /// The version string.
    pub fn version(&self) -> &str {
        &self.info.version
    }

    /// The revision date. Absent for legacy files with an empty version.
    pub fn date(&self) -> Option<&DatabaseDate> {
        self.info.date.as_ref()
    }

    /// Enhancements in stream order.
    pub fn enhancements(&self) -> &[Enhancement] {
        &self.enhancements
    }

    /// Enhancement sets in stream order.
    pub fn sets(&self) -> &[EnhancementSet] {
        &self.sets
    }

    /// Bytes after the last set that were not decoded.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }
}
