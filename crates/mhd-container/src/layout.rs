//! Building blocks shared by every container parser.

use mhd_common::array::preallocation;
use mhd_common::{BinaryReader, Decode, Error, FormatErrorKind, RecordReader, Result, ResultExt};
use tracing::{debug, trace, warn};

use crate::DatabaseDate;

/// Header, version and date common to all database documents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatabaseInfo {
    /// The header string, which contains the kind's marker.
    pub header: String,
    /// Free-form version string, possibly empty.
    pub version: String,
    /// Revision date, for kinds and versions that store one.
    pub date: Option<DatabaseDate>,
}

/// Read the header string and check it contains `marker`.
pub(crate) fn read_header(r: &mut RecordReader<'_, '_>, marker: &'static str) -> Result<String> {
    let offset = r.position();
    let header = r.string("header")?;

    if !header.contains(marker) {
        return Err(Error::format(
            offset,
            FormatErrorKind::MissingHeader {
                expected: marker,
                found: header,
            },
        )
        .push_frame(format!("{}.header", r.entity())));
    }

    debug!(entity = r.entity(), header = %header, "header accepted");
    Ok(header)
}

/// Read `count` records, annotating failures with `frame` and the index.
pub(crate) fn read_records<T: Decode>(
    reader: &mut BinaryReader<'_>,
    count: u32,
    frame: &'static str,
) -> Result<Vec<T>> {
    let count = count as usize;
    let mut records = Vec::with_capacity(preallocation::<T>(count, reader.remaining()));

    for index in 0..count {
        let record = T::decode(reader)
            .with_context(|| format!("[{index}]"))
            .context(frame)?;
        trace!(entity = T::NAME, index, "decoded record");
        records.push(record);
    }

    Ok(records)
}

/// Number of bytes left after the last modelled field.
pub(crate) fn trailing_bytes(reader: &BinaryReader<'_>, entity: &'static str) -> usize {
    let remaining = reader.remaining();
    if remaining > 0 {
        warn!(entity, remaining, "ignoring trailing bytes");
    }
    remaining
}
