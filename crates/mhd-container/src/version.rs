//! Version-dependent layout selection.
//!
//! The version string is free-form ("2.9.0.0", "3.5.1", or empty). Only its
//! major component matters: it selects how the database date is stored.

use chrono::{DateTime, Utc};
use mhd_common::{Error, FormatErrorKind, RecordReader, Result};

/// First major version whose date is an 8-byte tick count.
pub const TICK_DATE_MAJOR: u32 = 3;

/// Ticks (100 ns units) between 0001-01-01 and the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks per second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Parse the major component of a version string.
///
/// Empty or non-numeric versions count as major version 0.
///
/// ```
/// use mhd_container::major_version;
///
/// assert_eq!(major_version("2.9.0.0"), 2);
/// assert_eq!(major_version("3.5.1"), 3);
/// assert_eq!(major_version(""), 0);
/// ```
pub fn major_version(version: &str) -> u32 {
    version
        .trim()
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
        .unwrap_or(0)
}

/// How the date following the version string is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// 8-byte count of 100 ns ticks since 0001-01-01 (major >= 3).
    Ticks,
    /// 4-byte integer literal `YYYYMMDD` (major < 3).
    Literal,
}

impl DateFormat {
    /// Select the date format for a version string.
    pub fn for_version(version: &str) -> Self {
        if major_version(version) >= TICK_DATE_MAJOR {
            Self::Ticks
        } else {
            Self::Literal
        }
    }

    /// Read a date in this format.
    pub fn read(self, r: &mut RecordReader<'_, '_>) -> Result<DatabaseDate> {
        match self {
            Self::Ticks => {
                let offset = r.position();
                let ticks = r.i64("date")?;
                DatabaseDate::from_ticks(ticks).ok_or_else(|| {
                    Error::format(offset, FormatErrorKind::InvalidDate { ticks })
                        .push_frame(format!("{}.date", r.entity()))
                })
            }
            Self::Literal => r.i32("date").map(DatabaseDate::Literal),
        }
    }
}

/// The revision date stored in a database header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatabaseDate {
    /// Tick-based date with its calendar conversion.
    Ticks { ticks: i64, datetime: DateTime<Utc> },
    /// Raw `YYYYMMDD` integer, left unconverted.
    Literal(i32),
}

impl DatabaseDate {
    /// Convert a tick count to a calendar date.
    pub fn from_ticks(ticks: i64) -> Option<Self> {
        let since_epoch = ticks.checked_sub(UNIX_EPOCH_TICKS)?;
        let seconds = since_epoch.div_euclid(TICKS_PER_SECOND);
        let nanos = (since_epoch.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
        let datetime = DateTime::from_timestamp(seconds, nanos)?;
        Some(Self::Ticks { ticks, datetime })
    }

    /// The tick count representing `datetime`, or `None` when it does not
    /// fit in an i64.
    pub fn ticks_for(datetime: DateTime<Utc>) -> Option<i64> {
        datetime
            .timestamp()
            .checked_mul(TICKS_PER_SECOND)?
            .checked_add(i64::from(datetime.timestamp_subsec_nanos() / 100))?
            .checked_add(UNIX_EPOCH_TICKS)
    }

    /// The calendar time, for tick-based dates.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Ticks { datetime, .. } => Some(*datetime),
            Self::Literal(_) => None,
        }
    }

    /// The format this date was stored in.
    pub fn format(&self) -> DateFormat {
        match self {
            Self::Ticks { .. } => DateFormat::Ticks,
            Self::Literal(_) => DateFormat::Literal,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mhd_common::{BinaryReader, BinaryWriter};

    use super::*;

    #[test]
    fn test_major_version() {
        assert_eq!(major_version("10.0"), 10);
        assert_eq!(major_version(" 3 "), 3);
        assert_eq!(major_version("v3.1"), 0);
        assert_eq!(major_version(".5"), 0);
    }

    #[test]
    fn test_date_format_selection() {
        assert_eq!(DateFormat::for_version("3.0.0.0"), DateFormat::Ticks);
        assert_eq!(DateFormat::for_version("4.1"), DateFormat::Ticks);
        assert_eq!(DateFormat::for_version("2.9.0.0"), DateFormat::Literal);
        assert_eq!(DateFormat::for_version(""), DateFormat::Literal);
    }

    #[test]
    fn test_tick_date_matches_calendar() {
        let expected = Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap();
        let ticks = DatabaseDate::ticks_for(expected).unwrap();
        assert_eq!(ticks, 638_224_290_000_000_000);

        let mut w = BinaryWriter::new();
        w.write_i64(ticks);
        let bytes = w.into_inner();
        let mut reader = BinaryReader::new(&bytes);

        let date = DateFormat::Ticks.read(&mut reader.record("Test")).unwrap();
        let decoded = date.datetime().unwrap();
        assert!((decoded - expected).num_seconds().abs() < 1);
        assert_eq!(date.format(), DateFormat::Ticks);
    }

    #[test]
    fn test_ticks_beyond_i64_are_none() {
        let far = Utc.with_ymd_and_hms(200_000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DatabaseDate::ticks_for(far), None);

        let ancient = Utc.with_ymd_and_hms(-200_000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DatabaseDate::ticks_for(ancient), None);

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let ticks = DatabaseDate::ticks_for(last).unwrap();
        assert_eq!(DatabaseDate::from_ticks(ticks).and_then(|d| d.datetime()), Some(last));
    }

    #[test]
    fn test_literal_date_left_raw() {
        let bytes = 20_190_704i32.to_le_bytes();
        let mut reader = BinaryReader::new(&bytes);

        let date = DateFormat::Literal.read(&mut reader.record("Test")).unwrap();
        assert_eq!(date, DatabaseDate::Literal(20_190_704));
        assert!(date.datetime().is_none());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_out_of_range_ticks() {
        let bytes = i64::MIN.to_le_bytes();
        let mut reader = BinaryReader::new(&bytes);

        let err = DateFormat::Ticks.read(&mut reader.record("Test")).unwrap_err();
        assert!(matches!(
            err.format_kind(),
            Some(FormatErrorKind::InvalidDate { .. })
        ));
        assert_eq!(err.trail().path(), "Test.date");
    }
}
