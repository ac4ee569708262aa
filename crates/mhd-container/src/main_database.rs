//! Main (powers) database parser.
//!
//! # Layout
//!
//! ```text
//! string   header            (contains "Powers Database")
//! string   version
//! i64/i32  date              (tick count if major >= 3, else YYYYMMDD)
//! i32      issue
//! i32      page_vol
//! string   page_vol_text
//! string   "BEGIN:ARCHETYPES"  u32 count  Archetype * count
//! string   "BEGIN:POWERSETS"   u32 count  Powerset  * count
//! string   "BEGIN:POWERS"      u32 count  Power     * count
//! string   "BEGIN:SUMMONS"     u32 count  SummonedEntity * count
//! ```
//!
//! Anything after the summons section is ignored.

use mhd_common::{BinaryReader, Error, FormatErrorKind, Result};
use mhd_records::{Archetype, Power, Powerset, SummonedEntity};
use tracing::debug;

use crate::layout::{read_header, read_records, trailing_bytes, DatabaseInfo};
use crate::{DatabaseDate, DateFormat, Section};

/// Substring the main database header must contain.
pub const MAIN_HEADER_MARKER: &str = "Powers Database";

const ENTITY: &str = "MainDatabase";

/// A decoded main database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MainDatabase {
    info: DatabaseInfo,
    issue: i32,
    page_vol: i32,
    page_vol_text: String,
    archetypes: Vec<Archetype>,
    powersets: Vec<Powerset>,
    powers: Vec<Power>,
    summons: Vec<SummonedEntity>,
    trailing_bytes: usize,
}

/// Parser position within the main database layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Header,
    Version,
    Date(DateFormat),
    Metadata,
    Section(Section),
    Done,
}

impl MainDatabase {
    /// Parse a main database from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let mut db = Self::empty();
        let mut stage = Stage::Header;

        while stage != Stage::Done {
            stage = db.step(stage, &mut reader)?;
        }

        db.trailing_bytes = trailing_bytes(&reader, ENTITY);
        Ok(db)
    }

    fn empty() -> Self {
        Self {
            info: DatabaseInfo {
                header: String::new(),
                version: String::new(),
                date: None,
            },
            issue: 0,
            page_vol: 0,
            page_vol_text: String::new(),
            archetypes: Vec::new(),
            powersets: Vec::new(),
            powers: Vec::new(),
            summons: Vec::new(),
            trailing_bytes: 0,
        }
    }

    /// Consume one stage of the layout and return the next.
    fn step(&mut self, stage: Stage, reader: &mut BinaryReader<'_>) -> Result<Stage> {
        let mut r = reader.record(ENTITY);

        let next = match stage {
            Stage::Header => {
                self.info.header = read_header(&mut r, MAIN_HEADER_MARKER)?;
                Stage::Version
            }
            Stage::Version => {
                self.info.version = r.string("version")?;
                Stage::Date(DateFormat::for_version(&self.info.version))
            }
            Stage::Date(format) => {
                debug!(?format, version = %self.info.version, "reading main database date");
                self.info.date = Some(format.read(&mut r)?);
                Stage::Metadata
            }
            Stage::Metadata => {
                self.issue = r.i32("issue")?;
                self.page_vol = r.i32("page_vol")?;
                self.page_vol_text = r.string("page_vol_text")?;
                Stage::Section(Section::ORDER[0])
            }
            Stage::Section(section) => {
                let offset = r.position();
                let marker = r.string("section_marker")?;
                if marker != section.marker() {
                    return Err(Error::format(
                        offset,
                        FormatErrorKind::InvalidSectionMarker {
                            expected: section.marker(),
                            found: marker,
                        },
                    )
                    .push_frame("MainDatabase.section_marker"));
                }

                let count = r.u32(section.count_field())?;
                debug!(%section, count, "reading section");
                self.read_section(section, count, reader)?;

                section.next().map_or(Stage::Done, Stage::Section)
            }
            Stage::Done => Stage::Done,
        };

        Ok(next)
    }

    fn read_section(
        &mut self,
        section: Section,
        count: u32,
        reader: &mut BinaryReader<'_>,
    ) -> Result<()> {
        let frame = section.frame();
        match section {
            Section::Archetypes => self.archetypes = read_records(reader, count, frame)?,
            Section::Powersets => self.powersets = read_records(reader, count, frame)?,
            Section::Powers => self.powers = read_records(reader, count, frame)?,
            Section::Summons => self.summons = read_records(reader, count, frame)?,
        }
        Ok(())
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

    /// The revision date.
    pub fn date(&self) -> Option<&DatabaseDate> {
        self.info.date.as_ref()
    }

    /// Game issue number the data was extracted from.
    pub fn issue(&self) -> i32 {
        self.issue
    }

    /// Page/volume number within the issue.
    pub fn page_vol(&self) -> i32 {
        self.page_vol
    }

    /// Page/volume display text.
    pub fn page_vol_text(&self) -> &str {
        &self.page_vol_text
    }

    /// Archetypes in stream order.
    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// Powersets in stream order.
    pub fn powersets(&self) -> &[Powerset] {
        &self.powersets
    }

    /// Powers in stream order.
    pub fn powers(&self) -> &[Power] {
        &self.powers
    }

    /// Summoned entities in stream order.
    pub fn summons(&self) -> &[SummonedEntity] {
        &self.summons
    }

    /// Record count of each section, in stream order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, usize)> + '_ {
        Section::ORDER.into_iter().map(move |section| {
            let count = match section {
                Section::Archetypes => self.archetypes.len(),
                Section::Powersets => self.powersets.len(),
                Section::Powers => self.powers.len(),
                Section::Summons => self.summons.len(),
            };
            (section, count)
        })
    }

    /// Bytes after the summons section that were not decoded.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mhd_common::{BinaryWriter, Encode, WireEnum};
    use mhd_records::{ClassType, EntityType, PowerType, SetType};

    use super::*;

    fn write_preamble(w: &mut BinaryWriter, version: &str) {
        w.write_string("Mids Reborn Powers Database").write_string(version);
        w.write_i32(20_190_704);
        w.write_i32(27).write_i32(0).write_string("Issue 27");
    }

    fn archetype(name: &str) -> Archetype {
        Archetype {
            display_name: name.into(),
            hitpoints: 1000,
            hp_cap: 1500.0,
            description_long: String::new(),
            resistance_cap: 75.0,
            origins: vec!["Science".into()],
            class_name: format!("Class_{name}"),
            class_type: ClassType::Hero,
            column: 0,
            description_short: String::new(),
            primary_group: String::new(),
            secondary_group: String::new(),
            playable: true,
            recharge_cap: 5.0,
            damage_cap: 4.0,
            recovery_cap: 5.0,
            regen_cap: 20.0,
            base_recovery: 1.67,
            base_regen: 1.0,
            base_threat: 1.0,
            perception_cap: 1153.0,
        }
    }

    fn powerset(archetype_index: i32) -> Powerset {
        Powerset {
            static_index: 0,
            archetype_index,
            set_type: SetType::Primary,
            image_name: String::new(),
            full_name: "Blaster_Ranged.Fire_Blast".into(),
            set_name: "Fire_Blast".into(),
            display_name: "Fire Blast".into(),
            description: String::new(),
            sub_name: String::new(),
            class_name: String::new(),
            trunk_set_uid: String::new(),
            link_secondary_uid: String::new(),
            mutex_set_uids: Vec::new(),
        }
    }

    fn write_power(w: &mut BinaryWriter, powerset_index: i32) {
        w.write_i32(0)
            .write_string("Blaster_Ranged.Fire_Blast.Flares")
            .write_string("Blaster_Ranged")
            .write_string("Fire_Blast")
            .write_string("Flares")
            .write_string("Flares")
            .write_i32(0)
            .write_i32(PowerType::Click.to_wire())
            .write_f32(1.0);
        w.write_i32(0);
        for _ in 0..6 {
            w.write_f32(1.0);
        }
        w.write_i32(0).write_i32(1).write_i32(powerset_index);
        w.write_string("").write_string("");
        w.write_i32(0).write_i32(0);
        w.write_i32(-1);
        w.write_i32(0);
        w.write_bool(false).write_i32(0);
    }

    fn summon() -> SummonedEntity {
        SummonedEntity {
            uid: "Pets_Fire_Imp".into(),
            display_name: "Fire Imp".into(),
            entity_type: EntityType::Pet,
            class_name: "Class_Minion_Pets".into(),
            archetype_index: 0,
            powerset_names: vec!["Pets.Fire_Imps".into()],
            powerset_indices: vec![1],
            upgrade_power_names: Vec::new(),
        }
    }

    fn full_database(version: &str) -> Vec<u8> {
        let mut w = BinaryWriter::new();
        write_preamble(&mut w, version);
        w.write_string("BEGIN:ARCHETYPES").write_u32(2);
        archetype("Blaster").encode(&mut w);
        archetype("Defender").encode(&mut w);
        w.write_string("BEGIN:POWERSETS").write_u32(2);
        powerset(0).encode(&mut w);
        powerset(1).encode(&mut w);
        w.write_string("BEGIN:POWERS").write_u32(1);
        write_power(&mut w, 1);
        w.write_string("BEGIN:SUMMONS").write_u32(1);
        summon().encode(&mut w);
        w.into_inner()
    }

    #[test]
    fn test_parse_main_database() {
        let bytes = full_database("2.9.0.0");
        let db = MainDatabase::parse(&bytes).unwrap();

        assert_eq!(db.header(), "Mids Reborn Powers Database");
        assert_eq!(db.version(), "2.9.0.0");
        assert_eq!(db.date(), Some(&DatabaseDate::Literal(20_190_704)));
        assert_eq!(db.issue(), 27);
        assert_eq!(db.page_vol_text(), "Issue 27");
        assert_eq!(db.archetypes().len(), 2);
        assert_eq!(db.archetypes()[1].display_name, "Defender");
        assert_eq!(db.powersets()[1].archetype_index, 1);
        assert_eq!(db.powers()[0].powerset_index, 1);
        assert_eq!(db.summons()[0], summon());
        assert_eq!(db.trailing_bytes(), 0);

        let counts: Vec<_> = db.sections().collect();
        assert_eq!(
            counts,
            vec![
                (Section::Archetypes, 2),
                (Section::Powersets, 2),
                (Section::Powers, 1),
                (Section::Summons, 1),
            ]
        );
    }

    #[test]
    fn test_tick_date_for_major_three() {
        let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut w = BinaryWriter::new();
        w.write_string("Mids Reborn Powers Database").write_string("3.6.0.1");
        w.write_i64(DatabaseDate::ticks_for(when).unwrap());
        w.write_i32(27).write_i32(7).write_string("");
        for section in Section::ORDER {
            w.write_string(section.marker()).write_u32(0);
        }
        let bytes = w.into_inner();

        let db = MainDatabase::parse(&bytes).unwrap();
        assert_eq!(db.date().and_then(DatabaseDate::datetime), Some(when));
        assert_eq!(db.page_vol(), 7);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut bytes = full_database("2.9.0.0");
        bytes.extend_from_slice(b"\x0bBEGIN:EXTRA\x00\x00");

        let db = MainDatabase::parse(&bytes).unwrap();
        assert_eq!(db.trailing_bytes(), 14);
        assert_eq!(db.summons().len(), 1);
    }

    #[test]
    fn test_missing_header_marker() {
        let mut w = BinaryWriter::new();
        w.write_string("Mids Reborn Enhancement Database");
        let bytes = w.into_inner();

        let err = MainDatabase::parse(&bytes).unwrap_err();
        assert!(matches!(
            err.format_kind(),
            Some(FormatErrorKind::MissingHeader { expected: "Powers Database", .. })
        ));
        assert_eq!(err.offset(), 0);
        assert_eq!(err.trail().path(), "MainDatabase.header");
    }

    #[test]
    fn test_unexpected_second_section_marker() {
        let mut w = BinaryWriter::new();
        write_preamble(&mut w, "2.9.0.0");
        w.write_string("BEGIN:ARCHETYPES").write_u32(1);
        archetype("Blaster").encode(&mut w);
        let marker_offset = w.len();
        // Powers where powersets must be, followed by data that would decode
        w.write_string("BEGIN:POWERS").write_u32(1);
        powerset(0).encode(&mut w);
        let bytes = w.into_inner();

        let err = MainDatabase::parse(&bytes).unwrap_err();
        match err.format_kind() {
            Some(FormatErrorKind::InvalidSectionMarker { expected, found }) => {
                assert_eq!(*expected, "BEGIN:POWERSETS");
                assert_eq!(found, "BEGIN:POWERS");
            }
            other => panic!("expected invalid section marker, got {other:?}"),
        }
        assert_eq!(err.offset(), marker_offset);
        assert!(err.to_string().contains("invalid section marker"));
    }

    #[test]
    fn test_truncated_after_preamble_is_eof() {
        let mut w = BinaryWriter::new();
        w.write_string("Mids Reborn Powers Database").write_string("2.9.0.0");
        w.write_i32(20_190_704);
        let bytes = w.into_inner();

        let err = MainDatabase::parse(&bytes).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.offset(), bytes.len());
        assert_eq!(err.trail().path(), "MainDatabase.issue");
    }

    #[test]
    fn test_truncated_section_count_names_section() {
        let mut w = BinaryWriter::new();
        write_preamble(&mut w, "2.9.0.0");
        w.write_string("BEGIN:ARCHETYPES");
        let bytes = w.into_inner();

        let err = MainDatabase::parse(&bytes).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.trail().path(), "MainDatabase.archetypes.count");
    }

    #[test]
    fn test_bad_record_reports_section_and_index() {
        let mut bytes = full_database("2.9.0.0");
        // Cut inside the summon record
        bytes.truncate(bytes.len() - 3);

        let err = MainDatabase::parse(&bytes).unwrap_err();
        assert!(err.is_eof());
        assert!(err
            .trail()
            .path()
            .starts_with("MainDatabase.summons[0] > SummonedEntity."));
    }

    #[test]
    fn test_corrupt_section_count_is_eof() {
        let mut w = BinaryWriter::new();
        write_preamble(&mut w, "2.9.0.0");
        w.write_string("BEGIN:ARCHETYPES").write_u32(0);
        w.write_string("BEGIN:POWERSETS").write_u32(0);
        w.write_string("BEGIN:POWERS").write_u32(u32::MAX);
        let mut bytes = w.into_inner();
        bytes.resize(bytes.len() + (1 << 20), 0);

        let err = MainDatabase::parse(&bytes).unwrap_err();
        assert!(err.is_eof());
        assert!(err
            .trail()
            .path()
            .starts_with("MainDatabase.powers[0] > Power.exclusion_ids"));
    }
}
