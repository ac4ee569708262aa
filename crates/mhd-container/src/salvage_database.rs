//! Salvage database parser.
//!
//! The salvage database stores no date: the count follows the version
//! directly.

use mhd_common::{BinaryReader, Result};
use mhd_records::Salvage;
use tracing::debug;

use crate::layout::{read_header, read_records, trailing_bytes, DatabaseInfo};

/// Substring the salvage database header must contain.
pub const SALVAGE_HEADER_MARKER: &str = "Salvage Database";

const ENTITY: &str = "SalvageDatabase";

/// A decoded salvage database.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalvageDatabase {
    info: DatabaseInfo,
    salvage: Vec<Salvage>,
    trailing_bytes: usize,
}

impl SalvageDatabase {
    /// Parse a salvage database from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let mut r = reader.record(ENTITY);

        let header = read_header(&mut r, SALVAGE_HEADER_MARKER)?;
        let version = r.string("version")?;
        let count = r.u32("count")?;
        debug!(count, "reading salvage");
        let salvage = read_records(&mut reader, count, "SalvageDatabase.salvage")?;

        Ok(Self {
            info: DatabaseInfo {
                header,
                version,
                date: None,
            },
            salvage,
            trailing_bytes: trailing_bytes(&reader, ENTITY),
        })
    }

    /// Header and version. The date is always absent.
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

    /// Always `None`.
    pub fn date(&self) -> Option<&crate::DatabaseDate> {
        None
    }

    /// Salvage items in stream order.
    pub fn salvage(&self) -> &[Salvage] {
        &self.salvage
    }

    /// Bytes after the last salvage item that were not decoded.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }
}

#[cfg(test)]
mod tests {
    use mhd_common::{BinaryWriter, Encode};
    use mhd_records::{SalvageOrigin, SalvageRarity, SalvageType};

    use super::*;

    fn salvage(name: &str, rarity: SalvageRarity) -> Salvage {
        Salvage {
            internal_name: format!("S_{name}"),
            external_name: name.into(),
            rarity,
            origin: SalvageOrigin::Magic,
            level_min: 0,
            level_max: 52,
            salvage_type: SalvageType::Component,
            description: String::new(),
        }
    }

    #[test]
    fn test_parse_salvage() {
        let items = [
            salvage("SpellInk", SalvageRarity::Common),
            salvage("Ruby", SalvageRarity::Uncommon),
            salvage("PsionicManipulator", SalvageRarity::Rare),
        ];
        let mut w = BinaryWriter::new();
        w.write_string("Mids Reborn Salvage Database").write_string("1.0");
        w.write_u32(items.len() as u32);
        for item in &items {
            item.encode(&mut w);
        }
        let bytes = w.into_inner();

        let db = SalvageDatabase::parse(&bytes).unwrap();
        assert_eq!(db.version(), "1.0");
        assert!(db.date().is_none());
        assert_eq!(db.salvage(), &items);
        assert_eq!(db.trailing_bytes(), 0);
    }

    #[test]
    fn test_truncated_item() {
        let mut w = BinaryWriter::new();
        w.write_string("Salvage Database").write_string("").write_u32(2);
        salvage("Ruby", SalvageRarity::Uncommon).encode(&mut w);
        w.write_string("S_Amber");
        let bytes = w.into_inner();

        let err = SalvageDatabase::parse(&bytes).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(
            err.trail().path(),
            "SalvageDatabase.salvage[1] > Salvage.external_name"
        );
    }
}
