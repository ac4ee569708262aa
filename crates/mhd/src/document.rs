//! Loaded documents and load dispatch.

use std::path::Path;

use mhd_container::{
    DatabaseDate, EnhancementDatabase, MainDatabase, RecipeDatabase, SalvageDatabase,
};
use mhd_text::{detect, FormatKind, TextTable};
use tracing::{debug, info};

use crate::{DatabaseKind, Result};

/// A decoded MHD file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "lowercase"))]
pub enum Document {
    Main(MainDatabase),
    Enhancement(EnhancementDatabase),
    Recipe(RecipeDatabase),
    Salvage(SalvageDatabase),
    /// A line-oriented text table, whatever kind was requested.
    Text(TextTable),
}

impl Document {
    /// The binary container kind, or `None` for text tables.
    pub fn kind(&self) -> Option<DatabaseKind> {
        match self {
            Self::Main(_) => Some(DatabaseKind::Main),
            Self::Enhancement(_) => Some(DatabaseKind::Enhancement),
            Self::Recipe(_) => Some(DatabaseKind::Recipe),
            Self::Salvage(_) => Some(DatabaseKind::Salvage),
            Self::Text(_) => None,
        }
    }

    /// The layout the document was decoded from.
    pub fn format(&self) -> FormatKind {
        match self {
            Self::Text(table) => table.format(),
            _ => FormatKind::Binary,
        }
    }

    /// The header string of a binary container.
    pub fn header(&self) -> Option<&str> {
        match self {
            Self::Main(db) => Some(db.header()),
            Self::Enhancement(db) => Some(db.header()),
            Self::Recipe(db) => Some(db.header()),
            Self::Salvage(db) => Some(db.header()),
            Self::Text(_) => None,
        }
    }

    /// The version string, if the document stores one.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Main(db) => Some(db.version()),
            Self::Enhancement(db) => Some(db.version()),
            Self::Recipe(db) => Some(db.version()),
            Self::Salvage(db) => Some(db.version()),
            Self::Text(table) => table.version(),
        }
    }

    /// The revision date, if the document stores one.
    pub fn date(&self) -> Option<&DatabaseDate> {
        match self {
            Self::Main(db) => db.date(),
            Self::Enhancement(db) => db.date(),
            Self::Recipe(db) => db.date(),
            Self::Salvage(db) => db.date(),
            Self::Text(_) => None,
        }
    }

    /// Number of records per list, in stream order.
    pub fn record_counts(&self) -> Vec<(&'static str, usize)> {
        match self {
            Self::Main(db) => db
                .sections()
                .map(|(section, count)| (section.name(), count))
                .collect(),
            Self::Enhancement(db) => vec![
                ("enhancements", db.enhancements().len()),
                ("sets", db.sets().len()),
            ],
            Self::Recipe(db) => vec![("recipes", db.recipes().len())],
            Self::Salvage(db) => vec![("salvage", db.salvage().len())],
            Self::Text(table) => vec![("rows", table.len())],
        }
    }

    /// Bytes ignored after the last decoded list.
    pub fn trailing_bytes(&self) -> usize {
        match self {
            Self::Main(db) => db.trailing_bytes(),
            Self::Enhancement(db) => db.trailing_bytes(),
            Self::Recipe(db) => db.trailing_bytes(),
            Self::Salvage(db) => db.trailing_bytes(),
            Self::Text(_) => 0,
        }
    }
}

/// Decode `data` as a database of the given kind.
///
/// Binary input goes to the container parser for `kind`; text input is
/// returned as [`Document::Text`].
pub fn load(kind: DatabaseKind, data: &[u8]) -> Result<Document> {
    let format = detect(data)?;
    debug!(%kind, %format, len = data.len(), "loading");

    let document = match format {
        FormatKind::Binary => match kind {
            DatabaseKind::Main => Document::Main(MainDatabase::parse(data)?),
            DatabaseKind::Enhancement => Document::Enhancement(EnhancementDatabase::parse(data)?),
            DatabaseKind::Recipe => Document::Recipe(RecipeDatabase::parse(data)?),
            DatabaseKind::Salvage => Document::Salvage(SalvageDatabase::parse(data)?),
        },
        text => Document::Text(TextTable::parse_as(text, data)?),
    };

    Ok(document)
}

/// Read a whole file and decode it as a database of the given kind.
pub fn load_file(kind: DatabaseKind, path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    info!(path = %path.display(), size = data.len(), "read database file");
    load(kind, &data)
}
