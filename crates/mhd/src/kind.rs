//! Database kinds.

use std::fmt;
use std::str::FromStr;

use mhd_common::BinaryReader;
use mhd_container::{
    ENHANCEMENT_HEADER_MARKER, MAIN_HEADER_MARKER, RECIPE_HEADER_MARKER, SALVAGE_HEADER_MARKER,
};

/// Which container layout a binary file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DatabaseKind {
    Main,
    Enhancement,
    Recipe,
    Salvage,
}

impl DatabaseKind {
    /// Every kind, in the order `sniff` tries them.
    pub const ALL: [DatabaseKind; 4] = [Self::Main, Self::Enhancement, Self::Recipe, Self::Salvage];

    /// Substring the header string of this kind contains.
    pub const fn header_marker(self) -> &'static str {
        match self {
            Self::Main => MAIN_HEADER_MARKER,
            Self::Enhancement => ENHANCEMENT_HEADER_MARKER,
            Self::Recipe => RECIPE_HEADER_MARKER,
            Self::Salvage => SALVAGE_HEADER_MARKER,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Enhancement => "enhancement",
            Self::Recipe => "recipe",
            Self::Salvage => "salvage",
        }
    }

    /// Guess the kind from the header string of a binary container.
    ///
    /// ```
    /// use mhd::DatabaseKind;
    ///
    /// let data = b"\x1bMids Reborn Recipe Database";
    /// assert_eq!(DatabaseKind::sniff(data), Some(DatabaseKind::Recipe));
    /// assert_eq!(DatabaseKind::sniff(b"Version 1.0\n"), None);
    /// ```
    pub fn sniff(data: &[u8]) -> Option<Self> {
        let header = BinaryReader::new(data).read_string().ok()?;
        Self::ALL
            .into_iter()
            .find(|kind| header.contains(kind.header_marker()))
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown database kind {0:?} (expected main, enhancement, recipe or salvage)")]
pub struct UnknownKind(pub String);

impl FromStr for DatabaseKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "powers" => Ok(Self::Main),
            "enhancement" | "enh" => Ok(Self::Enhancement),
            "recipe" => Ok(Self::Recipe),
            "salvage" => Ok(Self::Salvage),
            _ => Err(UnknownKind(s.to_owned())),
        }
    }
}
