//! Recipe database parser.
//!
//! # Layout
//!
//! ```text
//! string   header   (contains "Recipe Database")
//! string   version
//! i64/i32  date
//! u32      count    Recipe * count
//! ```

use mhd_common::{BinaryReader, Result};
use mhd_records::Recipe;
use tracing::debug;

use crate::layout::{read_header, read_records, trailing_bytes, DatabaseInfo};
use crate::{DatabaseDate, DateFormat};

/// Substring the recipe database header must contain.
pub const RECIPE_HEADER_MARKER: &str = "Recipe Database";

const ENTITY: &str = "RecipeDatabase";

/// A decoded recipe database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeDatabase {
    info: DatabaseInfo,
    recipes: Vec<Recipe>,
    trailing_bytes: usize,
}

impl RecipeDatabase {
    /// Parse a recipe database from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let mut r = reader.record(ENTITY);

        let header = read_header(&mut r, RECIPE_HEADER_MARKER)?;
        let version = r.string("version")?;
        let date = DateFormat::for_version(&version).read(&mut r)?;

        let count = r.u32("count")?;
        debug!(count, "reading recipes");
        let recipes = read_records(&mut reader, count, "RecipeDatabase.recipes")?;

        Ok(Self {
            info: DatabaseInfo {
                header,
                version,
                date: Some(date),
            },
            recipes,
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

    /// The revision date.
    pub fn date(&self) -> Option<&DatabaseDate> {
        self.info.date.as_ref()
    }

    /// Recipes in stream order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Bytes after the last recipe that were not decoded.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }
}
