//! Container parsers for MHD database files.
//!
//! Four binary document kinds exist. Each starts with a header string that
//! names the kind, followed by a version string and a kind-specific preamble,
//! then one or more count-prefixed record lists:
//!
//! | kind        | type                    | records                              |
//! |-------------|-------------------------|--------------------------------------|
//! | main        | [`MainDatabase`]        | archetypes, powersets, powers, summons |
//! | enhancement | [`EnhancementDatabase`] | enhancements, enhancement sets       |
//! | recipe      | [`RecipeDatabase`]      | recipes                              |
//! | salvage     | [`SalvageDatabase`]     | salvage                              |
//!
//! The major component of the version string decides how the date is stored
//! (see [`DateFormat`]). Bytes after the last list are ignored and reported
//! through `trailing_bytes()`.
//!
//! # Example
//!
//! ```no_run
//! use mhd_container::MainDatabase;
//!
//! let data = std::fs::read("I12.mhd")?;
//! let db = MainDatabase::parse(&data)?;
//!
//! println!("{} (issue {})", db.version(), db.issue());
//! for (section, count) in db.sections() {
//!     println!("  {section}: {count}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod enhancement_database;
mod layout;
mod main_database;
mod recipe_database;
mod salvage_database;
mod section;
mod version;

pub use enhancement_database::{
    EnhancementDatabase, ENHANCEMENT_HEADER_MARKER, LEGACY_VERSION_SENTINEL,
};
pub use layout::DatabaseInfo;
pub use main_database::{MainDatabase, MAIN_HEADER_MARKER};
pub use recipe_database::{RecipeDatabase, RECIPE_HEADER_MARKER};
pub use salvage_database::{SalvageDatabase, SALVAGE_HEADER_MARKER};
pub use section::Section;
pub use version::{
    major_version, DatabaseDate, DateFormat, TICKS_PER_SECOND, TICK_DATE_MAJOR, UNIX_EPOCH_TICKS,
};
