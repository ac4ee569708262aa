//! MHD - decoder library for Mids' Hero Designer game-data databases.
//!
//! This crate provides a unified interface to the MHD crates.
//!
//! # Crates
//!
//! - [`mhd_common`] - Binary reader/writer, array conventions, errors
//! - [`mhd_records`] - Record decoders (archetypes, powers, enhancements, ...)
//! - [`mhd_container`] - Main, enhancement, recipe and salvage database parsers
//! - [`mhd_text`] - Format detection and text tables
//!
//! # Example
//!
//! ```no_run
//! use mhd::prelude::*;
//!
//! let document = mhd::load_file(DatabaseKind::Main, "I12.mhd")?;
//! if let Document::Main(db) = &document {
//!     for power in db.powers() {
//!         println!("{} ({})", power.display_name, power.full_name);
//!     }
//! }
//! # Ok::<(), mhd::Error>(())
//! ```
//!
//! Parses share no state, so many files can be decoded concurrently.

mod document;
mod error;
mod kind;

// Re-export all sub-crates
pub use mhd_common as common;
pub use mhd_container as container;
pub use mhd_records as records;
pub use mhd_text as text;

pub use document::{load, load_file, Document};
pub use error::{Error, Result};
pub use kind::{DatabaseKind, UnknownKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{load, load_file, DatabaseKind, Document};
    pub use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode};
    pub use mhd_container::{
        DatabaseDate, EnhancementDatabase, MainDatabase, RecipeDatabase, SalvageDatabase, Section,
    };
    pub use mhd_records::{
        Archetype, Effect, Enhancement, EnhancementSet, Power, Powerset, Recipe, Salvage,
        SummonedEntity,
    };
    pub use mhd_text::{detect, FormatKind, TextTable};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
