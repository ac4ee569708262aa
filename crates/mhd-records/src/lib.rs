//! Record decoders for MHD game-data entities.
//!
//! Each entity kind has a fixed, ordered schema of primitive reads. Decoders
//! are version-agnostic and consume exactly the bytes of one record.
//!
//! # Index references
//!
//! Cross-entity references are zero-based positions into a sibling list
//! decoded earlier in the same document:
//!
//! - [`Powerset::archetype_index`] points into the archetype list
//! - [`Power::powerset_index`] points into the powerset list
//! - [`SummonedEntity::powerset_indices`] points into the powerset list
//! - [`Enhancement::set_index`] points into the enhancement set list
//!
//! They are kept as raw integers; resolving them is the caller's job.
//!
//! # Example
//!
//! ```
//! use mhd_common::{BinaryReader, Decode, Encode};
//! use mhd_records::{Salvage, SalvageOrigin, SalvageRarity, SalvageType};
//!
//! let salvage = Salvage {
//!     internal_name: "S_RuinedCircuitry".into(),
//!     external_name: "Ruined Circuitry".into(),
//!     rarity: SalvageRarity::Common,
//!     origin: SalvageOrigin::Tech,
//!     level_min: 0,
//!     level_max: 24,
//!     salvage_type: SalvageType::Component,
//!     description: String::new(),
//! };
//!
//! let bytes = salvage.to_bytes();
//! let decoded = Salvage::decode(&mut BinaryReader::new(&bytes))?;
//! assert_eq!(decoded, salvage);
//! # Ok::<(), mhd_common::Error>(())
//! ```

mod archetype;
mod effect;
mod enhancement;
mod enhancement_set;
mod enums;
mod power;
mod powerset;
mod recipe;
mod salvage;
mod summon;

pub use archetype::Archetype;
pub use effect::Effect;
pub use enhancement::{Enhancement, EnhancementEffect};
pub use enhancement_set::{EnhancementSet, SetBonus};
pub use enums::{
    ClassType, EffectType, EnhancementType, EntityType, PowerType, PvMode, RecipeRarity,
    SalvageOrigin, SalvageRarity, SalvageType, SetType, ToWho,
};
pub use power::Power;
pub use powerset::Powerset;
pub use recipe::{Recipe, RecipeEntry};
pub use salvage::Salvage;
pub use summon::SummonedEntity;

/// Index value meaning "no reference".
pub const NO_INDEX: i32 = -1;
