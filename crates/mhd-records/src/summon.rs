//! Summoned entity records.

use mhd_common::array::write_counted_array;
use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::EntityType;

/// A pet, henchman or pseudo-pet created by a power.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonedEntity {
    pub uid: String,
    pub display_name: String,
    pub entity_type: EntityType,
    pub class_name: String,
    /// Position of the entity's archetype in the archetype list.
    pub archetype_index: i32,
    pub powerset_names: Vec<String>,
    /// Positions of the entity's powersets in the powerset list.
    pub powerset_indices: Vec<i32>,
    pub upgrade_power_names: Vec<String>,
}

impl Decode for SummonedEntity {
    const NAME: &'static str = "SummonedEntity";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            uid: r.string("uid")?,
            display_name: r.string("display_name")?,
            entity_type: r.enumeration("entity_type")?,
            class_name: r.string("class_name")?,
            archetype_index: r.i32("archetype_index")?,
            powerset_names: r.counted_strings("powerset_names")?,
            powerset_indices: r.counted_i32s("powerset_indices")?,
            upgrade_power_names: r.counted_strings("upgrade_power_names")?,
        })
    }
}

impl Encode for SummonedEntity {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_string(&self.uid)
            .write_string(&self.display_name)
            .write_i32(self.entity_type.to_wire())
            .write_string(&self.class_name)
            .write_i32(self.archetype_index);
        write_counted_array(w, &self.powerset_names, |w, name| {
            w.write_string(name);
        });
        write_counted_array(w, &self.powerset_indices, |w, index| {
            w.write_i32(*index);
        });
        write_counted_array(w, &self.upgrade_power_names, |w, name| {
            w.write_string(name);
        });
    }
}
