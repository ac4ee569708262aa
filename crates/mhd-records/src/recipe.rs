//! Recipe records.

use mhd_common::array::write_counted_array;
use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::RecipeRarity;

/// Crafting requirements for one level of a recipe.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeEntry {
    pub level: i32,
    pub buy_cost: i32,
    pub craft_cost: i32,
    pub craft_cost_memorized: i32,
    pub salvage_names: Vec<String>,
    pub salvage_counts: Vec<i32>,
    /// Positions of the required salvage in the salvage list.
    pub salvage_indices: Vec<i32>,
}

impl Decode for RecipeEntry {
    const NAME: &'static str = "RecipeEntry";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            level: r.i32("level")?,
            buy_cost: r.i32("buy_cost")?,
            craft_cost: r.i32("craft_cost")?,
            craft_cost_memorized: r.i32("craft_cost_memorized")?,
            salvage_names: r.counted_strings("salvage_names")?,
            salvage_counts: r.counted_i32s("salvage_counts")?,
            salvage_indices: r.counted_i32s("salvage_indices")?,
        })
    }
}

impl Encode for RecipeEntry {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_i32(self.level)
            .write_i32(self.buy_cost)
            .write_i32(self.craft_cost)
            .write_i32(self.craft_cost_memorized);
        write_counted_array(w, &self.salvage_names, |w, name| {
            w.write_string(name);
        });
        write_counted_array(w, &self.salvage_counts, |w, count| {
            w.write_i32(*count);
        });
        write_counted_array(w, &self.salvage_indices, |w, index| {
            w.write_i32(*index);
        });
    }
}

/// A crafting recipe producing an enhancement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub rarity: RecipeRarity,
    pub internal_name: String,
    /// Position of the produced enhancement in the enhancement list.
    pub enhancement_index: i32,
    pub enhancement_uid: String,
    pub external_name: String,
    pub is_generic: bool,
    pub is_virtual: bool,
    pub entries: Vec<RecipeEntry>,
}

impl Decode for Recipe {
    const NAME: &'static str = "Recipe";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            rarity: r.enumeration("rarity")?,
            internal_name: r.string("internal_name")?,
            enhancement_index: r.i32("enhancement_index")?,
            enhancement_uid: r.string("enhancement_uid")?,
            external_name: r.string("external_name")?,
            is_generic: r.bool("is_generic")?,
            is_virtual: r.bool("is_virtual")?,
            entries: r.counted_records("entries")?,
        })
    }
}

impl Encode for Recipe {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_i32(self.rarity.to_wire())
            .write_string(&self.internal_name)
            .write_i32(self.enhancement_index)
            .write_string(&self.enhancement_uid)
            .write_string(&self.external_name)
            .write_bool(self.is_generic)
            .write_bool(self.is_virtual);
        write_counted_array(w, &self.entries, |w, entry| entry.encode(w));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_roundtrip() {
        let recipe = Recipe {
            rarity: RecipeRarity::Rare,
            internal_name: "Crafted_Thunderstrike_A".into(),
            enhancement_index: 400,
            enhancement_uid: "Crafted_Thunderstrike_A".into(),
            external_name: "Thunderstrike: Accuracy/Damage".into(),
            is_generic: false,
            is_virtual: false,
            entries: vec![RecipeEntry {
                level: 30,
                buy_cost: 125_000,
                craft_cost: 54_500,
                craft_cost_memorized: 27_250,
                salvage_names: vec!["S_Ruby".into(), "S_InanimateCarbonRod".into()],
                salvage_counts: vec![1, 1],
                salvage_indices: vec![22, 31],
            }],
        };

        let bytes = recipe.to_bytes();
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(Recipe::decode(&mut reader).unwrap(), recipe);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_unknown_rarity_is_format_error() {
        let bytes = 4i32.to_le_bytes();

        let err = Recipe::decode(&mut BinaryReader::new(&bytes)).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.offset(), 0);
        assert!(err.to_string().contains("unrecognized RecipeRarity value 4"));
    }
}
