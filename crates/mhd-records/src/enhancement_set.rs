//! Enhancement set records.

use mhd_common::array::write_counted_array;
use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::PvMode;

/// A bonus granted for slotting several pieces of a set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBonus {
    pub special: i32,
    pub archetype_group: String,
    pub names: Vec<String>,
    /// Positions of the granted bonus powers in the power list.
    pub power_indices: Vec<i32>,
    /// Number of set pieces required.
    pub slotted: i32,
    pub pv_mode: PvMode,
}

impl Decode for SetBonus {
    const NAME: &'static str = "SetBonus";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            special: r.i32("special")?,
            archetype_group: r.string("archetype_group")?,
            names: r.counted_strings("names")?,
            power_indices: r.counted_i32s("power_indices")?,
            slotted: r.i32("slotted")?,
            pv_mode: r.enumeration("pv_mode")?,
        })
    }
}

impl Encode for SetBonus {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_i32(self.special).write_string(&self.archetype_group);
        write_counted_array(w, &self.names, |w, name| {
            w.write_string(name);
        });
        write_counted_array(w, &self.power_indices, |w, index| {
            w.write_i32(*index);
        });
        w.write_i32(self.slotted).write_i32(self.pv_mode.to_wire());
    }
}

/// A named family of enhancements with slotting bonuses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancementSet {
    pub display_name: String,
    pub short_name: String,
    pub uid: String,
    pub description: String,
    pub set_type: i32,
    /// Positions of the member enhancements in the enhancement list.
    pub enhancements: Vec<i32>,
    pub bonuses: Vec<SetBonus>,
    pub special_bonuses: Vec<SetBonus>,
    pub level_min: i32,
    pub level_max: i32,
    pub image: String,
}

impl Decode for EnhancementSet {
    const NAME: &'static str = "EnhancementSet";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            display_name: r.string("display_name")?,
            short_name: r.string("short_name")?,
            uid: r.string("uid")?,
            description: r.string("description")?,
            set_type: r.i32("set_type")?,
            enhancements: r.counted_i32s("enhancements")?,
            bonuses: r.counted_records("bonuses")?,
            special_bonuses: r.counted_records("special_bonuses")?,
            level_min: r.i32("level_min")?,
            level_max: r.i32("level_max")?,
            image: r.string("image")?,
        })
    }
}

impl Encode for EnhancementSet {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_string(&self.display_name)
            .write_string(&self.short_name)
            .write_string(&self.uid)
            .write_string(&self.description)
            .write_i32(self.set_type);
        write_counted_array(w, &self.enhancements, |w, index| {
            w.write_i32(*index);
        });
        write_counted_array(w, &self.bonuses, |w, bonus| bonus.encode(w));
        write_counted_array(w, &self.special_bonuses, |w, bonus| bonus.encode(w));
        w.write_i32(self.level_min)
            .write_i32(self.level_max)
            .write_string(&self.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhancement_set_roundtrip() {
        let set = EnhancementSet {
            display_name: "Thunderstrike".into(),
            short_name: "Thndr".into(),
            uid: "Thunderstrike".into(),
            description: String::new(),
            set_type: 6,
            enhancements: vec![400, 401, 402, 403, 404, 405],
            bonuses: vec![
                SetBonus {
                    special: -1,
                    archetype_group: String::new(),
                    names: vec!["Set_Bonus.Set_Bonus.Improved_Recovery_2".into()],
                    power_indices: vec![5102],
                    slotted: 2,
                    pv_mode: PvMode::Any,
                },
                SetBonus {
                    special: -1,
                    archetype_group: String::new(),
                    names: Vec::new(),
                    power_indices: Vec::new(),
                    slotted: 3,
                    pv_mode: PvMode::PvP,
                },
            ],
            special_bonuses: Vec::new(),
            level_min: 29,
            level_max: 49,
            image: "Thunderstrike.png".into(),
        };

        let bytes = set.to_bytes();
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(EnhancementSet::decode(&mut reader).unwrap(), set);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_bad_bonus_pv_mode() {
        let mut bonus = SetBonus {
            special: 0,
            archetype_group: String::new(),
            names: Vec::new(),
            power_indices: Vec::new(),
            slotted: 2,
            pv_mode: PvMode::PvE,
        }
        .to_bytes();
        let len = bonus.len();
        bonus[len - 4..].copy_from_slice(&5i32.to_le_bytes());

        let err = SetBonus::decode(&mut BinaryReader::new(&bonus)).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.trail().path(), "SetBonus.pv_mode");
    }
}
