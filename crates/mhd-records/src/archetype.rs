//! Archetype records.

use mhd_common::array::write_off_by_one_array;
use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::ClassType;

/// A playable or non-playable character class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub display_name: String,
    pub hitpoints: i32,
    pub hp_cap: f32,
    pub description_long: String,
    pub resistance_cap: f32,
    /// Origins available to the class.
    ///
    /// The stream stores one extra origin past the declared count; it is
    /// consumed and not kept here.
    pub origins: Vec<String>,
    pub class_name: String,
    pub class_type: ClassType,
    /// Display column in the authoring tool's class picker.
    pub column: i32,
    pub description_short: String,
    pub primary_group: String,
    pub secondary_group: String,
    pub playable: bool,
    pub recharge_cap: f32,
    pub damage_cap: f32,
    pub recovery_cap: f32,
    pub regen_cap: f32,
    pub base_recovery: f32,
    pub base_regen: f32,
    pub base_threat: f32,
    pub perception_cap: f32,
}

impl Decode for Archetype {
    const NAME: &'static str = "Archetype";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        let display_name = r.string("display_name")?;
        let hitpoints = r.i32("hitpoints")?;
        let hp_cap = r.f32("hp_cap")?;
        let description_long = r.string("description_long")?;
        let resistance_cap = r.f32("resistance_cap")?;
        let origins = r.off_by_one("origins", BinaryReader::read_string)?;
        let class_name = r.string("class_name")?;
        let class_type = r.enumeration("class_type")?;
        let column = r.i32("column")?;
        let description_short = r.string("description_short")?;
        let primary_group = r.string("primary_group")?;
        let secondary_group = r.string("secondary_group")?;
        let playable = r.bool("playable")?;

        Ok(Self {
            display_name,
            hitpoints,
            hp_cap,
            description_long,
            resistance_cap,
            origins,
            class_name,
            class_type,
            column,
            description_short,
            primary_group,
            secondary_group,
            playable,
            recharge_cap: r.f32("recharge_cap")?,
            damage_cap: r.f32("damage_cap")?,
            recovery_cap: r.f32("recovery_cap")?,
            regen_cap: r.f32("regen_cap")?,
            base_recovery: r.f32("base_recovery")?,
            base_regen: r.f32("base_regen")?,
            base_threat: r.f32("base_threat")?,
            perception_cap: r.f32("perception_cap")?,
        })
    }
}

impl Encode for Archetype {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_string(&self.display_name)
            .write_i32(self.hitpoints)
            .write_f32(self.hp_cap)
            .write_string(&self.description_long)
            .write_f32(self.resistance_cap);
        write_off_by_one_array(w, &self.origins, &String::new(), |w, origin| {
            w.write_string(origin);
        });
        w.write_string(&self.class_name)
            .write_i32(self.class_type.to_wire())
            .write_i32(self.column)
            .write_string(&self.description_short)
            .write_string(&self.primary_group)
            .write_string(&self.secondary_group)
            .write_bool(self.playable)
            .write_f32(self.recharge_cap)
            .write_f32(self.damage_cap)
            .write_f32(self.recovery_cap)
            .write_f32(self.regen_cap)
            .write_f32(self.base_recovery)
            .write_f32(self.base_regen)
            .write_f32(self.base_threat)
            .write_f32(self.perception_cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blaster() -> Archetype {
        Archetype {
            display_name: "Blaster".into(),
            hitpoints: 1205,
            hp_cap: 1606.0,
            description_long: "Ranged damage dealer.".into(),
            resistance_cap: 75.0,
            origins: vec!["Magic".into(), "Mutation".into(), "Natural".into()],
            class_name: "Class_Blaster".into(),
            class_type: ClassType::Hero,
            column: 0,
            description_short: "Ranged".into(),
            primary_group: "Blaster_Ranged".into(),
            secondary_group: "Blaster_Support".into(),
            playable: true,
            recharge_cap: 5.0,
            damage_cap: 5.0,
            recovery_cap: 5.0,
            regen_cap: 20.0,
            base_recovery: 1.67,
            base_regen: 1.0,
            base_threat: 1.0,
            perception_cap: 1153.0,
        }
    }

    #[test]
    fn test_archetype_roundtrip() {
        let archetype = blaster();
        let bytes = archetype.to_bytes();
        let mut reader = BinaryReader::new(&bytes);

        assert_eq!(Archetype::decode(&mut reader).unwrap(), archetype);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_zero_origins_consume_trailing_element() {
        let mut w = BinaryWriter::new();
        w.write_string("Blaster") // 1 + 7
            .write_i32(1205) // 4
            .write_f32(1606.0) // 4
            .write_string("") // 1
            .write_f32(75.0) // 4
            .write_i32(0) // origins count: 4
            .write_string(""); // trailing origin: 1
        let origins_end = 1 + 7 + 4 + 4 + 1 + 4 + 4 + 1;
        assert_eq!(w.len(), origins_end);

        w.write_string("Class_Blaster") // 1 + 13
            .write_i32(1)
            .write_i32(0)
            .write_string("")
            .write_string("")
            .write_string("")
            .write_bool(true);
        for _ in 0..8 {
            w.write_f32(1.0);
        }
        let expected_end = origins_end + 14 + 4 + 4 + 3 + 1 + 32;
        w.write_i32(0x7EADBEEF);
        let bytes = w.into_inner();
        let mut reader = BinaryReader::new(&bytes);

        let archetype = Archetype::decode(&mut reader).unwrap();
        assert!(archetype.origins.is_empty());
        assert_eq!(archetype.class_name, "Class_Blaster");
        assert_eq!(reader.position(), expected_end);
    }

    #[test]
    fn test_unknown_class_type() {
        let mut archetype_bytes = blaster().to_bytes();
        // display_name(8) hitpoints(4) hp_cap(4) description_long(22)
        // resistance_cap(4) origins(4 + 6 + 9 + 8 + 1) class_name(14)
        let class_type_offset = 8 + 4 + 4 + 22 + 4 + 28 + 14;
        archetype_bytes[class_type_offset..class_type_offset + 4]
            .copy_from_slice(&42i32.to_le_bytes());

        let err = Archetype::decode(&mut BinaryReader::new(&archetype_bytes)).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.offset(), class_type_offset);
        assert_eq!(err.trail().path(), "Archetype.class_type");
    }

    #[test]
    fn test_truncated_archetype_names_field() {
        let bytes = blaster().to_bytes();
        let truncated = &bytes[..bytes.len() - 2];

        let err = Archetype::decode(&mut BinaryReader::new(truncated)).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.trail().path(), "Archetype.perception_cap");
    }
}
