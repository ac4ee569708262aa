//! Enhancement records.

use mhd_common::{BinaryReader, Decode, Result};

use crate::{Effect, EnhancementType};

/// One attribute an enhancement boosts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancementEffect {
    pub mode: i32,
    pub buff_mode: i32,
    pub enhance_id: i32,
    pub enhance_sub_id: i32,
    /// Diminishing-returns schedule the boost is subject to.
    pub schedule: i32,
    pub multiplier: f32,
    /// Extra effect granted when slotted; only stored when the flag is set.
    pub fx: Option<Effect>,
}

impl Decode for EnhancementEffect {
    const NAME: &'static str = "EnhancementEffect";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        let mode = r.i32("mode")?;
        let buff_mode = r.i32("buff_mode")?;
        let enhance_id = r.i32("enhance_id")?;
        let enhance_sub_id = r.i32("enhance_sub_id")?;
        let schedule = r.i32("schedule")?;
        let multiplier = r.f32("multiplier")?;
        let fx = if r.bool("has_fx")? {
            Some(r.nested("fx")?)
        } else {
            None
        };

        Ok(Self {
            mode,
            buff_mode,
            enhance_id,
            enhance_sub_id,
            schedule,
            multiplier,
            fx,
        })
    }
}

/// A slottable enhancement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enhancement {
    pub static_index: i32,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub enhancement_type: EnhancementType,
    pub sub_type: i32,
    pub class_ids: Vec<i32>,
    pub image: String,
    /// Position of the owning set in the document's enhancement set list,
    /// or [`NO_INDEX`](crate::NO_INDEX).
    pub set_index: i32,
    pub set_uid: String,
    pub effect_chance: f32,
    pub level_min: i32,
    pub level_max: i32,
    pub unique: bool,
    pub mutex_type: i32,
    pub buff_mode: i32,
    pub effects: Vec<EnhancementEffect>,
    pub uid: String,
    pub recipe_name: String,
    pub superior: bool,
    /// Static indices of enhancements that cannot be slotted alongside this one.
    pub exclusion_ids: Vec<i32>,
}

impl Decode for Enhancement {
    const NAME: &'static str = "Enhancement";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            static_index: r.i32("static_index")?,
            name: r.string("name")?,
            short_name: r.string("short_name")?,
            description: r.string("description")?,
            enhancement_type: r.enumeration("enhancement_type")?,
            sub_type: r.i32("sub_type")?,
            class_ids: r.counted_i32s("class_ids")?,
            image: r.string("image")?,
            set_index: r.i32("set_index")?,
            set_uid: r.string("set_uid")?,
            effect_chance: r.f32("effect_chance")?,
            level_min: r.i32("level_min")?,
            level_max: r.i32("level_max")?,
            unique: r.bool("unique")?,
            mutex_type: r.i32("mutex_type")?,
            buff_mode: r.i32("buff_mode")?,
            effects: r.counted_records("effects")?,
            uid: r.string("uid")?,
            recipe_name: r.string("recipe_name")?,
            superior: r.bool("superior")?,
            exclusion_ids: r.sentinel_i32s("exclusion_ids")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use mhd_common::{BinaryWriter, WireEnum};

    use super::*;
    use crate::effect::tests::write_damage_effect;
    use crate::NO_INDEX;

    fn write_enhancement_head(w: &mut BinaryWriter) {
        w.write_i32(101)
            .write_string("Invention: Damage")
            .write_string("Dmg")
            .write_string("Increases damage.")
            .write_i32(EnhancementType::InventO.to_wire())
            .write_i32(0);
        w.write_i32(1).write_i32(26);
        w.write_string("Damage.png")
            .write_i32(NO_INDEX)
            .write_string("")
            .write_f32(0.0)
            .write_i32(10)
            .write_i32(50)
            .write_bool(false)
            .write_i32(0)
            .write_i32(0);
    }

    #[test]
    fn test_decode_enhancement_with_fx() {
        let mut w = BinaryWriter::new();
        write_enhancement_head(&mut w);
        w.write_i32(2);
        // plain boost
        w.write_i32(1)
            .write_i32(0)
            .write_i32(2)
            .write_i32(-1)
            .write_i32(0)
            .write_f32(1.0)
            .write_bool(false);
        // boost carrying an extra effect
        w.write_i32(2)
            .write_i32(0)
            .write_i32(0)
            .write_i32(-1)
            .write_i32(0)
            .write_f32(0.5)
            .write_bool(true);
        write_damage_effect(&mut w, -3.0);
        w.write_string("Crafted_Damage").write_string("Damage").write_bool(true);
        w.write_i32(4).write_i32(5).write_i32(-1);
        let bytes = w.into_inner();
        let mut reader = BinaryReader::new(&bytes);

        let enhancement = Enhancement::decode(&mut reader).unwrap();
        assert_eq!(enhancement.enhancement_type, EnhancementType::InventO);
        assert_eq!(enhancement.class_ids, vec![26]);
        assert_eq!(enhancement.set_index, NO_INDEX);
        assert_eq!(enhancement.effects.len(), 2);
        assert!(enhancement.effects[0].fx.is_none());
        assert_eq!(enhancement.effects[1].fx.as_ref().map(|fx| fx.magnitude), Some(-3.0));
        assert!(enhancement.superior);
        assert_eq!(enhancement.exclusion_ids, vec![4, 5]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_missing_exclusion_terminator() {
        let mut w = BinaryWriter::new();
        write_enhancement_head(&mut w);
        w.write_i32(0);
        w.write_string("").write_string("").write_bool(false);
        w.write_i32(4);
        let bytes = w.into_inner();

        let err = Enhancement::decode(&mut BinaryReader::new(&bytes)).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.trail().path(), "Enhancement.exclusion_ids[1]");
    }
}
