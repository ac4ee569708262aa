//! Effect records nested inside powers and enhancements.

use mhd_common::{BinaryReader, Decode, Result};

use crate::{EffectType, PvMode, ToWho};

/// A single attribute modification applied by a power.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub effect_type: EffectType,
    /// Which facet of the attribute is modified (current, max, strength, ...).
    pub aspect: i32,
    pub damage_type: i32,
    pub mez_type: i32,
    pub magnitude: f32,
    pub duration: f32,
    pub probability: f32,
    pub to_who: ToWho,
    pub pv_mode: PvMode,
    pub stacking: i32,
    pub buffed_only: bool,
    /// UID of the entity created, for `EntCreate` effects.
    pub summon_uid: String,
    pub ignore_enhancement_diversification: bool,
    pub scale: f32,
}

impl Decode for Effect {
    const NAME: &'static str = "Effect";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            effect_type: r.enumeration("effect_type")?,
            aspect: r.i32("aspect")?,
            damage_type: r.i32("damage_type")?,
            mez_type: r.i32("mez_type")?,
            magnitude: r.f32("magnitude")?,
            duration: r.f32("duration")?,
            probability: r.f32("probability")?,
            to_who: r.enumeration("to_who")?,
            pv_mode: r.enumeration("pv_mode")?,
            stacking: r.i32("stacking")?,
            buffed_only: r.bool("buffed_only")?,
            summon_uid: r.string("summon_uid")?,
            ignore_enhancement_diversification: r.bool("ignore_enhancement_diversification")?,
            scale: r.f32("scale")?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use mhd_common::{BinaryWriter, WireEnum};

    use super::*;

    /// Write a damage effect the way the authoring tool lays it out.
    pub(crate) fn write_damage_effect(w: &mut BinaryWriter, magnitude: f32) {
        w.write_i32(EffectType::Damage.to_wire())
            .write_i32(0)
            .write_i32(3)
            .write_i32(0)
            .write_f32(magnitude)
            .write_f32(0.0)
            .write_f32(1.0)
            .write_i32(ToWho::Target.to_wire())
            .write_i32(PvMode::Any.to_wire())
            .write_i32(0)
            .write_bool(false)
            .write_string("")
            .write_bool(false)
            .write_f32(1.0);
    }

    #[test]
    fn test_decode_effect() {
        let mut w = BinaryWriter::new();
        write_damage_effect(&mut w, -62.56);
        let bytes = w.into_inner();
        let mut reader = BinaryReader::new(&bytes);

        let effect = Effect::decode(&mut reader).unwrap();
        assert_eq!(effect.effect_type, EffectType::Damage);
        assert_eq!(effect.magnitude, -62.56);
        assert_eq!(effect.to_who, ToWho::Target);
        assert!(effect.summon_uid.is_empty());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_invalid_to_who() {
        let mut w = BinaryWriter::new();
        w.write_i32(EffectType::Heal.to_wire());
        w.write_i32(0).write_i32(0).write_i32(0);
        w.write_f32(1.0).write_f32(1.0).write_f32(1.0);
        w.write_i32(9);
        let bytes = w.into_inner();

        let err = Effect::decode(&mut BinaryReader::new(&bytes)).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.offset(), 28);
        assert_eq!(err.trail().path(), "Effect.to_who");
    }
}
