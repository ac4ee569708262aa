//! Power records.

use mhd_common::{BinaryReader, Decode, Result};

use crate::{Effect, PowerType};

/// A single power belonging to a powerset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power {
    pub static_index: i32,
    /// Fully qualified name, `Group.Set.Power`.
    pub full_name: String,
    pub group_name: String,
    pub set_name: String,
    pub power_name: String,
    pub display_name: String,
    /// Level at which the power becomes available (zero-based).
    pub available_level: i32,
    pub power_type: PowerType,
    pub accuracy: f32,
    pub attack_types: Vec<String>,
    pub end_cost: f32,
    pub cast_time: f32,
    pub recharge_time: f32,
    pub activate_period: f32,
    pub range: f32,
    pub radius: f32,
    pub arc: i32,
    pub max_targets: i32,
    /// Position of the owning powerset in the document's powerset list.
    pub powerset_index: i32,
    pub description_short: String,
    pub description_long: String,
    /// Enhancement class ids that may be slotted.
    pub enhancements_allowed: Vec<i32>,
    /// Enhancement set types that may be slotted.
    pub set_types_allowed: Vec<i32>,
    /// Static indices of powers that cannot be active alongside this one.
    pub exclusion_ids: Vec<i32>,
    pub effects: Vec<Effect>,
    pub hidden_power: bool,
    pub sub_power_uids: Vec<String>,
}

impl Decode for Power {
    const NAME: &'static str = "Power";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        let static_index = r.i32("static_index")?;
        let full_name = r.string("full_name")?;
        let group_name = r.string("group_name")?;
        let set_name = r.string("set_name")?;
        let power_name = r.string("power_name")?;
        let display_name = r.string("display_name")?;
        let available_level = r.i32("available_level")?;
        let power_type = r.enumeration("power_type")?;
        let accuracy = r.f32("accuracy")?;
        let attack_types = r.counted_strings("attack_types")?;
        let end_cost = r.f32("end_cost")?;
        let cast_time = r.f32("cast_time")?;
        let recharge_time = r.f32("recharge_time")?;
        let activate_period = r.f32("activate_period")?;
        let range = r.f32("range")?;
        let radius = r.f32("radius")?;
        let arc = r.i32("arc")?;
        let max_targets = r.i32("max_targets")?;
        let powerset_index = r.i32("powerset_index")?;
        let description_short = r.string("description_short")?;
        let description_long = r.string("description_long")?;
        let enhancements_allowed = r.counted_i32s("enhancements_allowed")?;
        let set_types_allowed = r.counted_i32s("set_types_allowed")?;
        let exclusion_ids = r.sentinel_i32s("exclusion_ids")?;
        let effects = r.counted_records("effects")?;
        let hidden_power = r.bool("hidden_power")?;
        let sub_power_uids = r.counted_strings("sub_power_uids")?;

        Ok(Self {
            static_index,
            full_name,
            group_name,
            set_name,
            power_name,
            display_name,
            available_level,
            power_type,
            accuracy,
            attack_types,
            end_cost,
            cast_time,
            recharge_time,
            activate_period,
            range,
            radius,
            arc,
            max_targets,
            powerset_index,
            description_short,
            description_long,
            enhancements_allowed,
            set_types_allowed,
            exclusion_ids,
            effects,
            hidden_power,
            sub_power_uids,
        })
    }
}
