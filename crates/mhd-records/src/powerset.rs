//! Powerset records.

use mhd_common::array::write_counted_array;
use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::SetType;

/// A named group of powers owned by an archetype.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Powerset {
    pub static_index: i32,
    /// Position of the owning archetype in the document's archetype list,
    /// or [`NO_INDEX`](crate::NO_INDEX) for shared sets such as pools.
    pub archetype_index: i32,
    pub set_type: SetType,
    pub image_name: String,
    /// Fully qualified name, `Group.Set`.
    pub full_name: String,
    pub set_name: String,
    pub display_name: String,
    pub description: String,
    pub sub_name: String,
    pub class_name: String,
    pub trunk_set_uid: String,
    pub link_secondary_uid: String,
    /// Sets that cannot be picked together with this one.
    pub mutex_set_uids: Vec<String>,
}

impl Decode for Powerset {
    const NAME: &'static str = "Powerset";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            static_index: r.i32("static_index")?,
            archetype_index: r.i32("archetype_index")?,
            set_type: r.enumeration("set_type")?,
            image_name: r.string("image_name")?,
            full_name: r.string("full_name")?,
            set_name: r.string("set_name")?,
            display_name: r.string("display_name")?,
            description: r.string("description")?,
            sub_name: r.string("sub_name")?,
            class_name: r.string("class_name")?,
            trunk_set_uid: r.string("trunk_set_uid")?,
            link_secondary_uid: r.string("link_secondary_uid")?,
            mutex_set_uids: r.counted_strings("mutex_set_uids")?,
        })
    }
}

impl Encode for Powerset {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_i32(self.static_index)
            .write_i32(self.archetype_index)
            .write_i32(self.set_type.to_wire())
            .write_string(&self.image_name)
            .write_string(&self.full_name)
            .write_string(&self.set_name)
            .write_string(&self.display_name)
            .write_string(&self.description)
            .write_string(&self.sub_name)
            .write_string(&self.class_name)
            .write_string(&self.trunk_set_uid)
            .write_string(&self.link_secondary_uid);
        write_counted_array(w, &self.mutex_set_uids, |w, uid| {
            w.write_string(uid);
        });
    }
}
