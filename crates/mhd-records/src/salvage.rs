//! Salvage records.

use mhd_common::{BinaryReader, BinaryWriter, Decode, Encode, Result, WireEnum};

use crate::{SalvageOrigin, SalvageRarity, SalvageType};

/// A crafting component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Salvage {
    pub internal_name: String,
    pub external_name: String,
    pub rarity: SalvageRarity,
    pub origin: SalvageOrigin,
    pub level_min: i32,
    pub level_max: i32,
    pub salvage_type: SalvageType,
    pub description: String,
}

impl Decode for Salvage {
    const NAME: &'static str = "Salvage";

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let mut r = reader.record(Self::NAME);

        Ok(Self {
            internal_name: r.string("internal_name")?,
            external_name: r.string("external_name")?,
            rarity: r.enumeration("rarity")?,
            origin: r.enumeration("origin")?,
            level_min: r.i32("level_min")?,
            level_max: r.i32("level_max")?,
            salvage_type: r.enumeration("salvage_type")?,
            description: r.string("description")?,
        })
    }
}

impl Encode for Salvage {
    fn encode(&self, w: &mut BinaryWriter) {
        w.write_string(&self.internal_name)
            .write_string(&self.external_name)
            .write_i32(self.rarity.to_wire())
            .write_i32(self.origin.to_wire())
            .write_i32(self.level_min)
            .write_i32(self.level_max)
            .write_i32(self.salvage_type.to_wire())
            .write_string(&self.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_salvage_description() {
        let salvage = Salvage {
            internal_name: "S_Ruby".into(),
            external_name: "Ruby".into(),
            rarity: SalvageRarity::Uncommon,
            origin: SalvageOrigin::Magic,
            level_min: 25,
            level_max: 40,
            salvage_type: SalvageType::Component,
            description: "A red gem.".into(),
        };
        let bytes = salvage.to_bytes();

        let err = Salvage::decode(&mut BinaryReader::new(&bytes[..bytes.len() - 1])).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.trail().path(), "Salvage.description");
        assert_eq!(err.offset(), bytes.len() - 10);
    }
}
