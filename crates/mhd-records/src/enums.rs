//! Enumerated field types.
//!
//! All of these are stored as int32 discriminants. The values are the actual
//! binary values from the MHD files; anything else is a format error.

use mhd_common::WireEnum;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Every variant, in discriminant order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_wire(value: i32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn to_wire(self) -> i32 {
                self as i32
            }
        }
    };
}

wire_enum! {
    /// Archetype classification.
    ClassType {
        None = 0,
        Hero = 1,
        HeroEpic = 2,
        Villain = 3,
        VillainEpic = 4,
        Henchman = 5,
        Pet = 6,
    }
}

wire_enum! {
    /// The role a powerset plays for its archetype.
    SetType {
        None = 0,
        Primary = 1,
        Secondary = 2,
        Ancillary = 3,
        Inherent = 4,
        Pool = 5,
        Accolade = 6,
        Temp = 7,
        Pet = 8,
        SetBonus = 9,
        Boost = 10,
        Incarnate = 11,
        Redirect = 12,
    }
}

wire_enum! {
    /// How a power is activated.
    PowerType {
        Click = 0,
        Auto = 1,
        Toggle = 2,
        Boost = 3,
        Inspiration = 4,
        GlobalBoost = 5,
    }
}

wire_enum! {
    /// The attribute an effect modifies.
    EffectType {
        None = 0,
        Accuracy = 1,
        Damage = 2,
        DamageBuff = 3,
        Defense = 4,
        Endurance = 5,
        Heal = 6,
        HitPoints = 7,
        Mez = 8,
        MezResist = 9,
        Recharge = 10,
        Recovery = 11,
        Regeneration = 12,
        Resistance = 13,
        RunSpeed = 14,
        ToHit = 15,
        SpeedFlying = 16,
        Absorb = 17,
        EntCreate = 18,
        GrantPower = 19,
    }
}

wire_enum! {
    /// Who an effect lands on.
    ToWho {
        Unspecified = 0,
        Target = 1,
        /// The entity using the power.
        Caster = 2,
        All = 3,
    }
}

wire_enum! {
    /// Player-versus-environment / player-versus-player applicability.
    PvMode {
        Any = 0,
        PvE = 1,
        PvP = 2,
    }
}

wire_enum! {
    /// Enhancement grade.
    EnhancementType {
        None = 0,
        Normal = 1,
        InventO = 2,
        SpecialO = 3,
        SetO = 4,
    }
}

wire_enum! {
    /// Recipe drop rarity.
    RecipeRarity {
        Common = 0,
        Uncommon = 1,
        Rare = 2,
        UltraRare = 3,
    }
}

wire_enum! {
    /// Salvage drop rarity.
    SalvageRarity {
        Common = 0,
        Uncommon = 1,
        Rare = 2,
        VeryRare = 3,
    }
}

wire_enum! {
    /// Salvage origin family.
    SalvageOrigin {
        Tech = 0,
        Magic = 1,
    }
}

wire_enum! {
    /// What a salvage item is used for.
    SalvageType {
        Component = 0,
        Catalyst = 1,
        Booster = 2,
    }
}

wire_enum! {
    /// Kind of summoned entity.
    EntityType {
        Pet = 0,
        Henchman = 1,
        Pseudopet = 2,
    }
}
