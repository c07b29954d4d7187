//! Stat-kind vocabulary
//!
//! Every stat identifier the scanner emits, keyed by the GOOD-format names
//! (`critRate_`, `eleMas`, `pyro_dmg_`, ...). A trailing underscore in the
//! wire key marks a percentage stat.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A main-stat or substat kind (GOOD-format stat keys)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum StatKind {
    /// Flat HP (`hp`)
    #[serde(rename = "hp")]
    #[strum(serialize = "hp")]
    Hp,

    /// Flat ATK (`atk`)
    #[serde(rename = "atk")]
    #[strum(serialize = "atk")]
    Atk,

    /// Flat DEF (`def`)
    #[serde(rename = "def")]
    #[strum(serialize = "def")]
    Def,

    /// HP% (`hp_`)
    #[serde(rename = "hp_")]
    #[strum(serialize = "hp_")]
    HpPercent,

    /// ATK% (`atk_`)
    #[serde(rename = "atk_")]
    #[strum(serialize = "atk_")]
    AtkPercent,

    /// DEF% (`def_`)
    #[serde(rename = "def_")]
    #[strum(serialize = "def_")]
    DefPercent,

    /// Elemental Mastery (`eleMas`)
    #[serde(rename = "eleMas")]
    #[strum(serialize = "eleMas")]
    ElementalMastery,

    /// Energy Recharge% (`enerRech_`)
    #[serde(rename = "enerRech_")]
    #[strum(serialize = "enerRech_")]
    EnergyRecharge,

    /// Healing Bonus% (`heal_`)
    #[serde(rename = "heal_")]
    #[strum(serialize = "heal_")]
    HealingBonus,

    /// CRIT Rate% (`critRate_`)
    #[serde(rename = "critRate_")]
    #[strum(serialize = "critRate_")]
    CritRate,

    /// CRIT DMG% (`critDMG_`)
    #[serde(rename = "critDMG_")]
    #[strum(serialize = "critDMG_")]
    CritDamage,

    /// Physical DMG Bonus% (`physical_dmg_`)
    #[serde(rename = "physical_dmg_")]
    #[strum(serialize = "physical_dmg_")]
    PhysicalDamageBonus,

    /// Anemo DMG Bonus% (`anemo_dmg_`)
    #[serde(rename = "anemo_dmg_")]
    #[strum(serialize = "anemo_dmg_")]
    AnemoDamageBonus,

    /// Geo DMG Bonus% (`geo_dmg_`)
    #[serde(rename = "geo_dmg_")]
    #[strum(serialize = "geo_dmg_")]
    GeoDamageBonus,

    /// Electro DMG Bonus% (`electro_dmg_`)
    #[serde(rename = "electro_dmg_")]
    #[strum(serialize = "electro_dmg_")]
    ElectroDamageBonus,

    /// Hydro DMG Bonus% (`hydro_dmg_`)
    #[serde(rename = "hydro_dmg_")]
    #[strum(serialize = "hydro_dmg_")]
    HydroDamageBonus,

    /// Pyro DMG Bonus% (`pyro_dmg_`)
    #[serde(rename = "pyro_dmg_")]
    #[strum(serialize = "pyro_dmg_")]
    PyroDamageBonus,

    /// Cryo DMG Bonus% (`cryo_dmg_`)
    #[serde(rename = "cryo_dmg_")]
    #[strum(serialize = "cryo_dmg_")]
    CryoDamageBonus,

    /// Dendro DMG Bonus% (`dendro_dmg_`)
    #[serde(rename = "dendro_dmg_")]
    #[strum(serialize = "dendro_dmg_")]
    DendroDamageBonus,
}

impl StatKind {
    /// Check if this kind is one of the eight elemental/physical damage-bonus
    /// main stats in the shipped catalog
    pub const fn is_damage_bonus(&self) -> bool {
        matches!(
            self,
            StatKind::PhysicalDamageBonus
                | StatKind::AnemoDamageBonus
                | StatKind::GeoDamageBonus
                | StatKind::ElectroDamageBonus
                | StatKind::HydroDamageBonus
                | StatKind::PyroDamageBonus
                | StatKind::CryoDamageBonus
                | StatKind::DendroDamageBonus
        )
    }
}

/// One rolled substat line on an artifact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubStat {
    /// Which stat this line rolls (`stat` in the scanner's records)
    #[serde(rename = "stat")]
    pub kind: StatKind,
    pub value: f64,
}

impl SubStat {
    pub const fn new(kind: StatKind, value: f64) -> Self {
        Self { kind, value }
    }
}
