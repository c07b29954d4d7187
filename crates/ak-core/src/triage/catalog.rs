//! Static catalogs behind the categorical rules
//!
//! Two closed lists a maintainer updates when the game adds qualifying
//! content: the equipment sets that carry elemental-mastery builds, and the
//! main stats that are elemental/physical damage bonuses. `TrashRules`
//! carries both as plain slices so tests and game-content updates can
//! substitute alternates without touching the rules.

use crate::artifact::{Artifact, StatKind};

/// Equipment sets played for elemental-mastery scaling; artifacts from
/// these sets are kept on looser substat requirements
pub const ELEMENTAL_MASTERY_SETS: [&str; 5] = [
    "WanderersTroupe",
    "GildedDreams",
    "FlowerOfParadiseLost",
    "ViridescentVenerer",
    "DeepwoodMemories",
];

/// The eight elemental/physical damage-bonus main stats
pub const DAMAGE_BONUS_MAIN_STATS: [StatKind; 8] = [
    StatKind::PhysicalDamageBonus,
    StatKind::AnemoDamageBonus,
    StatKind::GeoDamageBonus,
    StatKind::ElectroDamageBonus,
    StatKind::HydroDamageBonus,
    StatKind::PyroDamageBonus,
    StatKind::CryoDamageBonus,
    StatKind::DendroDamageBonus,
];

/// The trashability rule set, parameterized by its catalogs.
/// `Default` wires in the shipped catalogs above.
#[derive(Debug, Clone, Copy)]
pub struct TrashRules {
    pub elemental_mastery_sets: &'static [&'static str],
    pub damage_bonus_stats: &'static [StatKind],
}

impl Default for TrashRules {
    fn default() -> Self {
        Self {
            elemental_mastery_sets: &ELEMENTAL_MASTERY_SETS,
            damage_bonus_stats: &DAMAGE_BONUS_MAIN_STATS,
        }
    }
}

impl TrashRules {
    /// Check if the artifact's set is in the elemental-mastery catalog
    pub fn is_elemental_mastery_set(&self, artifact: &Artifact) -> bool {
        self.elemental_mastery_sets
            .iter()
            .any(|set| *set == artifact.set_name)
    }

    /// Check if the kind is in the damage-bonus main-stat catalog
    pub fn is_damage_bonus_main_stat(&self, kind: StatKind) -> bool {
        self.damage_bonus_stats.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{GearSlot, SubStat};

    fn goblet(set_name: &str) -> Artifact {
        Artifact::new(set_name, GearSlot::Goblet, StatKind::PyroDamageBonus, Vec::new(), "")
    }

    #[test]
    fn test_shipped_em_set_catalog() {
        let rules = TrashRules::default();
        assert!(rules.is_elemental_mastery_set(&goblet("GildedDreams")));
        assert!(rules.is_elemental_mastery_set(&goblet("ViridescentVenerer")));
        assert!(!rules.is_elemental_mastery_set(&goblet("GladiatorsFinale")));
        assert!(!rules.is_elemental_mastery_set(&goblet("")));
    }

    #[test]
    fn test_shipped_damage_bonus_catalog() {
        let rules = TrashRules::default();
        for kind in DAMAGE_BONUS_MAIN_STATS {
            assert!(rules.is_damage_bonus_main_stat(kind));
            assert!(kind.is_damage_bonus());
        }
        assert!(!rules.is_damage_bonus_main_stat(StatKind::HpPercent));
        assert!(!rules.is_damage_bonus_main_stat(StatKind::ElementalMastery));
    }

    #[test]
    fn test_catalog_override() {
        static CUSTOM_SETS: [&str; 1] = ["BrandNewEmSet"];
        let rules = TrashRules {
            elemental_mastery_sets: &CUSTOM_SETS,
            ..TrashRules::default()
        };
        assert!(rules.is_elemental_mastery_set(&goblet("BrandNewEmSet")));
        assert!(!rules.is_elemental_mastery_set(&goblet("GildedDreams")));
    }

    #[test]
    fn test_substat_override_is_ignored_by_catalogs() {
        // Catalogs key off set name and main stat only
        let rules = TrashRules::default();
        let mut artifact = goblet("GladiatorsFinale");
        artifact.sub_stats.push(SubStat::new(StatKind::ElementalMastery, 40.0));
        artifact.sub_stats_count = 1;
        assert!(!rules.is_elemental_mastery_set(&artifact));
    }
}
