//! Per-slot trashability predicates
//!
//! Each predicate answers "is this artifact safe to discard" for one angle
//! (a main-stat family or a slot), with `true` meaning trashable. A slot
//! predicate composes the shared sub-predicates by simple conjunction: any
//! sub-predicate that finds a reason to keep the artifact makes the whole
//! slot predicate return `false`. The sub-predicates are kept as separate
//! functions rather than one flattened expression so each keep-reason stays
//! attributable and individually testable.

use crate::artifact::{Artifact, GearSlot, StatKind};

use super::TrashRules;

impl TrashRules {
    /// Damage-bonus goblets are kept when any crit or energy-recharge
    /// substat rolled. Artifacts whose main stat is not a damage bonus pass
    /// this particular check by default.
    pub(crate) fn damage_bonus_trashable(&self, artifact: &Artifact) -> bool {
        if !self.is_damage_bonus_main_stat(artifact.main_stat) {
            return true;
        }
        if artifact.sub_stat(StatKind::CritDamage) > 0.0
            || artifact.sub_stat(StatKind::CritRate) > 0.0
            || artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
        {
            return false;
        }
        true
    }

    /// HP% sands are kept with energy recharge, with a crit roll while a
    /// fourth substat is still open, or with both crit rolls. Healing-bonus
    /// pieces are kept when both HP% and energy recharge rolled.
    pub(crate) fn hp_main_stat_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::HpPercent && artifact.gear_slot == GearSlot::Sands {
            if artifact.sub_stat(StatKind::EnergyRecharge) > 0.0 {
                return false;
            }
            if (artifact.sub_stat(StatKind::CritRate) > 0.0
                || artifact.sub_stat(StatKind::CritDamage) > 0.0)
                && artifact.sub_stats_count == 3
            {
                return false;
            }
            if artifact.sub_stat(StatKind::CritRate) > 0.0
                && artifact.sub_stat(StatKind::CritDamage) > 0.0
            {
                return false;
            }
        } else if artifact.main_stat == StatKind::HealingBonus {
            if artifact.sub_stat(StatKind::HpPercent) > 0.0
                && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
            {
                return false;
            }
        }

        true
    }

    /// Crit main stats are never trashed
    pub(crate) fn crit_main_stat_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::CritRate || artifact.main_stat == StatKind::CritDamage {
            return false;
        }
        true
    }

    /// ATK% pieces are kept on the same substat terms as HP% sands
    pub(crate) fn attack_main_stat_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::AtkPercent {
            if artifact.sub_stat(StatKind::EnergyRecharge) > 0.0 {
                return false;
            }
            if (artifact.sub_stat(StatKind::CritRate) > 0.0
                || artifact.sub_stat(StatKind::CritDamage) > 0.0)
                && artifact.sub_stats_count == 3
            {
                return false;
            }
            if artifact.sub_stat(StatKind::CritRate) > 0.0
                && artifact.sub_stat(StatKind::CritDamage) > 0.0
            {
                return false;
            }
        }

        true
    }

    /// Energy-recharge main stats are kept on crit substats alone
    pub(crate) fn energy_recharge_main_stat_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::EnergyRecharge {
            if (artifact.sub_stat(StatKind::CritRate) > 0.0
                || artifact.sub_stat(StatKind::CritDamage) > 0.0)
                && artifact.sub_stats_count == 3
            {
                return false;
            }
            if artifact.sub_stat(StatKind::CritRate) > 0.0
                && artifact.sub_stat(StatKind::CritDamage) > 0.0
            {
                return false;
            }
        }

        true
    }

    /// Elemental-mastery keeps: an EM main stat backed by energy recharge,
    /// or a flower/plume from an EM set whose EM substat rolled and either
    /// energy recharge rolled too or a fourth substat is still open
    pub(crate) fn elemental_mastery_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::ElementalMastery
            && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
        {
            return false;
        }
        if artifact.gear_slot == GearSlot::Flower || artifact.gear_slot == GearSlot::Plume {
            let em_rolled =
                self.is_elemental_mastery_set(artifact) && artifact.sub_stat(StatKind::ElementalMastery) > 0.0;
            if em_rolled && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0 {
                return false;
            }
            if em_rolled && artifact.sub_stats_count == 3 {
                return false;
            }
        }

        true
    }

    /// Flower/plume: the main stat is fixed, so only substats matter.
    /// A finished piece (4 substats) must carry both crit rolls or the
    /// HP%+ER pair to survive; an unfinished one survives on any crit roll
    /// or the HP%+ER pair.
    pub(crate) fn sub_stats_trashable(&self, artifact: &Artifact) -> bool {
        if !self.elemental_mastery_trashable(artifact) {
            return false;
        }
        if artifact.sub_stats_count == 4 {
            if artifact.sub_stat(StatKind::CritRate) > 0.0
                && artifact.sub_stat(StatKind::CritDamage) > 0.0
            {
                return false;
            }
            if artifact.sub_stat(StatKind::HpPercent) > 0.0
                && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
            {
                return false;
            }
        } else {
            if artifact.sub_stat(StatKind::CritRate) > 0.0
                || artifact.sub_stat(StatKind::CritDamage) > 0.0
            {
                return false;
            }
            if artifact.sub_stat(StatKind::HpPercent) > 0.0
                && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
            {
                return false;
            }
        }

        true
    }

    pub(crate) fn sands_trashable(&self, artifact: &Artifact) -> bool {
        if !self.elemental_mastery_trashable(artifact) {
            return false;
        }
        if !self.hp_main_stat_trashable(artifact) {
            return false;
        }
        if !self.attack_main_stat_trashable(artifact) {
            return false;
        }
        if !self.energy_recharge_main_stat_trashable(artifact) {
            return false;
        }
        true
    }

    pub(crate) fn goblet_trashable(&self, artifact: &Artifact) -> bool {
        if artifact.main_stat == StatKind::HpPercent
            && artifact.sub_stat(StatKind::EnergyRecharge) > 0.0
        {
            return false;
        }
        if !self.damage_bonus_trashable(artifact) {
            return false;
        }
        if !self.elemental_mastery_trashable(artifact) {
            return false;
        }
        true
    }

    pub(crate) fn circlet_trashable(&self, artifact: &Artifact) -> bool {
        if !self.elemental_mastery_trashable(artifact) {
            return false;
        }
        if !self.hp_main_stat_trashable(artifact) {
            return false;
        }
        if !self.crit_main_stat_trashable(artifact) {
            return false;
        }
        true
    }
}
