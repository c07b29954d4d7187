//! The artifact record
//!
//! A read-only snapshot of one scanned artifact. The scanning pipeline owns
//! the record's lifecycle (construction, mutation, deletion); this crate
//! only reads it. `validate` is offered so the pipeline can fail fast on a
//! record that breaks the invariants the rules assume.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GearSlot, StatKind, SubStat};

/// An artifact never carries more than four substat lines
pub const MAX_SUB_STATS: usize = 4;

/// Invariant violations `Artifact::validate` reports
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("substat count cache says {cached} but {actual} substats are present")]
    SubStatCountMismatch { cached: u8, actual: usize },

    #[error("{count} substats exceed the maximum of {MAX_SUB_STATS}")]
    TooManySubStats { count: usize },

    #[error("substat kind '{kind}' appears more than once")]
    DuplicateSubStat { kind: StatKind },
}

/// One scanned artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Equipment-set identifier, e.g. "GildedDreams"
    #[serde(rename = "setName")]
    pub set_name: String,

    #[serde(rename = "gearSlot")]
    pub gear_slot: GearSlot,

    #[serde(rename = "mainStat")]
    pub main_stat: StatKind,

    /// Rolled substat lines, 0-4, each kind at most once
    #[serde(rename = "subStats")]
    pub sub_stats: Vec<SubStat>,

    /// Cache of `sub_stats.len()`, carried as-is from the scanner's records
    #[serde(rename = "subStatsCount")]
    pub sub_stats_count: u8,

    /// Character the artifact is equipped on; empty means unequipped
    #[serde(rename = "equippedCharacter", default)]
    pub equipped_character: String,
}

impl Artifact {
    /// Build a record, deriving the substat count cache from the list
    pub fn new(
        set_name: impl Into<String>,
        gear_slot: GearSlot,
        main_stat: StatKind,
        sub_stats: Vec<SubStat>,
        equipped_character: impl Into<String>,
    ) -> Self {
        let sub_stats_count = sub_stats.len() as u8;
        Self {
            set_name: set_name.into(),
            gear_slot,
            main_stat,
            sub_stats,
            sub_stats_count,
            equipped_character: equipped_character.into(),
        }
    }

    /// Value of the substat of the given kind, or 0.0 if the artifact does
    /// not carry it. Absence is a valid zero-valued state, never an error.
    pub fn sub_stat(&self, kind: StatKind) -> f64 {
        self.sub_stats
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0.0, |s| s.value)
    }

    /// Whether the artifact is equipped on a character (whitespace-only
    /// names count as unequipped)
    pub fn is_equipped(&self) -> bool {
        !self.equipped_character.trim().is_empty()
    }

    /// Check the invariants the triage rules assume: the count cache
    /// matches the list, the list fits, and no kind repeats
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let actual = self.sub_stats.len();
        if actual > MAX_SUB_STATS {
            return Err(ArtifactError::TooManySubStats { count: actual });
        }
        if self.sub_stats_count as usize != actual {
            return Err(ArtifactError::SubStatCountMismatch {
                cached: self.sub_stats_count,
                actual,
            });
        }
        for (i, sub) in self.sub_stats.iter().enumerate() {
            if self.sub_stats[..i].iter().any(|s| s.kind == sub.kind) {
                return Err(ArtifactError::DuplicateSubStat { kind: sub.kind });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flower(sub_stats: Vec<SubStat>) -> Artifact {
        Artifact::new("GladiatorsFinale", GearSlot::Flower, StatKind::Hp, sub_stats, "")
    }

    #[test]
    fn test_sub_stat_lookup() {
        let artifact = flower(vec![
            SubStat::new(StatKind::CritRate, 3.9),
            SubStat::new(StatKind::EnergyRecharge, 5.2),
        ]);
        assert_eq!(artifact.sub_stat(StatKind::CritRate), 3.9);
        assert_eq!(artifact.sub_stat(StatKind::EnergyRecharge), 5.2);
    }

    #[test]
    fn test_sub_stat_absent_is_zero() {
        let artifact = flower(vec![SubStat::new(StatKind::CritRate, 3.9)]);
        assert_eq!(artifact.sub_stat(StatKind::CritDamage), 0.0);
        assert_eq!(flower(vec![]).sub_stat(StatKind::CritRate), 0.0);
    }

    #[test]
    fn test_new_derives_count() {
        let artifact = flower(vec![
            SubStat::new(StatKind::CritRate, 3.9),
            SubStat::new(StatKind::CritDamage, 7.8),
            SubStat::new(StatKind::Atk, 19.0),
        ]);
        assert_eq!(artifact.sub_stats_count, 3);
        assert!(artifact.validate().is_ok());
    }

    #[test]
    fn test_is_equipped_trims_whitespace() {
        let mut artifact = flower(vec![]);
        assert!(!artifact.is_equipped());
        artifact.equipped_character = "   ".to_string();
        assert!(!artifact.is_equipped());
        artifact.equipped_character = "Nahida".to_string();
        assert!(artifact.is_equipped());
    }

    #[test]
    fn test_validate_count_mismatch() {
        let mut artifact = flower(vec![SubStat::new(StatKind::CritRate, 3.9)]);
        artifact.sub_stats_count = 3;
        assert_eq!(
            artifact.validate(),
            Err(ArtifactError::SubStatCountMismatch { cached: 3, actual: 1 })
        );
    }

    #[test]
    fn test_validate_duplicate_kind() {
        let artifact = flower(vec![
            SubStat::new(StatKind::CritRate, 3.9),
            SubStat::new(StatKind::CritRate, 2.7),
        ]);
        assert_eq!(
            artifact.validate(),
            Err(ArtifactError::DuplicateSubStat { kind: StatKind::CritRate })
        );
    }

    #[test]
    fn test_validate_overlong_list() {
        let artifact = flower(vec![
            SubStat::new(StatKind::CritRate, 3.9),
            SubStat::new(StatKind::CritDamage, 7.8),
            SubStat::new(StatKind::Atk, 19.0),
            SubStat::new(StatKind::Def, 23.0),
            SubStat::new(StatKind::Hp, 299.0),
        ]);
        assert_eq!(artifact.validate(), Err(ArtifactError::TooManySubStats { count: 5 }));
    }
}
