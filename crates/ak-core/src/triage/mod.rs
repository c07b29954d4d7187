//! Trashability triage
//!
//! Entry point for the inventory pipeline: given one scanned artifact,
//! decide whether the player's builds could never want it. Equipped
//! artifacts are never trashable; everything else is judged by the
//! predicate for its gear slot.

mod catalog;
mod rules;

pub use catalog::{DAMAGE_BONUS_MAIN_STATS, ELEMENTAL_MASTERY_SETS, TrashRules};

use crate::artifact::{Artifact, GearSlot};

impl TrashRules {
    /// Decide whether `artifact` is safe to discard.
    ///
    /// `inventory` is accepted for interface compatibility with future
    /// cross-artifact rules; no current rule reads it.
    pub fn is_trashable(&self, artifact: &Artifact, _inventory: &[Artifact]) -> bool {
        if artifact.is_equipped() {
            return false;
        }
        match artifact.gear_slot {
            GearSlot::Flower | GearSlot::Plume => self.sub_stats_trashable(artifact),
            GearSlot::Sands => self.sands_trashable(artifact),
            GearSlot::Goblet => self.goblet_trashable(artifact),
            GearSlot::Circlet => self.circlet_trashable(artifact),
            // Slots this crate does not know about are not worth hoarding
            GearSlot::Unknown => true,
        }
    }
}

/// Decide trashability under the shipped catalogs.
/// See [`TrashRules::is_trashable`].
pub fn is_trashable(artifact: &Artifact, inventory: &[Artifact]) -> bool {
    TrashRules::default().is_trashable(artifact, inventory)
}
