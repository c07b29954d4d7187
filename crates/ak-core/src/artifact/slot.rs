//! Gear slot vocabulary
//!
//! The five artifact slots, plus a catch-all for slot labels the scanner
//! reads but this crate does not recognize.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Equipment slot an artifact occupies (GOOD-format slot keys)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum GearSlot {
    #[serde(rename = "flower")]
    #[strum(serialize = "flower")]
    Flower,

    #[serde(rename = "plume")]
    #[strum(serialize = "plume")]
    Plume,

    /// Sands of Eon (hourglass)
    #[serde(rename = "sands")]
    #[strum(serialize = "sands")]
    Sands,

    #[serde(rename = "goblet")]
    #[strum(serialize = "goblet")]
    Goblet,

    /// Circlet of Logos (crown)
    #[serde(rename = "circlet")]
    #[strum(serialize = "circlet")]
    Circlet,

    /// Any slot label this crate does not recognize.
    /// The triage rules treat unknown slots as trashable.
    #[serde(other, rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
}

impl GearSlot {
    /// Parse a scanner slot label, mapping unrecognized labels to `Unknown`
    pub fn parse(label: &str) -> Self {
        label.parse().unwrap_or(GearSlot::Unknown)
    }
}
