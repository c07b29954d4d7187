//! Artifact records as produced by the scanning pipeline
//!
//! Contains the gear-slot and stat-kind vocabularies and the read-only
//! artifact record the triage rules evaluate. Field and enum wire names
//! follow the GOOD-format keys the scanner emits.

mod record;
mod slot;
mod stat;

pub use record::{Artifact, ArtifactError};
pub use slot::GearSlot;
pub use stat::{StatKind, SubStat};
