//! ak-core: artifact triage rules for a loot-inventory scanner
//!
//! Decides whether a scanned artifact is strictly dominated by anything a
//! player would actually build with and is therefore safe to discard. This
//! crate is the pure rule-evaluation core of a larger scanning pipeline
//! (OCR capture, storage, UI); it performs no I/O and holds no state, so
//! every call is independently safe from any thread.
//!
//! Supports `no_std` environments by disabling the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod artifact;
pub mod triage;

pub use artifact::{Artifact, ArtifactError, GearSlot, StatKind, SubStat};
pub use triage::{DAMAGE_BONUS_MAIN_STATS, ELEMENTAL_MASTERY_SETS, TrashRules, is_trashable};
