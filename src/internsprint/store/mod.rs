//! # Storage Layer
//!
//! Two things live here:
//!
//! - [`InternshipList`]: the in-memory record store. It owns one ordered sequence per
//!   [`Kind`] and hands out shared references only; every mutation goes through its
//!   methods.
//! - [`DataStore`]: the persistence abstraction. Commands call it after every mutation
//!   and `bye` calls it on exit.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON storage in the data directory
//!   - Records in `internships.json`, keyed by variant
//!   - Profile in `profile.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved snapshot
//!   - Can be switched to fail every save
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── internships.json    # {"software": [...], "hardware": [...], "general": [...]}
//! ├── profile.json        # User profile
//! └── config.json         # Optional configuration
//! ```

use crate::error::Result;
use crate::index::Slot;
use crate::model::{Internship, Kind, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the tracker state.
pub trait DataStore {
    /// Persist every record
    fn save(&mut self, internships: &InternshipList) -> Result<()>;

    /// Load every record; an absent store loads as empty
    fn load(&self) -> Result<InternshipList>;

    /// Persist the user profile
    fn save_profile(&mut self, profile: &UserProfile) -> Result<()>;

    /// Load the user profile; an absent profile loads as default
    fn load_profile(&self) -> Result<UserProfile>;
}

/// The record store: one sequence per variant, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternshipList {
    software: Vec<Internship>,
    hardware: Vec<Internship>,
    general: Vec<Internship>,
}

impl InternshipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the sequence owned by the record's variant.
    pub fn add(&mut self, internship: Internship) {
        let kind = internship.kind();
        self.sequence_mut(kind).push(internship);
        debug!(%kind, count = self.len(), "internship added");
    }

    /// Total number of records across all three sequences.
    pub fn len(&self) -> usize {
        self.software.len() + self.hardware.len() + self.general.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sequence(&self, kind: Kind) -> &[Internship] {
        match kind {
            Kind::Software => &self.software,
            Kind::Hardware => &self.hardware,
            Kind::General => &self.general,
        }
    }

    fn sequence_mut(&mut self, kind: Kind) -> &mut Vec<Internship> {
        match kind {
            Kind::Software => &mut self.software,
            Kind::Hardware => &mut self.hardware,
            Kind::General => &mut self.general,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&Internship> {
        self.sequence(slot.kind).get(slot.offset)
    }

    /// Mutable access to one record. The variant is fixed by [`Internship::set`], so a
    /// record can never end up in the wrong sequence.
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut Internship> {
        self.sequence_mut(slot.kind).get_mut(slot.offset)
    }

    /// Removes the record at `slot`, keeping the order of the others.
    pub fn remove(&mut self, slot: Slot) -> Option<Internship> {
        let sequence = self.sequence_mut(slot.kind);
        if slot.offset >= sequence.len() {
            return None;
        }
        let removed = sequence.remove(slot.offset);
        debug!(kind = %slot.kind, count = self.len(), "internship removed");
        Some(removed)
    }

    /// Iterates in global index order: software, then hardware, then general.
    pub fn iter(&self) -> impl Iterator<Item = &Internship> {
        Kind::ALL
            .into_iter()
            .flat_map(move |kind| self.sequence(kind).iter())
    }

    /// Number of stored records equal to `internship`.
    pub fn count_equal(&self, internship: &Internship) -> usize {
        self.sequence(internship.kind())
            .iter()
            .filter(|other| *other == internship)
            .count()
    }

    pub fn contains(&self, internship: &Internship) -> bool {
        self.count_equal(internship) > 0
    }

    pub fn into_records(self) -> impl Iterator<Item = Internship> {
        self.software
            .into_iter()
            .chain(self.hardware)
            .chain(self.general)
    }
}

impl FromIterator<Internship> for InternshipList {
    fn from_iter<I: IntoIterator<Item = Internship>>(iter: I) -> Self {
        let mut list = InternshipList::new();
        for internship in iter {
            list.add(internship);
        }
        list
    }
}
