//! # Global Index
//!
//! Records are stored in three sequences but users see one numbered list. The global
//! index is the 1-based position in the concatenation `software ++ hardware ++ general`.
//!
//! Given three software, one hardware and two general records:
//!
//! ```text
//! global   1  2  3 | 4 | 5  6
//! kind     s  s  s | h | g  g
//! offset   0  1  2 | 0 | 0  1
//! ```
//!
//! Resolution subtracts the software length, then the hardware length, until the index
//! falls inside a sequence. Indexes are recomputed on every call, so they shift after a
//! delete just like the list the user sees.

use crate::error::{Result, SprintError};
use crate::model::{Internship, Kind};
use crate::store::InternshipList;
use tracing::debug;

/// A resolved position: the owning sequence and the 0-based offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub kind: Kind,
    pub offset: usize,
}

/// A record paired with its global index, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedInternship {
    pub index: usize,
    pub internship: Internship,
}

/// Parses user supplied index text. Range checks happen in [`resolve`].
pub fn parse_index(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SprintError::MissingIndex);
    }
    raw.parse::<i64>()
        .map_err(|_| SprintError::InvalidIndex(raw.to_string()))
}

/// Maps a 1-based global index to its slot.
pub fn resolve(internships: &InternshipList, index: i64) -> Result<Slot> {
    let count = internships.len();
    if index < 1 || index as u64 > count as u64 {
        return Err(SprintError::IndexOutOfRange { index, count });
    }

    let mut offset = (index - 1) as usize;
    for kind in Kind::ALL {
        let len = internships.sequence(kind).len();
        if offset < len {
            debug!(index, %kind, offset, "index resolved");
            return Ok(Slot { kind, offset });
        }
        offset -= len;
    }
    // count is the sum of the sequence lengths, so the loop always returns
    Err(SprintError::IndexOutOfRange { index, count })
}

/// Parses and resolves in one step.
pub fn resolve_str(internships: &InternshipList, raw: &str) -> Result<Slot> {
    let index = parse_index(raw)?;
    resolve(internships, index)
}

/// The global index of a slot; the inverse of [`resolve`].
pub fn global_index(internships: &InternshipList, slot: Slot) -> usize {
    let preceding: usize = Kind::ALL
        .into_iter()
        .take_while(|kind| *kind != slot.kind)
        .map(|kind| internships.sequence(kind).len())
        .sum();
    preceding + slot.offset + 1
}

/// Pairs every record with its global index, in display order.
pub fn index_internships(internships: &InternshipList) -> Vec<IndexedInternship> {
    internships
        .iter()
        .enumerate()
        .map(|(i, internship)| IndexedInternship {
            index: i + 1,
            internship: internship.clone(),
        })
        .collect()
}
