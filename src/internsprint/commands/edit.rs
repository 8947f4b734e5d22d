//! Editing one internship in place.
//!
//! An edit either applies completely or not at all. The target is snapshotted before
//! any field is written, and the snapshot is put back when
//!
//! - a variant field is used on another variant (`/dept` on a software internship), or
//! - the edited record would equal another record in the list.

use crate::commands::helpers::{check_keys, index_key, invalid, persist};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SprintError};
use crate::index::{self, global_index, IndexedInternship, Slot};
use crate::model::{Field, Internship};
use crate::parser::Params;
use crate::store::{DataStore, InternshipList};
use tracing::{debug, info};

pub const USAGE: &str = "edit: Edits the fields of an internship.\n    \
    Parameters: /index INDEX [/c COMPANY_NAME] [/r ROLE] [/eli ELIGIBILITY] [/desc DESCRIPTION] \
    [/ex EXPECTATIONS] [/status STATUS]\n    \
    [/tech TECH_STACK] [/hardtech HARDWARE_TECHNOLOGIES] [/dept DEPARTMENT]\n    \
    Example: edit /index 1 /c Google /r Hardware Engineer /status Interviewing";

const COMMAND: &str = "edit";

/// The raw index text and the field edits, in `Field::ALL` order.
fn validate(params: &Params) -> Result<(&str, Vec<(Field, &str)>)> {
    let key = index_key(params).ok_or(SprintError::InvalidParameters(COMMAND))?;
    let flags: Vec<&str> = Field::ALL.iter().map(|field| field.flag()).collect();
    check_keys(params, COMMAND, &flags, Some(key))?;

    let raw_index = params.get(key).unwrap_or_default();
    let edits = Field::ALL
        .into_iter()
        .filter_map(|field| params.get(field.flag()).map(|value| (field, value)))
        .collect();
    Ok((raw_index, edits))
}

/// Applies `edits` to the record at `slot`, restoring it on any failure.
fn apply(
    internships: &mut InternshipList,
    slot: Slot,
    edits: &[(Field, &str)],
) -> Result<Internship> {
    let target = internships
        .get_mut(slot)
        .ok_or_else(|| SprintError::Store(format!("no internship at {:?}", slot)))?;
    let snapshot = target.clone();

    for (field, value) in edits {
        if let Err(e) = target.set(*field, *value) {
            *target = snapshot;
            return Err(e);
        }
    }
    let edited = target.clone();

    if internships.count_equal(&edited) >= 2 {
        debug!(?slot, "edit produced a duplicate, reverting");
        if let Some(target) = internships.get_mut(slot) {
            *target = snapshot;
        }
        return Err(SprintError::Duplicate);
    }
    Ok(edited)
}

pub fn run<S: DataStore>(
    internships: &mut InternshipList,
    store: &mut S,
    params: &Params,
) -> CmdResult {
    let (raw_index, edits) = match validate(params) {
        Ok(validated) => validated,
        Err(e) => return invalid(&e, USAGE),
    };

    let slot = match index::resolve_str(internships, raw_index) {
        Ok(slot) => slot,
        Err(e) => return CmdResult::failure(&e),
    };

    let edited = match apply(internships, slot, &edits) {
        Ok(edited) => edited,
        Err(e) => return CmdResult::failure(&e),
    };

    let index = global_index(internships, slot);
    info!(index, fields = edits.len(), "internship edited");
    let result = CmdResult::success()
        .with_message(CmdMessage::success("Got it. I've edited this internship:"))
        .with_message(CmdMessage::info(edited.to_description()))
        .with_affected(vec![IndexedInternship {
            index,
            internship: edited,
        }]);
    persist(store, internships, result)
}
