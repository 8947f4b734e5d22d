use crate::commands::helpers::{invalid, persist, resolve_index_only};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::SprintError;
use crate::index::{global_index, IndexedInternship};
use crate::parser::Params;
use crate::store::{DataStore, InternshipList};
use tracing::info;

pub const USAGE: &str = "delete: Deletes an internship from the list.\n    \
    Parameters: /index INDEX\n    \
    Example: delete /index 2";

pub fn run<S: DataStore>(
    internships: &mut InternshipList,
    store: &mut S,
    params: &Params,
) -> CmdResult {
    let slot = match resolve_index_only(internships, params, "delete") {
        Ok(slot) => slot,
        Err(e @ SprintError::InvalidParameters(_)) => return invalid(&e, USAGE),
        Err(e) => return CmdResult::failure(&e),
    };

    let index = global_index(internships, slot);
    let Some(removed) = internships.remove(slot) else {
        return CmdResult::failure(&SprintError::Store(format!("no internship at {:?}", slot)));
    };
    info!(index, kind = %slot.kind, "internship deleted");

    let result = CmdResult::success()
        .with_message(CmdMessage::success(format!(
            "Noted. I've removed this internship: {}",
            removed.summary()
        )))
        .with_message(CmdMessage::info(format!(
            "Now you have {} internship(s) in the list.",
            internships.len()
        )))
        .with_affected(vec![IndexedInternship {
            index,
            internship: removed,
        }]);
    persist(store, internships, result)
}
