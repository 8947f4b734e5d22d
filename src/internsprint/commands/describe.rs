use crate::commands::helpers::{invalid, resolve_index_only};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::SprintError;
use crate::index::{global_index, IndexedInternship};
use crate::parser::Params;
use crate::store::InternshipList;

pub const USAGE: &str = "desc: Shows every field of an internship.\n    \
    Parameters: /index INDEX\n    \
    Example: desc /index 1";

pub fn run(internships: &InternshipList, params: &Params) -> CmdResult {
    let slot = match resolve_index_only(internships, params, "desc") {
        Ok(slot) => slot,
        Err(e @ SprintError::InvalidParameters(_)) => return invalid(&e, USAGE),
        Err(e) => return CmdResult::failure(&e),
    };

    let Some(internship) = internships.get(slot) else {
        return CmdResult::failure(&SprintError::Store(format!("no internship at {:?}", slot)));
    };

    CmdResult::success()
        .with_message(CmdMessage::info(internship.to_description()))
        .with_listed(vec![IndexedInternship {
            index: global_index(internships, slot),
            internship: internship.clone(),
        }])
}
