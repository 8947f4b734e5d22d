use crate::commands::helpers::invalid;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::SprintError;
use crate::index::index_internships;
use crate::parser::Params;
use crate::store::InternshipList;

pub const USAGE: &str = "list: Lists every internship with its index.\n    \
    Example: list";

pub fn run(internships: &InternshipList, params: &Params) -> CmdResult {
    if !params.is_empty() {
        return invalid(&SprintError::InvalidParameters("list"), USAGE);
    }

    if internships.is_empty() {
        return CmdResult::success()
            .with_message(CmdMessage::info("There are no internships in your list yet."));
    }

    CmdResult::success()
        .with_message(CmdMessage::info(format!(
            "Here are the {} internship(s) in your list:",
            internships.len()
        )))
        .with_listed(index_internships(internships))
}
