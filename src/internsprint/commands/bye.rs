use crate::commands::helpers::{persist, persist_profile};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::UserProfile;
use crate::store::{DataStore, InternshipList};

pub const USAGE: &str = "bye: Saves everything and exits the program.\n    \
    Parameters: None\n    \
    Example: bye";

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Saves records and profile. Exits only when both saves succeed.
pub fn run<S: DataStore>(
    internships: &InternshipList,
    profile: &UserProfile,
    store: &mut S,
) -> CmdResult {
    let result = persist(store, internships, CmdResult::success());
    if !result.successful {
        return result;
    }
    let result = persist_profile(store, profile, result);
    if !result.successful {
        return result;
    }
    result
        .with_message(CmdMessage::info(FAREWELL))
        .with_exit()
}
