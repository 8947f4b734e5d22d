use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SprintError};
use crate::index::{self, Slot};
use crate::model::UserProfile;
use crate::parser::{Params, DESCRIPTION_KEY};
use crate::store::{DataStore, InternshipList};
use tracing::warn;

pub const INDEX_FLAG: &str = "/index";

pub const SAVE_SUCCESS: &str = "Your internships have been saved.";

/// The key holding the target index: `/index`, or else the leading unflagged token.
/// Giving both is rejected by [`check_keys`], since the other key is not allowed.
pub fn index_key(params: &Params) -> Option<&'static str> {
    if params.contains(INDEX_FLAG) {
        Some(INDEX_FLAG)
    } else if params.contains(DESCRIPTION_KEY) {
        Some(DESCRIPTION_KEY)
    } else {
        None
    }
}

/// Fails unless every key is in `allowed` or is `index_key`.
pub fn check_keys(
    params: &Params,
    command: &'static str,
    allowed: &[&str],
    index_key: Option<&str>,
) -> Result<()> {
    for key in params.keys() {
        if Some(key) != index_key && !allowed.contains(&key) {
            warn!(command, key, "unrecognized parameter");
            return Err(SprintError::InvalidParameters(command));
        }
    }
    Ok(())
}

/// Validates a command that takes nothing but an index, and resolves it.
pub fn resolve_index_only(
    internships: &InternshipList,
    params: &Params,
    command: &'static str,
) -> Result<Slot> {
    let key = index_key(params).ok_or(SprintError::InvalidParameters(command))?;
    check_keys(params, command, &[], Some(key))?;
    let raw = params.get(key).unwrap_or_default();
    index::resolve_str(internships, raw)
}

/// Failure result with the command's usage appended.
pub fn invalid(error: &SprintError, usage: &str) -> CmdResult {
    CmdResult::failure(error).with_message(CmdMessage::info(usage))
}

/// Saves the records, turning a failure into a failed result. The in-memory change
/// stays applied either way.
pub fn persist<S: DataStore>(
    store: &mut S,
    internships: &InternshipList,
    result: CmdResult,
) -> CmdResult {
    match store.save(internships) {
        Ok(()) => result.with_message(CmdMessage::info(SAVE_SUCCESS)),
        Err(e) => {
            warn!(error = %e, "failed to save internships");
            result.fail(&e)
        }
    }
}

/// Same as [`persist`] for the user profile.
pub fn persist_profile<S: DataStore>(
    store: &mut S,
    profile: &UserProfile,
    result: CmdResult,
) -> CmdResult {
    match store.save_profile(profile) {
        Ok(()) => result,
        Err(e) => {
            warn!(error = %e, "failed to save profile");
            result.fail(&e)
        }
    }
}
