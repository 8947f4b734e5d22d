//! The `my` command, which keeps free-text preferences about the user.

use crate::commands::helpers::{check_keys, invalid, persist_profile};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::UserProfile;
use crate::parser::Params;
use crate::store::DataStore;
use tracing::info;

pub const USAGE: &str = "my: Edits your user profile.\n    \
    Parameters: [/name YOUR_NAME] [/c COMPANIES_YOU_PREFER] [/r ROLES_YOU_PREFER] \
    [/pay PAY_RANGE]\n    \
    [/ind INDUSTRIES_YOU_PREFER] [/time TIME_RANGE] [/ygoals YEARLY_GOALS] \
    [/mgoals MONTHLY_GOALS]\n    \
    Example: my /name John Doe /c Google, Jane Street /pay 2000-3000";

const FLAGS: [&str; 8] = [
    "/name", "/c", "/r", "/pay", "/ind", "/time", "/ygoals", "/mgoals",
];

fn field_mut<'a>(profile: &'a mut UserProfile, flag: &str) -> Option<&'a mut String> {
    match flag {
        "/name" => Some(&mut profile.name),
        "/c" => Some(&mut profile.preferred_companies),
        "/r" => Some(&mut profile.preferred_roles),
        "/pay" => Some(&mut profile.target_stipend_range),
        "/ind" => Some(&mut profile.preferred_industries),
        "/time" => Some(&mut profile.internship_date_range),
        "/ygoals" => Some(&mut profile.yearly_goals),
        "/mgoals" => Some(&mut profile.monthly_goals),
        _ => None,
    }
}

pub fn run<S: DataStore>(profile: &mut UserProfile, store: &mut S, params: &Params) -> CmdResult {
    if let Err(e) = check_keys(params, "my", &FLAGS, None) {
        return invalid(&e, USAGE);
    }

    for flag in FLAGS {
        if let (Some(value), Some(slot)) = (params.get(flag), field_mut(profile, flag)) {
            *slot = value.to_string();
        }
    }
    info!(fields = params.len(), "profile updated");

    let result = CmdResult::success()
        .with_message(CmdMessage::success("Your profile has been updated:"))
        .with_message(CmdMessage::info(profile.to_string()))
        .with_profile(profile.clone());
    persist_profile(store, profile, result)
}
