use crate::commands::helpers::{check_keys, invalid, persist};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SprintError};
use crate::index::{global_index, IndexedInternship, Slot};
use crate::model::{Field, Internship, Kind};
use crate::parser::Params;
use crate::store::{DataStore, InternshipList};
use tracing::info;

pub const SOFTWARE_USAGE: &str = "add software: Adds a software internship.\n    \
    Parameters: /c COMPANY_NAME /r ROLE /tech TECH_STACK [/eli ELIGIBILITY] [/desc DESCRIPTION] \
    [/ex EXPECTATIONS] [/status STATUS]\n    \
    Example: add software /c Google /r Software Engineer Intern /tech Java, Python";

pub const HARDWARE_USAGE: &str = "add hardware: Adds a hardware internship.\n    \
    Parameters: /c COMPANY_NAME /r ROLE /hardtech HARDWARE_TECHNOLOGIES [/eli ELIGIBILITY] \
    [/desc DESCRIPTION] [/ex EXPECTATIONS] [/status STATUS]\n    \
    Example: add hardware /c Intel /r Embedded Systems Intern /hardtech Microcontrollers, PCB";

pub const GENERAL_USAGE: &str = "add general: Adds a general internship.\n    \
    Parameters: /c COMPANY_NAME /r ROLE /dept DEPARTMENT [/eli ELIGIBILITY] [/desc DESCRIPTION] \
    [/ex EXPECTATIONS] [/status STATUS]\n    \
    Example: add general /c UBS /r Business Analyst Intern /dept Finance";

const OPTIONAL_FIELDS: [Field; 4] = [
    Field::Eligibility,
    Field::Description,
    Field::Expectations,
    Field::Status,
];

pub fn usage(kind: Kind) -> &'static str {
    match kind {
        Kind::Software => SOFTWARE_USAGE,
        Kind::Hardware => HARDWARE_USAGE,
        Kind::General => GENERAL_USAGE,
    }
}

fn command_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Software => "add software",
        Kind::Hardware => "add hardware",
        Kind::General => "add general",
    }
}

/// Builds the record described by `params`, without touching the store.
fn build(kind: Kind, params: &Params) -> Result<Internship> {
    let required = [Field::Company, Field::Role, kind.variant_field()];
    let allowed: Vec<&str> = required
        .iter()
        .chain(OPTIONAL_FIELDS.iter())
        .map(|field| field.flag())
        .collect();
    check_keys(params, command_name(kind), &allowed, None)?;

    let mut values = Vec::with_capacity(required.len());
    for field in required {
        let value = params
            .get(field.flag())
            .filter(|v| !v.is_empty())
            .ok_or(SprintError::MissingField(field))?;
        values.push(value);
    }

    let mut internship = Internship::new(kind, values[0], values[1], values[2]);
    for field in OPTIONAL_FIELDS {
        if let Some(value) = params.get(field.flag()) {
            internship.set(field, value)?;
        }
    }
    Ok(internship)
}

pub fn run<S: DataStore>(
    kind: Kind,
    internships: &mut InternshipList,
    store: &mut S,
    params: &Params,
) -> CmdResult {
    let internship = match build(kind, params) {
        Ok(internship) => internship,
        Err(e) => return invalid(&e, usage(kind)),
    };

    if internships.contains(&internship) {
        return CmdResult::failure(&SprintError::Duplicate);
    }

    let description = internship.to_description();
    internships.add(internship.clone());
    let slot = Slot {
        kind,
        offset: internships.sequence(kind).len() - 1,
    };
    let index = global_index(internships, slot);
    info!(%kind, index, "internship added");

    let result = CmdResult::success()
        .with_affected(vec![IndexedInternship { index, internship }])
        .with_message(CmdMessage::success("Got it. Added this internship:"))
        .with_message(CmdMessage::info(description))
        .with_message(CmdMessage::info(format!(
            "Now you have {} internship(s) in the list.",
            internships.len()
        )));
    persist(store, internships, result)
}
