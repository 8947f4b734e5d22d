//! # Command Layer
//!
//! This module contains the **core business logic** of internsprint. Each command lives
//! in its own submodule and exposes a `run` function operating on the record store.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate the parsed [`Params`](crate::parser::Params) they receive
//! - Resolve global indexes and mutate the [`InternshipList`](crate::store::InternshipList)
//! - Persist through a [`DataStore`](crate::store::DataStore) after every mutation
//! - Return a [`CmdResult`] describing what happened
//!
//! ## Failures Are Results
//!
//! A command never returns `Err`. Validation, index, duplicate and persistence failures
//! all come back as a `CmdResult` with `successful == false` and error-level messages,
//! so the caller can render them and carry on. Only the parser, which runs before any
//! command exists, rejects input with an error.
//!
//! ## Testing Strategy
//!
//! Command tests use `StoreFixture` and `InMemoryStore` and assert on both the returned
//! `CmdResult` and the state of the list afterwards.
//!
//! ## Command Modules
//!
//! - [`add`]: Add software, hardware and general internships
//! - [`edit`]: Edit fields of one internship
//! - [`delete`]: Remove one internship
//! - [`list`]: List every internship with its global index
//! - [`describe`]: Show every field of one internship
//! - [`profile`]: Update the user profile (`my`)
//! - [`help`]: Usage of every command
//! - [`bye`]: Save everything and exit
//! - [`helpers`]: Shared validation and persistence

use crate::error::SprintError;
use crate::index::IndexedInternship;
use crate::model::UserProfile;
use serde::Serialize;

pub mod add;
pub mod bye;
pub mod delete;
pub mod describe;
pub mod edit;
pub mod help;
pub mod helpers;
pub mod list;
pub mod profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command did, for the UI to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records shown by read-only commands
    pub listed: Vec<IndexedInternship>,
    /// Records added, edited or removed, with their index at the time of the change
    pub affected: Vec<IndexedInternship>,
    /// Profile after a `my` command
    pub profile: Option<UserProfile>,
    /// Feedback lines, in display order
    pub messages: Vec<CmdMessage>,
    pub successful: bool,
    /// Set by `bye`; the read loop stops
    pub exit: bool,
}

impl CmdResult {
    pub fn success() -> Self {
        Self {
            successful: true,
            ..Default::default()
        }
    }

    pub fn failure(error: &SprintError) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::error(error.to_string()));
        result
    }

    /// Marks an otherwise built result as failed, appending the error.
    pub fn fail(mut self, error: &SprintError) -> Self {
        self.successful = false;
        self.exit = false;
        self.add_message(CmdMessage::error(error.to_string()));
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<IndexedInternship>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_affected(mut self, affected: Vec<IndexedInternship>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Message contents only, for callers that print plain text.
    pub fn feedback(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
