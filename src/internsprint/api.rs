//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every UI. It owns the record store, the user profile and the persistence backend.
//!
//! ## Role and Responsibilities
//!
//! - **Parses** one line of input into a command and its parameters
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Only parse failures come back as `Err`; by then no command exists to report them.
//! Everything after parsing, including persistence failures, is a `CmdResult`.
//!
//! ## Generic Over DataStore
//!
//! `SprintApi<S: DataStore>` runs on `FileStore` in the binary and on `InMemoryStore`
//! in tests.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Kind, UserProfile};
use crate::parser::{self, CommandWord, ParsedCommand};
use crate::store::{DataStore, InternshipList};
use tracing::info;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct SprintApi<S: DataStore> {
    store: S,
    internships: InternshipList,
    profile: UserProfile,
}

impl<S: DataStore> SprintApi<S> {
    /// An api with nothing loaded yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            internships: InternshipList::new(),
            profile: UserProfile::default(),
        }
    }

    /// Creates the api and loads records and profile from `store`.
    pub fn open(store: S) -> Result<Self> {
        let mut api = Self::new(store);
        api.load()?;
        Ok(api)
    }

    /// Replaces the in-memory state with what the store holds. On error the state is
    /// left as it was.
    pub fn load(&mut self) -> Result<()> {
        let internships = self.store.load()?;
        let profile = self.store.load_profile()?;
        info!(count = internships.len(), "internships loaded");
        self.internships = internships;
        self.profile = profile;
        Ok(())
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parser::parse(input)?;
        Ok(self.dispatch(command))
    }

    pub fn dispatch(&mut self, command: ParsedCommand) -> CmdResult {
        let ParsedCommand { word, params } = command;
        info!(command = %word, params = params.len(), "dispatching");
        let store = &mut self.store;
        let internships = &mut self.internships;

        match word {
            CommandWord::AddSoftware => {
                commands::add::run(Kind::Software, internships, store, &params)
            }
            CommandWord::AddHardware => {
                commands::add::run(Kind::Hardware, internships, store, &params)
            }
            CommandWord::AddGeneral => {
                commands::add::run(Kind::General, internships, store, &params)
            }
            CommandWord::Edit => commands::edit::run(internships, store, &params),
            CommandWord::Delete => commands::delete::run(internships, store, &params),
            CommandWord::List => commands::list::run(internships, &params),
            CommandWord::Desc => commands::describe::run(internships, &params),
            CommandWord::Help => commands::help::run(&params),
            CommandWord::Bye => commands::bye::run(internships, &self.profile, store),
            CommandWord::My => commands::profile::run(&mut self.profile, store, &params),
        }
    }

    /// Saves everything the way `bye` does, for when input ends without it.
    pub fn shutdown(&mut self) -> CmdResult {
        commands::bye::run(&self.internships, &self.profile, &mut self.store)
    }

    pub fn internships(&self) -> &InternshipList {
        &self.internships
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
