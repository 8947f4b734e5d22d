//! # InternSprint Architecture
//!
//! InternSprint tracks internship applications. The library owns parsing, validation and
//! record mutation; the binary only reads lines and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Read loop, argument parsing, colored output              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses raw input, dispatches to a command                │
//! │  - Owns the record store, the profile and the persistence   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates parameters, mutates the store                  │
//! │  - Always returns a `CmdResult`, never an error             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `InternshipList`: the three per-type sequences           │
//! │  - `DataStore` trait: FileStore, InMemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Command Grammar
//!
//! Input is a command name followed by an optional unflagged token and any number of
//! `/flag value` pairs:
//!
//! ```text
//! add software /c Google /r SWE Intern /tech Rust, Go
//! edit /index 2 /status Interviewing
//! desc 1
//! ```
//!
//! See [`parser`] for the tokenizing rules.
//!
//! ## The Global Index
//!
//! Records live in three sequences (software, hardware, general) but users address them
//! with one 1-based number counted across all three in that fixed order. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: Facade that parses input and dispatches commands
//! - [`commands`]: Business logic for each command
//! - [`parser`]: Tokenizer turning raw input into a command and its parameters
//! - [`index`]: Global index parsing and resolution
//! - [`store`]: The record store and the persistence backends
//! - [`model`]: Internship records and the user profile
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;
