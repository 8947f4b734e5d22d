//! # Command Parser
//!
//! Turns one line of user input into a [`CommandWord`] and its [`Params`].
//!
//! ## Rules
//!
//! 1. The multi-word commands (`add software`, `add hardware`, `add general`) and `edit`
//!    are matched by prefix. Anything else is split on the first space into a one-word
//!    command and the remainder.
//! 2. The remainder is cut in front of every `/` that is followed by a letter. Those
//!    cuts are the flag markers, so `/c Google /r SWE` becomes `/c Google` and `/r SWE`.
//! 3. A leading piece that is not a flag is kept under the `description` key.
//! 4. Every flag piece is split on its first whitespace into flag and value. A flag
//!    without a value is an error, and so is a value containing `/`: that only happens
//!    when a flag was glued to the previous value, and accepting it would silently
//!    swallow the flag.
//! 5. When a flag repeats, the last value wins.

use crate::error::{Result, SprintError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Key under which the leading unflagged token is stored.
pub const DESCRIPTION_KEY: &str = "description";

const MULTI_WORD_COMMANDS: [&str; 4] = ["add software", "add hardware", "add general", "edit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    AddSoftware,
    AddHardware,
    AddGeneral,
    Edit,
    List,
    Desc,
    Delete,
    Help,
    Bye,
    My,
}

impl CommandWord {
    pub const ALL: [CommandWord; 10] = [
        CommandWord::AddSoftware,
        CommandWord::AddHardware,
        CommandWord::AddGeneral,
        CommandWord::Edit,
        CommandWord::List,
        CommandWord::Desc,
        CommandWord::Delete,
        CommandWord::Help,
        CommandWord::Bye,
        CommandWord::My,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::AddSoftware => "add software",
            CommandWord::AddHardware => "add hardware",
            CommandWord::AddGeneral => "add general",
            CommandWord::Edit => "edit",
            CommandWord::List => "list",
            CommandWord::Desc => "desc",
            CommandWord::Delete => "delete",
            CommandWord::Help => "help",
            CommandWord::Bye => "bye",
            CommandWord::My => "my",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandWord {
    type Err = SprintError;

    fn from_str(s: &str) -> Result<Self> {
        CommandWord::ALL
            .into_iter()
            .find(|word| word.as_str() == s)
            .ok_or_else(|| SprintError::UnknownCommand(s.to_string()))
    }
}

/// Flag token to raw value, built fresh for every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The leading unflagged token, if any.
    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_KEY)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub word: CommandWord,
    pub params: Params,
}

/// Parses a full line of input.
pub fn parse(input: &str) -> Result<ParsedCommand> {
    debug!(input, "parsing command");
    let (name, rest) = split_command(input.trim());
    let word = CommandWord::from_str(name)?;
    let params = parse_params(rest)?;
    Ok(ParsedCommand { word, params })
}

/// Splits input into the command name and the parameter text.
pub fn split_command(input: &str) -> (&str, &str) {
    for command in MULTI_WORD_COMMANDS {
        if let Some(rest) = input.strip_prefix(command) {
            return (command, rest.trim());
        }
    }
    match input.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (input, ""),
    }
}

/// Builds the parameter map from the text after the command name.
pub fn parse_params(text: &str) -> Result<Params> {
    let mut params = Params::new();
    let text = text.trim();
    if text.is_empty() {
        return Ok(params);
    }

    let mut segments = split_at_flags(text).into_iter();
    let mut pending = segments.next();
    if let Some(first) = pending.filter(|s| !s.trim_start().starts_with('/')) {
        params.insert(DESCRIPTION_KEY, first.trim());
        pending = None;
    }

    for segment in pending.into_iter().chain(segments) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (flag, value) = segment
            .split_once(char::is_whitespace)
            .map(|(flag, value)| (flag, value.trim()))
            .ok_or_else(|| SprintError::MissingValue(segment.to_string()))?;
        if value.contains('/') {
            return Err(SprintError::IllegalValue);
        }
        params.insert(flag, value);
    }

    Ok(params)
}

/// Cuts `text` in front of every `/` followed by an ASCII letter, keeping the markers.
fn split_at_flags(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let is_flag = b == b'/' && bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic);
        if is_flag && i > start {
            segments.push(&text[start..i]);
            start = i;
        }
    }
    segments.push(&text[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_command() {
        let parsed = parse("add software /c Google /r SWE Intern /tech Rust").unwrap();
        assert_eq!(parsed.word, CommandWord::AddSoftware);
        assert_eq!(parsed.params.get("/c"), Some("Google"));
        assert_eq!(parsed.params.get("/r"), Some("SWE Intern"));
        assert_eq!(parsed.params.get("/tech"), Some("Rust"));
        assert_eq!(parsed.params.len(), 3);
    }

    #[test]
    fn params_without_leading_token_have_no_description() {
        let params = parse_params("/c Google /r SWE Intern").unwrap();
        assert_eq!(params.get("/c"), Some("Google"));
        assert_eq!(params.get("/r"), Some("SWE Intern"));
        assert!(params.description().is_none());
    }

    #[test]
    fn multi_word_prefix_strips_the_variant() {
        let parsed = parse("add software /c Google /r SWE Intern").unwrap();
        assert!(parsed.params.description().is_none());
        assert_eq!(parsed.params.len(), 2);
    }

    #[test]
    fn single_word_command_with_leading_token() {
        let parsed = parse("desc 3").unwrap();
        assert_eq!(parsed.word, CommandWord::Desc);
        assert_eq!(parsed.params.description(), Some("3"));
        assert_eq!(parsed.params.len(), 1);
    }

    #[test]
    fn leading_token_and_flags() {
        let parsed = parse("edit 2 /c Java /r Automation Testing Intern").unwrap();
        assert_eq!(parsed.word, CommandWord::Edit);
        assert_eq!(parsed.params.description(), Some("2"));
        assert_eq!(parsed.params.get("/c"), Some("Java"));
        assert_eq!(parsed.params.get("/r"), Some("Automation Testing Intern"));
    }

    #[test]
    fn command_without_params() {
        for (input, word) in [
            ("list", CommandWord::List),
            ("  bye  ", CommandWord::Bye),
            ("help", CommandWord::Help),
        ] {
            let parsed = parse(input).unwrap();
            assert_eq!(parsed.word, word);
            assert!(parsed.params.is_empty());
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        for input in ["", "add", "add robotics /c X", "remove 1", "LIST"] {
            match parse(input) {
                Err(SprintError::UnknownCommand(_)) => {}
                other => panic!("Expected UnknownCommand for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn flag_without_value_is_rejected() {
        match parse("edit /index 1 /c") {
            Err(SprintError::MissingValue(flag)) => assert_eq!(flag, "/c"),
            other => panic!("Expected MissingValue, got {:?}", other),
        }
        assert!(matches!(
            parse_params("/c    "),
            Err(SprintError::MissingValue(_))
        ));
    }

    #[test]
    fn stray_slash_in_value_is_rejected() {
        for input in [
            "add software /c Google /r SWE/ Intern /tech C",
            "edit /index 1 /r Intern /1",
            "add general /c A / B /r R /dept D",
        ] {
            match parse(input) {
                Err(SprintError::IllegalValue) => {}
                other => panic!("Expected IllegalValue for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn slash_letter_inside_value_becomes_a_flag() {
        // "C/C++" is cut before "/C++", which has no value of its own
        match parse("add software /c Google /r SWE /tech C/C++") {
            Err(SprintError::MissingValue(flag)) => assert_eq!(flag, "/C++"),
            other => panic!("Expected MissingValue, got {:?}", other),
        }
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let params = parse_params("/c Google /c Meta").unwrap();
        assert_eq!(params.get("/c"), Some("Meta"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn flags_are_case_sensitive() {
        let params = parse_params("/c lower /C upper").unwrap();
        assert_eq!(params.get("/c"), Some("lower"));
        assert_eq!(params.get("/C"), Some("upper"));
    }

    #[test]
    fn extra_whitespace_is_trimmed() {
        let params = parse_params("  /c   Google    /r  SWE   Intern  ").unwrap();
        assert_eq!(params.get("/c"), Some("Google"));
        assert_eq!(params.get("/r"), Some("SWE   Intern"));
    }

    #[test]
    fn leading_token_may_contain_slash() {
        let params = parse_params("1/2").unwrap();
        assert_eq!(params.description(), Some("1/2"));
    }

    #[test]
    fn command_words_round_trip() {
        for word in CommandWord::ALL {
            assert_eq!(CommandWord::from_str(word.as_str()).unwrap(), word);
        }
    }
}
