use super::render::{print_divider, print_internships, print_messages};
use internsprint::api::{CmdMessage, SprintApi};
use internsprint::commands::CmdResult;
use internsprint::error::Result;
use internsprint::parser::{self, CommandWord};
use internsprint::store::DataStore;
use std::io::BufRead;
use tracing::debug;

const WELCOME: &str = "Hello! Welcome to InternSprint. Type 'help' to see what you can do.";

/// Parses, runs and prints one line. Parse errors are returned unprinted.
pub(super) fn run_line<S: DataStore>(api: &mut SprintApi<S>, line: &str) -> Result<CmdResult> {
    let command = parser::parse(line)?;
    let word = command.word;
    let result = api.dispatch(command);

    print_messages(&result.messages);
    // desc already prints the full record as a message
    if word == CommandWord::List {
        print_internships(&result.listed);
    }
    Ok(result)
}

/// Reads commands until `bye` or end of input. End of input saves like `bye`.
pub(super) fn run<S: DataStore, R: BufRead>(api: &mut SprintApi<S>, input: R) -> Result<()> {
    println!("{}", WELCOME);
    print_divider();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let exit = match run_line(api, line) {
            Ok(result) => result.exit,
            Err(e) => {
                print_messages(&[CmdMessage::error(e.to_string())]);
                false
            }
        };
        print_divider();
        if exit {
            return Ok(());
        }
    }

    debug!("end of input, saving");
    let result = api.shutdown();
    print_messages(&result.messages);
    Ok(())
}
