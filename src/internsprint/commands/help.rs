use crate::commands::{add, bye, delete, describe, edit, list, profile};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Kind;
use crate::parser::{CommandWord, Params};

pub const USAGE: &str = "help: Shows how to use every command, or one command.\n    \
    Parameters: [COMMAND]\n    \
    Example: help edit";

pub fn usage(word: CommandWord) -> &'static str {
    match word {
        CommandWord::AddSoftware => add::usage(Kind::Software),
        CommandWord::AddHardware => add::usage(Kind::Hardware),
        CommandWord::AddGeneral => add::usage(Kind::General),
        CommandWord::Edit => edit::USAGE,
        CommandWord::List => list::USAGE,
        CommandWord::Desc => describe::USAGE,
        CommandWord::Delete => delete::USAGE,
        CommandWord::Help => USAGE,
        CommandWord::Bye => bye::USAGE,
        CommandWord::My => profile::USAGE,
    }
}

/// Every usage line, or just the one named by the leading token.
pub fn run(params: &Params) -> CmdResult {
    let Some(name) = params.description() else {
        let mut result = CmdResult::success()
            .with_message(CmdMessage::info("Here are the commands you can use:"));
        for word in CommandWord::ALL {
            result.add_message(CmdMessage::info(usage(word)));
        }
        return result;
    };

    match name.parse::<CommandWord>() {
        Ok(word) => CmdResult::success().with_message(CmdMessage::info(usage(word))),
        Err(e) => CmdResult::failure(&e),
    }
}
