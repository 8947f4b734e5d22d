mod render;
mod repl;
mod setup;

use clap::Parser;
use internsprint::api::{CmdMessage, SprintApi};
use internsprint::config::{resolve_data_dir, SprintConfig};
use internsprint::error::Result;
use internsprint::store::fs::FileStore;
use setup::Cli;
use std::process::ExitCode;
use tracing::{warn, Level};

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = match SprintConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "unreadable config, using defaults");
            SprintConfig::default()
        }
    };
    let store = FileStore::with_config(data_dir, &config);

    let mut api = SprintApi::new(store);

    match cli.command_line() {
        Some(line) => {
            // A one-shot save would overwrite data that failed to load
            api.load()?;
            let result = repl::run_line(&mut api, &line)?;
            Ok(if result.successful {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            if let Err(e) = api.load() {
                warn!(error = %e, "failed to load saved data");
                // Nothing may save over the unreadable files, so move them first
                let moved = api.store().set_aside_unreadable()?;
                api.load()?;
                let mut messages = vec![CmdMessage::warning(format!(
                    "Could not load your saved data ({}). Starting with an empty list.",
                    e
                ))];
                for path in moved {
                    messages.push(CmdMessage::info(format!(
                        "The unreadable file was kept as {}",
                        path.display()
                    )));
                }
                render::print_messages(&messages);
            }
            let stdin = std::io::stdin();
            repl::run(&mut api, stdin.lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
