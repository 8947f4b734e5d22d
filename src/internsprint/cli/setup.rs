use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "internsprint", bin_name = "internsprint", version)]
#[command(about = "Track internship applications from the command line", long_about = None)]
pub struct Cli {
    /// Directory holding internships.json, profile.json and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `internsprint desc 2`. Starts the
    /// interactive session when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_words_means_interactive() {
        let cli = Cli::try_parse_from(["internsprint"]).unwrap();
        assert!(cli.command_line().is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn collects_flagged_command_words() {
        let cli = Cli::try_parse_from([
            "internsprint",
            "--data-dir",
            "/tmp/sprint",
            "add",
            "general",
            "/c",
            "UBS",
            "/r",
            "IT",
            "/dept",
            "Tech",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/sprint")));
        assert_eq!(
            cli.command_line().as_deref(),
            Some("add general /c UBS /r IT /dept Tech")
        );
    }

    #[test]
    fn verbose_before_command() {
        let cli = Cli::try_parse_from(["internsprint", "-v", "edit", "1", "/status", "-"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command_line().as_deref(), Some("edit 1 /status -"));
    }
}
