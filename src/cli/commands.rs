use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `linkbot` - announces the title of every URL posted in chat.
#[derive(Parser, Debug)]
#[command(name = "linkbot")]
#[command(author = "theonlyhennygod")]
#[command(version = "0.1.0")]
#[command(about = "Reply to chat URLs with their page title.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.linkbot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read messages from stdin, one per line, and print a reply per URL
    Run,

    /// Process a single message and exit
    Check {
        /// Message text to scan for URLs
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_global_flags() {
        let cli = Cli::try_parse_from([
            "linkbot",
            "check",
            "see http://a.com",
            "--config",
            "/tmp/linkbot.toml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/linkbot.toml")));
        assert!(matches!(cli.command, Commands::Check { ref message } if message == "see http://a.com"));
    }

    #[test]
    fn parses_run() {
        let cli = Cli::try_parse_from(["linkbot", "run"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn check_requires_message() {
        assert!(Cli::try_parse_from(["linkbot", "check"]).is_err());
    }
}
