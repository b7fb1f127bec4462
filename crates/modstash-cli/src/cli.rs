//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// modstash - move between models without retyping their names
#[derive(Parser, Debug)]
#[command(
    name = "modstash",
    version,
    about = "Stash the current model context and come back to it later"
)]
pub struct Cli {
    /// Override the stash home directory (default: ~/.modstash)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stash the current model and switch to TARGET
    Push {
        /// Model to switch to, bare or qualified as user/name
        target: Option<String>,

        /// Show status after the switch
        #[arg(long)]
        status: bool,
    },
    /// Switch back to the most recently stashed model
    Pop {
        /// Stash the replaced model so a second pop flips back
        #[arg(long)]
        store: bool,

        /// Show status after the switch
        #[arg(long)]
        status: bool,
    },
    /// Print the stash history as CSV, oldest first
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("modstash").chain(args.iter().copied()))
    }

    #[test]
    fn test_push_with_target() {
        let cli = parse(&["push", "staging"]).unwrap();
        match cli.command {
            Command::Push { target, status } => {
                assert_eq!(target.as_deref(), Some("staging"));
                assert!(!status);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_push_without_target() {
        let cli = parse(&["push"]).unwrap();
        match cli.command {
            Command::Push { target, .. } => assert!(target.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_push_status_flag() {
        let cli = parse(&["push", "staging", "--status"]).unwrap();
        match cli.command {
            Command::Push { status, .. } => assert!(status),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_pop_flags() {
        let cli = parse(&["pop", "--store", "--status"]).unwrap();
        match cli.command {
            Command::Pop { store, status } => {
                assert!(store);
                assert!(status);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_pop_rejects_positional_args() {
        assert!(parse(&["pop", "something"]).is_err());
    }

    #[test]
    fn test_list_rejects_positional_args() {
        assert!(parse(&["list", "something"]).is_err());
    }

    #[test]
    fn test_home_flag_is_global() {
        let cli = parse(&["push", "staging", "--home", "/tmp/stash-home"]).unwrap();
        assert_eq!(cli.home.as_deref(), Some(std::path::Path::new("/tmp/stash-home")));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(parse(&[]).is_err());
    }
}
