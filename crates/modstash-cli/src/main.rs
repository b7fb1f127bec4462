// modstash-cli: command-line frontend for the stash
// Argument parsing, session wiring, CSV output, status hook

mod cli;
mod config;
mod output;
mod session;
mod status;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use modstash_core::{ClientStore, History, Result, Snapshot, StashError, StashHome};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::session::SessionStore;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let (mut history, mut client, config) = match startup(cli.home) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Command::Push { target, status } => {
            run_push(&mut history, &mut client, &config, target.as_deref(), status)
        }
        Command::Pop { store, status } => {
            run_pop(&mut history, &mut client, &config, store, status)
        }
        Command::List => run_list(&mut history),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Open everything a command needs. Failures here exit with code 2,
/// before any command has run.
fn startup(home_override: Option<PathBuf>) -> Result<(History, SessionStore, Config)> {
    let home = StashHome::resolve(home_override)?;
    log::debug!("stash home: {}", home.dir().display());
    let history = History::open(home.stash_log())?;
    let client = SessionStore::load(home.session_file())?;
    let config = Config::load(&home.config_file())?;
    Ok((history, client, config))
}

/// Stash the current model and switch to the qualified target.
///
/// Switching to the model that is already current still switches but
/// records nothing, so pop won't bounce off a no-op.
fn run_push(
    history: &mut History,
    client: &mut impl ClientStore,
    config: &Config,
    target: Option<&str>,
    status: bool,
) -> Result<()> {
    let controller_name = client.current_controller()?;
    let model_name = client.current_model(&controller_name)?;
    let target_name = client.qualify_model_name(&controller_name, target.unwrap_or_default())?;

    client.set_current_model(&controller_name, &target_name)?;
    output::report_switch(&model_name, &target_name);
    if model_name != target_name {
        history.push(Snapshot {
            controller_name,
            model_name: model_name.clone(),
        })?;
    }

    if status {
        status::show_status(config, &model_name, &target_name);
    }
    Ok(())
}

/// Restore the most recently stashed snapshot.
///
/// With `store`, the replaced model is pushed back on, so a second pop
/// flips between the two.
fn run_pop(
    history: &mut History,
    client: &mut impl ClientStore,
    config: &Config,
    store: bool,
    status: bool,
) -> Result<()> {
    let old_context = client.current_context()?;
    let snapshot = history.pop()?;

    client.set_current_model(&snapshot.controller_name, &snapshot.model_name)?;
    output::report_switch(&old_context.model_name, &snapshot.model_name);
    if store {
        // The controller is re-determined after the switch, not captured
        // before it.
        let controller_name = client.current_controller()?;
        history.push(Snapshot {
            controller_name,
            model_name: old_context.model_name.clone(),
        })?;
    }

    if status {
        status::show_status(config, &old_context.model_name, &snapshot.model_name);
    }
    Ok(())
}

/// Print the stash as CSV on stdout.
fn run_list(history: &mut History) -> Result<()> {
    let snapshots = history.snapshots()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_snapshots_csv(&mut out, snapshots).map_err(|e| StashError::io("stdout", e))
}
