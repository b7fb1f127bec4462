//! Post-switch status hook.
//!
//! Runs the configured `status_command` after a switch has fully committed.
//! Hook failures are reported on stderr and never propagate back into the
//! stash operation.

use std::process::{Command, Stdio};

use crate::config::Config;

/// Show status output for a completed switch from `old_name` to `new_name`.
///
/// Prints a separator sized to the switch line, then runs the configured
/// command with inherited stdout/stderr. With no `status_command`
/// configured this notes the fact and does nothing.
pub fn show_status(config: &Config, old_name: &str, new_name: &str) {
    let command = match config.status_command.as_deref() {
        Some(command) => command,
        None => {
            eprintln!("no status_command configured");
            return;
        }
    };
    let argv = match shlex::split(command) {
        Some(argv) if !argv.is_empty() => argv,
        _ => {
            eprintln!("malformed status_command: {}", command);
            return;
        }
    };

    println!("{}", "-".repeat(old_name.len() + new_name.len() + 4));
    println!();

    log::debug!("running status command: {}", command);
    let result = Command::new(&argv[0])
        .args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();
    match result {
        Ok(status) if !status.success() => {
            eprintln!("status command exited with {}", status);
        }
        Ok(_) => {}
        Err(e) => eprintln!("could not run status command: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_status_runs_configured_command() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("ran");
        let config = Config {
            status_command: Some(format!("touch {}", marker.display())),
        };

        show_status(&config, "old", "new");

        assert!(marker.exists(), "status command should have run");
    }

    #[test]
    fn test_show_status_without_command_is_noop() {
        // Must not panic or touch anything.
        show_status(&Config::default(), "old", "new");
    }

    #[test]
    fn test_show_status_survives_missing_binary() {
        let config = Config {
            status_command: Some("definitely-not-a-real-binary-1234".to_string()),
        };
        show_status(&config, "old", "new");
    }
}
