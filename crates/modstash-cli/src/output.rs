//! Switch reporting and CSV output.
//!
//! Informational output goes to stderr so stdout stays clean for the CSV
//! that `list` produces.

use std::io::{self, Write};

use modstash_core::Snapshot;

/// Report a completed model switch on stderr.
pub fn report_switch(old_name: &str, new_name: &str) {
    eprintln!("{}", switch_message(old_name, new_name));
}

fn switch_message(old_name: &str, new_name: &str) -> String {
    if old_name == new_name {
        format!("{} (no change)", old_name)
    } else {
        format!("{} -> {}", old_name, new_name)
    }
}

/// Write snapshots as CSV with a `controller,model` header, oldest first.
pub fn write_snapshots_csv<W: Write>(out: &mut W, snapshots: &[Snapshot]) -> io::Result<()> {
    writeln!(out, "controller,model")?;
    for snapshot in snapshots {
        writeln!(
            out,
            "{},{}",
            csv_field(&snapshot.controller_name),
            csv_field(&snapshot.model_name)
        )?;
    }
    Ok(())
}

/// Quote a field only when it contains a comma, quote, or line break.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
