//! The stash history: an ordered stack of snapshots backed by a flat file.
//!
//! One line per snapshot, `<controller> <model>\n`, oldest first. The
//! backing file is the only durable state: read-path operations reload it
//! before answering, and every mutation rewrites it whole through a
//! temp-file-and-rename cycle.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StashError};
use crate::snapshot::Snapshot;

/// Suffix appended to the backing file name while rewriting.
const TEMP_SUFFIX: &str = ".new";

/// Ordered stack of snapshots, persisted to a flat file.
pub struct History {
    path: PathBuf,
    entries: Vec<Snapshot>,
}

impl History {
    /// Open the history at `path`, creating an empty backing file if absent.
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut history = History {
            path,
            entries: Vec::new(),
        };
        history.load()?;
        Ok(history)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a snapshot to the stack and persist.
    ///
    /// Does not reload first: anything written to the backing file since
    /// the last load is overwritten by this persist.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<()> {
        self.entries.push(snapshot);
        self.persist()
    }

    /// Remove and return the most recently pushed snapshot.
    ///
    /// Reloads from disk first, so the file content is authoritative even
    /// after an earlier failed persist. Returns [`StashError::EmptyHistory`]
    /// when the stack is empty.
    pub fn pop(&mut self) -> Result<Snapshot> {
        self.load()?;
        let snapshot = match self.entries.pop() {
            Some(snapshot) => snapshot,
            None => return Err(StashError::EmptyHistory),
        };
        self.persist()?;
        Ok(snapshot)
    }

    /// All snapshots, oldest first. Reloads from disk.
    pub fn snapshots(&mut self) -> Result<&[Snapshot]> {
        self.load()?;
        Ok(&self.entries)
    }

    /// Replace the in-memory stack with the parsed file content.
    ///
    /// Lines are read as raw bytes and decoded individually, so corruption
    /// in one line never aborts the load. Each line splits on its first
    /// space into controller and model. Lines that aren't valid UTF-8 or
    /// don't split into two parts are skipped without error and vanish on
    /// the next persist.
    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            File::create(&self.path).map_err(|e| StashError::io(&self.path, e))?;
        }

        let file = File::open(&self.path).map_err(|e| StashError::io(&self.path, e))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (line_num, line) in reader.split(b'\n').enumerate() {
            let mut line = line.map_err(|e| StashError::io(&self.path, e))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = match String::from_utf8(line) {
                Ok(line) => line,
                Err(_) => {
                    log::debug!(
                        "{}:{}: skipping non-UTF-8 line",
                        self.path.display(),
                        line_num + 1
                    );
                    continue;
                }
            };
            match line.split_once(' ') {
                Some((controller, model)) => entries.push(Snapshot::new(controller, model)),
                None => {
                    if !line.is_empty() {
                        log::debug!(
                            "{}:{}: skipping malformed line",
                            self.path.display(),
                            line_num + 1
                        );
                    }
                }
            }
        }
        self.entries = entries;
        Ok(())
    }

    /// Rewrite the backing file from the in-memory stack.
    ///
    /// Writes everything to `<path>.new`, flushes and syncs, then removes
    /// the original and renames the temp file into place. A crash before
    /// the remove leaves the original untouched.
    fn persist(&self) -> Result<()> {
        let temp_path = temp_path(&self.path);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StashError::io(&temp_path, e))?;

        {
            let mut writer = BufWriter::new(&mut file);
            for snapshot in &self.entries {
                writeln!(writer, "{} {}", snapshot.controller_name, snapshot.model_name)
                    .map_err(|e| StashError::io(&temp_path, e))?;
            }
            writer.flush().map_err(|e| StashError::io(&temp_path, e))?;
        }
        file.sync_all().map_err(|e| StashError::io(&temp_path, e))?;
        drop(file);

        fs::remove_file(&self.path).map_err(|e| StashError::io(&self.path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| StashError::io(&temp_path, e))?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
