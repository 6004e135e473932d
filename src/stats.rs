//! Append-only run log and best-time query.
//!
//! Each completed run (escape or timeout) is appended as one JSON line with a
//! timestamp, an escaped flag, and a duration in whole seconds. The core only
//! ever records a run or asks for the fastest escape.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One completed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    pub ts: String,
    pub escaped: bool,
    pub duration_secs: u64,
}

/// Append-only sink for completed runs, backed by a JSON-lines file.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one completed run to the log, creating the file and its parent
    /// directory on first use.
    ///
    /// # Errors
    /// Fails on filesystem errors or an unformattable system clock.
    pub fn record(&self, escaped: bool, duration_secs: u64) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create run log directory '{}'", parent.display()))?;
        }
        let record = RunRecord {
            ts: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .context("could not format run timestamp")?,
            escaped,
            duration_secs,
        };
        let line = serde_json::to_string(&record).context("could not serialize run record")?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("could not open run log '{}'", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("could not append to run log '{}'", self.path.display()))?;
        Ok(())
    }

    /// Minimum duration among escaped runs, or `None` if no run has escaped
    /// yet. Malformed lines are skipped with a warning, never fatal.
    ///
    /// # Errors
    /// Fails only if an existing log file cannot be read.
    pub fn best_time(&self) -> Result<Option<u64>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("could not read run log '{}'", self.path.display()))?;
        let mut best: Option<u64> = None;
        for line in raw.lines().filter(|line| !line.trim().is_empty()) {
            match serde_json::from_str::<RunRecord>(line) {
                Ok(record) if record.escaped => {
                    best = Some(best.map_or(record.duration_secs, |b| b.min(record.duration_secs)));
                },
                Ok(_) => {},
                Err(err) => warn!("skipping malformed run record in '{}': {err}", self.path.display()),
            }
        }
        Ok(best)
    }
}
