//! Append-only game outcome log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GameError;
use crate::game::{Outcome, SideTimes};

/// One line per finished game: `<outcome> <side A secs> <side B secs>`.
#[derive(Debug, Clone)]
pub struct StatsLog {
    path: PathBuf,
}

impl StatsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format_line(outcome: Outcome, times: SideTimes) -> String {
        format!("{} {:.6} {:.6}\n", outcome, times.a, times.b)
    }

    /// Appends one line, creating the file if needed.
    pub fn append(&self, outcome: Outcome, times: SideTimes) -> Result<(), GameError> {
        let fail = |source| GameError::Stats {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(fail)?;
        file.write_all(Self::format_line(outcome, times).as_bytes())
            .map_err(fail)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
