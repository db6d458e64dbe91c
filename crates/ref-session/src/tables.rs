use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use music_theory::{ChordTable, IntervalTable};
use tracing::info;

use crate::error::{SessionError, TableKind};

/// The reference tables a session classifies against.
///
/// Loaded once at startup from JSON and immutable afterwards; the old
/// import-on-first-use pattern is gone. Asking for a table that was never
/// loaded is a precondition failure for that call only.
#[derive(Debug, Default)]
pub struct ReferenceTables {
    intervals: Option<IntervalTable>,
    chords: Option<ChordTable>,
}

impl ReferenceTables {
    /// No tables loaded; interval and chord classification will fail
    /// until the corresponding loader runs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load both tables from JSON files.
    pub fn from_files(intervals_path: &Path, chords_path: &Path) -> Result<Self> {
        let mut tables = Self::empty();
        tables.load_intervals(intervals_path)?;
        tables.load_chords(chords_path)?;
        Ok(tables)
    }

    pub fn load_intervals(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading interval table: {}", path.display()))?;
        self.load_intervals_json(&json)
    }

    pub fn load_intervals_json(&mut self, json: &str) -> Result<()> {
        let table: IntervalTable =
            serde_json::from_str(json).context("parsing interval table")?;
        info!(entries = table.len(), "loaded interval table");
        self.intervals = Some(table);
        Ok(())
    }

    pub fn load_chords(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading chord table: {}", path.display()))?;
        self.load_chords_json(&json)
    }

    pub fn load_chords_json(&mut self, json: &str) -> Result<()> {
        let table: ChordTable = serde_json::from_str(json).context("parsing chord table")?;
        info!(entries = table.len(), "loaded chord table");
        self.chords = Some(table);
        Ok(())
    }

    pub fn intervals(&self) -> Result<&IntervalTable, SessionError> {
        self.intervals
            .as_ref()
            .ok_or(SessionError::TableNotLoaded(TableKind::Intervals))
    }

    pub fn chords(&self) -> Result<&ChordTable, SessionError> {
        self.chords
            .as_ref()
            .ok_or(SessionError::TableNotLoaded(TableKind::Chords))
    }
}
