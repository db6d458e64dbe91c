use std::sync::Arc;

use music_theory::{
    analyze_scale, name_chord, name_interval, spell_note, NoteName, ScaleAnalysis, SpellerContext,
    SpellingMode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::tables::ReferenceTables;

/// What the reference tool is currently classifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefMode {
    #[default]
    Off,
    Note,
    SingleInterval,
    MultiInterval,
    Chord,
    Scale,
}

/// Startup configuration for a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_mode: SpellingMode,
    pub ref_mode: RefMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_mode: SpellingMode::Flat,
            ref_mode: RefMode::Off,
        }
    }
}

/// The set of currently-held notes, fed note/velocity pairs.
///
/// Sharp and flat spellings of the same pitch arrive as opposite signs
/// but are one held note, so identity is the absolute value. Insertion
/// order is kept: the single-interval view wants the two most recent
/// notes, not the two lowest.
#[derive(Debug, Clone, Default)]
pub struct NoteTracker {
    held: Vec<i32>,
}

impl NoteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one note/velocity event. Velocity above zero holds the
    /// note (ignored if already held); velocity zero releases it.
    pub fn handle(&mut self, note: i32, velocity: i32) {
        let note = note.abs();

        if velocity > 0 {
            if !self.held.contains(&note) {
                self.held.push(note);
            }
        } else {
            self.held.retain(|&held| held != note);
        }
    }

    /// Held notes in the order they arrived.
    pub fn held(&self) -> &[i32] {
        &self.held
    }

    /// Held notes sorted by pitch.
    pub fn sorted(&self) -> Vec<i32> {
        let mut sorted = self.held.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// One classified interval, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalReading {
    pub first: i32,
    pub second: i32,
    /// Full name from the table ("Perfect Fifth", or the literal
    /// "Octave").
    pub name: String,
    /// Short table symbol ("P5"); absent when the name came from the
    /// octave special case and the table has no entry for it.
    pub symbol: Option<String>,
}

/// One player session: reference tables, spelling state, held notes,
/// and the current classification mode.
///
/// Calls are synchronous and pure apart from the spelling-mode state;
/// a concurrent host serializes calls per session.
pub struct ReferenceSession {
    tables: Arc<ReferenceTables>,
    context: SpellerContext,
    tracker: NoteTracker,
    ref_mode: RefMode,
}

impl ReferenceSession {
    pub fn new(tables: Arc<ReferenceTables>, config: SessionConfig) -> Self {
        Self {
            tables,
            context: SpellerContext::new(config.initial_mode),
            tracker: NoteTracker::new(),
            ref_mode: config.ref_mode,
        }
    }

    pub fn ref_mode(&self) -> RefMode {
        self.ref_mode
    }

    pub fn set_ref_mode(&mut self, mode: RefMode) {
        self.ref_mode = mode;
    }

    pub fn spelling_mode(&self) -> SpellingMode {
        self.context.mode()
    }

    pub fn set_spelling_mode(&mut self, mode: SpellingMode) {
        self.context.set_mode(mode);
    }

    pub fn tracker(&self) -> &NoteTracker {
        &self.tracker
    }

    /// Feed one note/velocity event into the held-note set.
    pub fn handle_note(&mut self, note: i32, velocity: i32) {
        self.tracker.handle(note, velocity);
    }

    /// Spell the most recently held note in the session's current mode.
    pub fn current_note(&self) -> Option<NoteName> {
        let &note = self.tracker.held().last()?;
        let signed = match self.context.mode() {
            SpellingMode::Sharp => note,
            SpellingMode::Flat => -note,
        };
        Some(spell_note(signed, true))
    }

    /// Classify the two most recently held notes as an interval.
    ///
    /// Fewer than two held notes is a neutral `None`, not an error.
    pub fn single_interval(&self) -> Result<Option<IntervalReading>, SessionError> {
        let table = self.tables.intervals()?;
        let held = self.tracker.held();
        if held.len() < 2 {
            return Ok(None);
        }

        let first = held[held.len() - 2];
        let second = held[held.len() - 1];
        Ok(read_interval(table, first, second))
    }

    /// Classify every adjacent pair of the pitch-sorted held notes.
    ///
    /// Pairs whose distance misses the table are skipped; the caller
    /// only sees what could be named.
    pub fn multi_intervals(&self) -> Result<Vec<IntervalReading>, SessionError> {
        let table = self.tables.intervals()?;
        let sorted = self.tracker.sorted();

        let mut readings = Vec::new();
        for pair in sorted.windows(2) {
            match read_interval(table, pair[0], pair[1]) {
                Some(reading) => readings.push(reading),
                None => {
                    debug!(first = pair[0], second = pair[1], "interval lookup miss");
                }
            }
        }
        Ok(readings)
    }

    /// Name the chord formed by all held notes.
    pub fn chord(&self) -> Result<Option<String>, SessionError> {
        let table = self.tables.chords()?;
        if self.tracker.len() < 2 {
            return Ok(None);
        }

        let sorted = self.tracker.sorted();
        let name = name_chord(&sorted, table, self.context.mode());
        if name.is_none() {
            debug!(notes = ?sorted, "chord lookup miss");
        }
        Ok(name)
    }

    /// Analyze an ordered scale run, updating the spelling mode from its
    /// root. Scales arrive whole rather than through the tracker.
    pub fn scale(&mut self, semitones: &[i32]) -> ScaleAnalysis {
        let before = self.context.mode();
        let analysis = analyze_scale(semitones, &mut self.context);
        let after = self.context.mode();
        if before != after {
            debug!(%before, %after, "spelling mode switched by scale root");
        }
        analysis
    }
}

fn read_interval(
    table: &music_theory::IntervalTable,
    first: i32,
    second: i32,
) -> Option<IntervalReading> {
    let name = name_interval(first, second, table)?;
    let symbol = table.get(&name).map(|entry| entry.symbol.clone());
    Some(IntervalReading {
        first,
        second,
        name,
        symbol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded_tables() -> Arc<ReferenceTables> {
        let mut tables = ReferenceTables::empty();
        tables
            .load_intervals_json(
                r#"{
                    "Minor Second": { "semitones_from_root": 1, "symbol": "m2" },
                    "Minor Third": { "semitones_from_root": 3, "symbol": "m3" },
                    "Major Third": { "semitones_from_root": 4, "symbol": "M3" },
                    "Perfect Fourth": { "semitones_from_root": 5, "symbol": "P4" },
                    "Perfect Fifth": { "semitones_from_root": 7, "symbol": "P5" }
                }"#,
            )
            .unwrap();
        tables
            .load_chords_json(
                r#"{
                    "Major": { "semitones_from_root": [0, 4, 7] },
                    "Minor": { "semitones_from_root": [0, 3, 7] }
                }"#,
            )
            .unwrap();
        Arc::new(tables)
    }

    fn session() -> ReferenceSession {
        ReferenceSession::new(loaded_tables(), SessionConfig::default())
    }

    #[test]
    fn tracker_folds_enharmonic_signs() {
        let mut tracker = NoteTracker::new();
        tracker.handle(61, 100);
        tracker.handle(-61, 100); // same held note, spelled flat
        assert_eq!(tracker.held(), &[61]);

        tracker.handle(-61, 0); // release by either spelling
        assert!(tracker.is_empty());
    }

    #[test]
    fn tracker_keeps_arrival_order() {
        let mut tracker = NoteTracker::new();
        tracker.handle(67, 100);
        tracker.handle(60, 100);
        tracker.handle(64, 100);
        assert_eq!(tracker.held(), &[67, 60, 64]);
        assert_eq!(tracker.sorted(), vec![60, 64, 67]);
    }

    #[test]
    fn single_interval_uses_most_recent_pair() {
        let mut session = session();
        session.handle_note(60, 100);
        session.handle_note(67, 100);
        session.handle_note(72, 100);

        let reading = session.single_interval().unwrap().unwrap();
        assert_eq!(reading.first, 67);
        assert_eq!(reading.second, 72);
        assert_eq!(reading.name, "Perfect Fourth");
        assert_eq!(reading.symbol.as_deref(), Some("P4"));
    }

    #[test]
    fn single_interval_needs_two_notes() {
        let mut session = session();
        session.handle_note(60, 100);
        assert_eq!(session.single_interval().unwrap(), None);
    }

    #[test]
    fn multi_intervals_walk_sorted_pairs() {
        let mut session = session();
        for note in [67, 60, 64] {
            session.handle_note(note, 100);
        }

        let readings = session.multi_intervals().unwrap();
        let names: Vec<&str> = readings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Major Third", "Minor Third"]);
    }

    #[test]
    fn multi_intervals_skip_unnamed_pairs() {
        let mut session = session();
        // tritone (60-66) is not in the fixture table
        for note in [60, 66, 67] {
            session.handle_note(note, 100);
        }

        let readings = session.multi_intervals().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].name, "Minor Second");
    }

    #[test]
    fn octave_reading_has_no_symbol_without_table_entry() {
        let mut session = session();
        session.handle_note(60, 100);
        session.handle_note(72, 100);

        let reading = session.single_interval().unwrap().unwrap();
        assert_eq!(reading.name, "Octave");
        assert_eq!(reading.symbol, None);
    }

    #[test]
    fn chord_spelling_follows_session_mode() {
        let mut session = session();
        for note in [61, 65, 68] {
            session.handle_note(note, 100);
        }

        // default mode is flat
        assert_eq!(session.chord().unwrap().as_deref(), Some("D♭ Major"));
        session.set_spelling_mode(SpellingMode::Sharp);
        assert_eq!(session.chord().unwrap().as_deref(), Some("C# Major"));
    }

    #[test]
    fn missing_tables_fail_the_call() {
        let mut session =
            ReferenceSession::new(Arc::new(ReferenceTables::empty()), SessionConfig::default());
        session.handle_note(60, 100);
        session.handle_note(64, 100);

        assert!(session.single_interval().is_err());
        assert!(session.chord().is_err());
        // scale analysis needs no external table
        let analysis = session.scale(&[60, 62, 64, 65, 67, 69, 71]);
        assert!(analysis.is_diatonic);
    }

    #[test]
    fn scale_updates_session_spelling() {
        let mut session = session();
        assert_eq!(session.spelling_mode(), SpellingMode::Flat);

        session.scale(&[55, 57, 59, 60, 62, 64, 66]); // G major
        assert_eq!(session.spelling_mode(), SpellingMode::Sharp);
    }

    #[test]
    fn current_note_spells_in_session_mode() {
        let mut session = session();
        session.handle_note(63, 100);
        assert_eq!(session.current_note().unwrap().to_string(), "E♭4");

        session.set_spelling_mode(SpellingMode::Sharp);
        assert_eq!(session.current_note().unwrap().to_string(), "D#4");
    }

    #[test]
    fn config_serde_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.initial_mode, SpellingMode::Flat);
        assert_eq!(config.ref_mode, RefMode::Off);

        let config: SessionConfig =
            serde_json::from_str(r#"{ "initial_mode": "sharp", "ref_mode": "chord" }"#).unwrap();
        assert_eq!(config.initial_mode, SpellingMode::Sharp);
        assert_eq!(config.ref_mode, RefMode::Chord);
    }
}
