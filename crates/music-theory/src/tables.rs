//! Reference-table record types.
//!
//! The interval and chord tables are open-ended, data-driven maps loaded
//! from JSON by the session layer; the core only reads them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One named interval: its semitone distance from the root and a short
/// display symbol ("m3", "P5").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalEntry {
    pub semitones_from_root: i32,
    pub symbol: String,
}

/// Interval name -> record. Iteration order is insignificant: at most one
/// entry matches a normalized distance.
pub type IntervalTable = HashMap<String, IntervalEntry>;

/// One named chord shape: semitone offsets from the root, conventionally
/// starting at 0 and sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEntry {
    pub semitones_from_root: Vec<i32>,
}

/// Chord name -> record, matched by exact canonical shape.
pub type ChordTable = HashMap<String, ChordEntry>;
