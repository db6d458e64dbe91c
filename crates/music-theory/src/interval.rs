use serde::{Deserialize, Serialize};

use crate::normalize::normalize_to_c;
use crate::tables::IntervalTable;

/// Name the interval between two semitones against a reference table.
///
/// The distance is octave-aware: no mod-12 reduction happens here, so a
/// minor tenth is 15 semitones and only matches a 15-semitone entry. A
/// distance of exactly 12 short-circuits to "Octave" before the table is
/// consulted, even when the table is empty or defines its own 12-semitone
/// entry. Anything else without a table match is a classification miss.
pub fn name_interval(first: i32, second: i32, table: &IntervalTable) -> Option<String> {
    let normalized = normalize_to_c(&[first, second]);
    let distance = normalized[1];

    if distance == 12 {
        return Some("Octave".to_string());
    }

    table
        .iter()
        .find(|(_, entry)| entry.semitones_from_root == distance)
        .map(|(name, _)| name.clone())
}

/// The closed vocabulary of single-step intervals used by the scale
/// analyzer's abbreviated step format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepInterval {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl StepInterval {
    pub fn from_semitones(semitones: i32) -> Option<Self> {
        match semitones {
            1 => Some(StepInterval::MinorSecond),
            2 => Some(StepInterval::MajorSecond),
            3 => Some(StepInterval::MinorThird),
            4 => Some(StepInterval::MajorThird),
            5 => Some(StepInterval::PerfectFourth),
            6 => Some(StepInterval::Tritone),
            7 => Some(StepInterval::PerfectFifth),
            8 => Some(StepInterval::MinorSixth),
            9 => Some(StepInterval::MajorSixth),
            10 => Some(StepInterval::MinorSeventh),
            11 => Some(StepInterval::MajorSeventh),
            _ => None,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            StepInterval::MinorSecond => "m2",
            StepInterval::MajorSecond => "M2",
            StepInterval::MinorThird => "m3",
            StepInterval::MajorThird => "M3",
            StepInterval::PerfectFourth => "P4",
            StepInterval::Tritone => "TT",
            StepInterval::PerfectFifth => "P5",
            StepInterval::MinorSixth => "m6",
            StepInterval::MajorSixth => "M6",
            StepInterval::MinorSeventh => "m7",
            StepInterval::MajorSeventh => "M7",
        }
    }
}

impl std::fmt::Display for StepInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::IntervalEntry;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample_table() -> IntervalTable {
        let mut table = HashMap::new();
        for (name, semitones, symbol) in [
            ("Minor Second", 1, "m2"),
            ("Major Second", 2, "M2"),
            ("Minor Third", 3, "m3"),
            ("Major Third", 4, "M3"),
            ("Perfect Fifth", 7, "P5"),
            ("Octave", 12, "P8"),
        ] {
            table.insert(
                name.to_string(),
                IntervalEntry {
                    semitones_from_root: semitones,
                    symbol: symbol.to_string(),
                },
            );
        }
        table
    }

    #[test]
    fn names_from_table() {
        let table = sample_table();
        assert_eq!(
            name_interval(60, 64, &table),
            Some("Major Third".to_string())
        );
        assert_eq!(
            name_interval(55, 62, &table),
            Some("Perfect Fifth".to_string())
        );
    }

    #[test]
    fn octave_short_circuits_even_on_empty_table() {
        let empty = IntervalTable::new();
        assert_eq!(name_interval(60, 72, &empty), Some("Octave".to_string()));
        // also wins over the table's own 12-semitone entry
        assert_eq!(
            name_interval(48, 60, &sample_table()),
            Some("Octave".to_string())
        );
    }

    #[test]
    fn unknown_distance_is_a_miss() {
        let table = sample_table();
        assert_eq!(name_interval(60, 75, &table), None);
        // descending pairs normalize to negative distances, which no
        // table entry carries
        assert_eq!(name_interval(64, 60, &table), None);
    }

    #[test]
    fn step_interval_round_trip() {
        for semitones in 1..=11 {
            let step = StepInterval::from_semitones(semitones).unwrap();
            assert!(!step.abbreviation().is_empty());
        }
        assert_eq!(StepInterval::from_semitones(0), None);
        assert_eq!(StepInterval::from_semitones(12), None);
        assert_eq!(StepInterval::Tritone.to_string(), "TT");
    }
}
