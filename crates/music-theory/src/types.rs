use serde::{Deserialize, Serialize};

/// Sharp or flat spelling of the five enharmonic pitch classes.
///
/// Input semitones encode this per note (negative = flat), but chord and
/// scale output follows the session-wide mode held by `SpellerContext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingMode {
    Sharp,
    Flat,
}

impl SpellingMode {
    /// "sharp"/"flat" with plural agreement, for accidental-count labels.
    pub fn accidental_label(&self, count: usize) -> String {
        let word = match self {
            SpellingMode::Sharp => "sharp",
            SpellingMode::Flat => "flat",
        };
        if count == 1 {
            format!("{} {}", count, word)
        } else {
            format!("{} {}s", count, word)
        }
    }
}

impl std::fmt::Display for SpellingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpellingMode::Sharp => write!(f, "sharp"),
            SpellingMode::Flat => write!(f, "flat"),
        }
    }
}

/// A spelled note: letter plus accidental, optionally with an octave.
///
/// Produced only by the speller; pitch is always carried as semitones
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteName {
    /// Letter with accidental: "C", "F#", "B♭".
    pub name: String,
    pub pitch_class: u8,
    /// Present when the caller asked for octave labeling. MIDI convention,
    /// C4 = 60; very low inputs yield negative octaves.
    pub octave: Option<i32>,
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.octave {
            Some(octave) => write!(f, "{}{}", self.name, octave),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Everything the scale analyzer derives from one played run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleAnalysis {
    /// "Heptatonic - 7 notes" style label; empty outside 1-12 notes.
    pub cardinality_label: String,
    /// Consecutive semitone steps joined by " - ".
    pub step_sequence: String,
    pub is_diatonic: bool,
    /// Pitch classes needing accidentals. Sharp-/flat-order for the
    /// diatonic path, ascending numeric for the general path.
    pub key_signature: Vec<u8>,
    pub accidental_count: usize,
    pub prefer_sharp: bool,
}

impl ScaleAnalysis {
    /// Label for display: diatonic scales present as "Diatonic" rather
    /// than their cardinality.
    pub fn display_label(&self) -> String {
        if self.is_diatonic {
            "Diatonic".to_string()
        } else {
            self.cardinality_label.clone()
        }
    }

    /// "2 sharps" / "1 flat" style accidental summary.
    pub fn accidental_label(&self) -> String {
        let mode = if self.prefer_sharp {
            SpellingMode::Sharp
        } else {
            SpellingMode::Flat
        };
        mode.accidental_label(self.accidental_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accidental_label_plural_agreement() {
        assert_eq!(SpellingMode::Sharp.accidental_label(1), "1 sharp");
        assert_eq!(SpellingMode::Sharp.accidental_label(2), "2 sharps");
        assert_eq!(SpellingMode::Flat.accidental_label(0), "0 flats");
    }

    #[test]
    fn note_name_display() {
        let with_octave = NoteName {
            name: "F#".into(),
            pitch_class: 6,
            octave: Some(4),
        };
        assert_eq!(with_octave.to_string(), "F#4");

        let bare = NoteName {
            name: "B♭".into(),
            pitch_class: 10,
            octave: None,
        };
        assert_eq!(bare.to_string(), "B♭");
    }
}
