use serde::{Deserialize, Serialize};

use crate::types::SpellingMode;

/// Traditional notation order of sharps: F C G D A E B.
pub const SHARP_ORDER: [u8; 7] = [5, 0, 7, 2, 9, 4, 11];
/// Traditional notation order of flats: B E A D G C F.
pub const FLAT_ORDER: [u8; 7] = [11, 4, 9, 2, 7, 0, 5];

/// Roots whose major keys are conventionally written with sharps:
/// C G D A E B F# C#.
const SHARP_ROOTS: [u8; 8] = [0, 7, 2, 9, 4, 11, 6, 1];
/// Roots whose major keys are conventionally written with flats:
/// C F B♭ E♭ A♭ D♭ G♭ C♭.
const FLAT_ROOTS: [u8; 8] = [0, 5, 10, 3, 8, 1, 6, 11];

/// How a root pitch class sits in conventional key spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    Sharp,
    Flat,
    /// Spellable either way (C, C#/D♭, F#/G♭, B/C♭); the current mode
    /// stands.
    Ambiguous,
    Neither,
}

pub fn classify_root(pitch_class: u8) -> KeyCategory {
    let pc = pitch_class % 12;
    let sharp = SHARP_ROOTS.contains(&pc);
    let flat = FLAT_ROOTS.contains(&pc);
    match (sharp, flat) {
        (true, true) => KeyCategory::Ambiguous,
        (true, false) => KeyCategory::Sharp,
        (false, true) => KeyCategory::Flat,
        (false, false) => KeyCategory::Neither,
    }
}

/// Circle-of-fifths key signature for a diatonic root: the first N
/// accidentals of the relevant notation order.
///
/// Roots that are not diatonic keys in the given mode yield an empty
/// signature, as does C itself.
pub fn diatonic_key_signature(root_pitch_class: u8, mode: SpellingMode) -> Vec<u8> {
    let pc = root_pitch_class % 12;
    match mode {
        SpellingMode::Sharp => {
            let count = match pc {
                0 => 0,  // C
                7 => 1,  // G
                2 => 2,  // D
                9 => 3,  // A
                4 => 4,  // E
                11 => 5, // B
                6 => 6,  // F#
                1 => 7,  // C#
                _ => 0,
            };
            SHARP_ORDER[..count].to_vec()
        }
        SpellingMode::Flat => {
            let count = match pc {
                0 => 0,  // C
                5 => 1,  // F
                10 => 2, // B♭
                3 => 3,  // E♭
                8 => 4,  // A♭
                1 => 5,  // D♭
                6 => 6,  // G♭
                11 => 7, // C♭
                _ => 0,
            };
            FLAT_ORDER[..count].to_vec()
        }
    }
}

/// Re-order pitch classes by the traditional sharp or flat sequence,
/// dropping anything outside it. Never sorts numerically.
pub fn sort_by_accidental_order(pitch_classes: &[u8], mode: SpellingMode) -> Vec<u8> {
    let order = match mode {
        SpellingMode::Sharp => &SHARP_ORDER,
        SpellingMode::Flat => &FLAT_ORDER,
    };

    let mut sorted: Vec<u8> = pitch_classes
        .iter()
        .map(|pc| pc % 12)
        .filter(|pc| order.contains(pc))
        .collect();
    sorted.sort_by_key(|pc| order.iter().position(|o| o == pc));
    sorted
}

/// Per-session spelling state: the current sharp/flat mode and the last
/// root that was allowed to change it.
///
/// Each player session owns one of these; classification calls borrow it
/// mutably, so concurrent hosts serialize per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellerContext {
    mode: SpellingMode,
    last_root: Option<u8>,
}

impl Default for SpellerContext {
    fn default() -> Self {
        Self::new(SpellingMode::Flat)
    }
}

impl SpellerContext {
    pub fn new(initial_mode: SpellingMode) -> Self {
        Self {
            mode: initial_mode,
            last_root: None,
        }
    }

    pub fn mode(&self) -> SpellingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SpellingMode) {
        self.mode = mode;
    }

    /// Feed a new scale root and return the resulting mode.
    ///
    /// The mode switches only when the root differs from the previous one
    /// and its traditional-key membership is unambiguous; a repeated root
    /// never toggles anything.
    pub fn observe_root(&mut self, root_pitch_class: u8) -> SpellingMode {
        let pc = root_pitch_class % 12;

        if self.last_root != Some(pc) {
            match classify_root(pc) {
                KeyCategory::Sharp => self.mode = SpellingMode::Sharp,
                KeyCategory::Flat => self.mode = SpellingMode::Flat,
                KeyCategory::Ambiguous | KeyCategory::Neither => {}
            }
        }
        self.last_root = Some(pc);

        self.mode
    }
}
