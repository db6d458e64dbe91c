use crate::types::NoteName;

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// Spell a semitone as a note name.
///
/// The sign of `semitone` carries spelling intent: negative selects the
/// flat spelling of the enharmonic pitch classes {1,3,6,8,10}, positive or
/// zero selects sharp. `abs(semitone)` is the pitch height; any integer is
/// a valid input.
pub fn spell_note(semitone: i32, include_octave: bool) -> NoteName {
    let use_flat = semitone < 0;
    let height = semitone.abs();
    let pitch_class = (height % 12) as u8;
    let octave = height / 12 - 1;

    let name = if use_flat {
        NOTE_NAMES_FLAT[pitch_class as usize]
    } else {
        NOTE_NAMES_SHARP[pitch_class as usize]
    };

    NoteName {
        name: name.to_string(),
        pitch_class,
        octave: include_octave.then_some(octave),
    }
}

/// True for the five raised/lowered pitch classes (the piano's black keys).
pub fn is_black_key(semitone: i32) -> bool {
    matches!(semitone.rem_euclid(12), 1 | 3 | 6 | 8 | 10)
}

/// Black keys in a list of semitones, optionally folded to pitch classes.
pub fn black_keys(semitones: &[i32], fold: bool) -> Vec<i32> {
    semitones
        .iter()
        .copied()
        .filter(|&s| is_black_key(s))
        .map(|s| if fold { s.rem_euclid(12) } else { s })
        .collect()
}

pub fn black_key_count(semitones: &[i32]) -> usize {
    semitones.iter().filter(|&&s| is_black_key(s)).count()
}
