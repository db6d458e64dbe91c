use crate::interval::StepInterval;
use crate::key::{diatonic_key_signature, sort_by_accidental_order, SpellerContext};
use crate::normalize::normalize_to_pitch_classes;
use crate::types::{ScaleAnalysis, SpellingMode};

/// The one step sequence accepted as diatonic. This is a strict literal
/// match on the numeric step format, not a rotation-invariant modal
/// check, so modes other than the major shape do not qualify.
pub const DIATONIC_STEP_PATTERN: &str = "2 - 2 - 1 - 2 - 2 - 2";

/// The seven naturals: C D E F G A B.
pub const NATURAL_PITCH_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Cardinality term for a scale of `length` notes, e.g.
/// "Heptatonic - 7 notes". Lengths outside 1-12 produce an empty label.
pub fn cardinality_label(length: usize) -> String {
    let term = match length {
        1 => "Monotonic",
        2 => "Ditonic",
        3 => "Tritonic",
        4 => "Tetratonic",
        5 => "Pentatonic",
        6 => "Hexatonic",
        7 => "Heptatonic",
        8 => "Octatonic",
        9 => "Nonatonic",
        10 => "Decatonic",
        11 => "Undecatonic",
        12 => "Duodecatonic",
        _ => return String::new(),
    };
    let plural = if length == 1 { "note" } else { "notes" };
    format!("{} - {} {}", term, length, plural)
}

fn steps(semitones: &[i32]) -> Vec<i32> {
    semitones.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Consecutive semitone differences joined by " - ". This is the form the
/// diatonic check consumes.
pub fn step_sequence(semitones: &[i32]) -> String {
    steps(semitones)
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Step sequence as interval abbreviations (m2, M2, ... M7) when every
/// step maps onto that vocabulary; falls back to the numeric form
/// otherwise.
pub fn step_intervals(semitones: &[i32]) -> String {
    let steps = steps(semitones);
    let abbreviated: Option<Vec<&'static str>> = steps
        .iter()
        .map(|&step| StepInterval::from_semitones(step).map(|s| s.abbreviation()))
        .collect();

    match abbreviated {
        Some(names) => names.join(" - "),
        None => step_sequence(semitones),
    }
}

pub fn is_diatonic(step_sequence: &str) -> bool {
    step_sequence == DIATONIC_STEP_PATTERN
}

/// Key-signature accidentals for an arbitrary scale.
///
/// Starts from the naturals, drops those present in the scale, and keeps
/// the rest as candidates. Two white-key adjacencies need extra care: a
/// missing C or F in sharp mode demands the black key above it (C#/F#)
/// unless already a candidate, and a missing E or B in flat mode demands
/// the one below (E♭/B♭). Result is sorted ascending by pitch-class
/// value; use `sort_by_accidental_order` for the renderer-facing order.
pub fn general_key_signature(semitones: &[i32], mode: SpellingMode) -> Vec<u8> {
    let present: Vec<u8> = semitones
        .iter()
        .map(|s| s.rem_euclid(12) as u8)
        .collect();

    let mut candidates: Vec<u8> = NATURAL_PITCH_CLASSES
        .iter()
        .copied()
        .filter(|natural| !present.contains(natural))
        .collect();

    let adjacencies: [(u8, u8); 2] = match mode {
        SpellingMode::Sharp => [(0, 1), (5, 6)],
        SpellingMode::Flat => [(4, 3), (11, 10)],
    };
    for (natural, adjacent) in adjacencies {
        if candidates.contains(&natural) && !candidates.contains(&adjacent) {
            candidates.push(adjacent);
        }
    }

    candidates.sort_unstable();
    candidates
}

/// Classify an ordered run of semitones as a scale.
///
/// Updates the context's spelling mode from the scale root before any
/// signature derivation: diatonic scales read the circle-of-fifths table,
/// everything else goes through the general accidental derivation.
pub fn analyze_scale(semitones: &[i32], context: &mut SpellerContext) -> ScaleAnalysis {
    if semitones.is_empty() {
        return ScaleAnalysis {
            cardinality_label: String::new(),
            step_sequence: String::new(),
            is_diatonic: false,
            key_signature: Vec::new(),
            accidental_count: 0,
            prefer_sharp: context.mode() == SpellingMode::Sharp,
        };
    }

    let normalized = normalize_to_pitch_classes(semitones);
    let root_pitch_class = normalized[0].rem_euclid(12) as u8;
    let mode = context.observe_root(root_pitch_class);

    let step_sequence = step_sequence(semitones);
    let diatonic = is_diatonic(&step_sequence);

    let key_signature = if diatonic {
        diatonic_key_signature(root_pitch_class, mode)
    } else {
        general_key_signature(&normalized, mode)
    };

    ScaleAnalysis {
        cardinality_label: cardinality_label(semitones.len()),
        step_sequence,
        is_diatonic: diatonic,
        accidental_count: key_signature.len(),
        key_signature,
        prefer_sharp: mode == SpellingMode::Sharp,
    }
}

/// The analysis' accidental set in traditional notation order, for
/// staff rendering.
pub fn renderer_key_signature(analysis: &ScaleAnalysis) -> Vec<u8> {
    let mode = if analysis.prefer_sharp {
        SpellingMode::Sharp
    } else {
        SpellingMode::Flat
    };
    sort_by_accidental_order(&analysis.key_signature, mode)
}
