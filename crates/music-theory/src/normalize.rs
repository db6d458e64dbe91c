//! Canonical relative forms for raw semitone lists.
//!
//! Two forms are kept apart on purpose: interval naming wants distances
//! from a zero root, while scale and key analysis must keep the root's
//! pitch class intact when folding.

/// Shift a run so its first element becomes 0.
///
/// `[a, b]` becomes `[0, b - a]`; only the signed distances survive.
pub fn normalize_to_c(semitones: &[i32]) -> Vec<i32> {
    let Some(&first) = semitones.first() else {
        return Vec::new();
    };
    semitones.iter().map(|s| s - first).collect()
}

/// Shift a run so it starts on the root's pitch class.
///
/// Subtracts the first element and adds back `first mod 12`, preserving
/// the relative shape while keeping the key root correct.
pub fn normalize_to_pitch_classes(semitones: &[i32]) -> Vec<i32> {
    let Some(&first) = semitones.first() else {
        return Vec::new();
    };
    let root_pitch_class = first.rem_euclid(12);
    semitones
        .iter()
        .map(|s| s - first + root_pitch_class)
        .collect()
}
