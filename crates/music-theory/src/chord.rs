use crate::normalize::normalize_to_c;
use crate::spell::spell_note;
use crate::tables::ChordTable;
use crate::types::SpellingMode;

/// Reduce a voicing to its canonical shape: offsets from the lowest note,
/// folded to pitch classes, sorted ascending, duplicates removed.
pub fn chord_shape(semitones: &[i32]) -> Vec<i32> {
    let mut sorted = semitones.to_vec();
    sorted.sort_unstable();

    let mut shape: Vec<i32> = normalize_to_c(&sorted)
        .into_iter()
        .map(|s| s.rem_euclid(12))
        .collect();
    shape.sort_unstable();
    shape.dedup();
    shape
}

/// Name a chord from its sounding semitones.
///
/// The root is the lowest semitone; its letter is spelled in the given
/// mode. The canonical shape must equal a table entry's canonicalized
/// offsets exactly — a miss returns `None` rather than a guess. Inversions
/// are not re-derived: a voicing whose lowest note is not the root is
/// named (or missed) as if that note were the root.
pub fn name_chord(
    semitones: &[i32],
    table: &ChordTable,
    mode: SpellingMode,
) -> Option<String> {
    let &root = semitones.iter().min()?;
    let shape = chord_shape(semitones);

    let name = table
        .iter()
        .find(|(_, entry)| chord_shape(&entry.semitones_from_root) == shape)
        .map(|(name, _)| name)?;

    let signed_root = match mode {
        SpellingMode::Sharp => root,
        SpellingMode::Flat => -root,
    };
    let root_name = spell_note(signed_root, false);

    Some(format!("{} {}", root_name, name))
}
