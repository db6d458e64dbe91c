/// Replicate an interval across the keyboard.
///
/// Takes the two notes of one interval and echoes the same distance
/// upward while the result stays below 127 and downward while it stays
/// above 0, feeding practice drills that span every octave. The distance
/// is taken by magnitude so a descending pair cannot loop forever; a
/// unison expands to nothing.
pub fn expand_interval(root: i32, second: i32) -> Vec<i32> {
    let interval = (second - root).abs();
    if interval == 0 {
        return Vec::new();
    }

    let mut notes = Vec::new();

    let mut ascending = root + interval;
    while ascending < 127 {
        notes.push(ascending);
        ascending += interval;
    }

    let mut descending = root - interval;
    while descending > 0 {
        notes.push(descending);
        descending -= interval;
    }

    notes
}
