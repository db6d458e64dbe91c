//! Music-theory classification core for the interactive reference tool.
//!
//! Pure functions that turn semitones into conventional notation
//! metadata: note spellings, interval and chord names, scale analyses,
//! and circle-of-fifths key signatures. Everything here is synchronous
//! and side-effect free; the only state is the per-session
//! [`SpellerContext`] that callers pass in by mutable reference.
//!
//! A semitone is a signed integer whose sign encodes spelling intent
//! (negative = flat) and whose absolute value is the pitch height, MIDI
//! style. `60` and `-60` are the same C; `61` is C#, `-61` is D♭.

pub mod chord;
pub mod interval;
pub mod key;
pub mod normalize;
pub mod scale;
pub mod spell;
pub mod tables;
pub mod types;

pub use chord::{chord_shape, name_chord};
pub use interval::{name_interval, StepInterval};
pub use key::{
    classify_root, diatonic_key_signature, sort_by_accidental_order, KeyCategory, SpellerContext,
    FLAT_ORDER, SHARP_ORDER,
};
pub use normalize::{normalize_to_c, normalize_to_pitch_classes};
pub use scale::{
    analyze_scale, cardinality_label, general_key_signature, is_diatonic, renderer_key_signature,
    step_intervals, step_sequence, DIATONIC_STEP_PATTERN, NATURAL_PITCH_CLASSES,
};
pub use spell::{black_key_count, black_keys, is_black_key, spell_note};
pub use tables::{ChordEntry, ChordTable, IntervalEntry, IntervalTable};
pub use types::{NoteName, ScaleAnalysis, SpellingMode};
