use thiserror::Error;

/// Which reference table a call needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Intervals,
    Chords,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Intervals => write!(f, "interval"),
            TableKind::Chords => write!(f, "chord"),
        }
    }
}

/// Errors surfaced by session-level classification calls.
///
/// A shape or distance missing from a loaded table is not an error — it
/// is an explicit no-match `None`. Errors are reserved for precondition
/// failures, which are fatal to the one call that hit them.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0} table requested before it was loaded")]
    TableNotLoaded(TableKind),
}
