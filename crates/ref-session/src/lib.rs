//! Player-session layer over the `music-theory` core.
//!
//! Owns everything the pure classification functions deliberately do
//! not: loading the interval and chord reference tables from JSON,
//! tracking which notes the player is currently holding, and exposing
//! per-session classification entry points whose results are plain data
//! records for a renderer to consume.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ref_session::{ReferenceSession, ReferenceTables, SessionConfig};
//!
//! let tables = ReferenceTables::from_files(
//!     "factory_intervals.json".as_ref(),
//!     "factory_chords.json".as_ref(),
//! )?;
//! let mut session = ReferenceSession::new(Arc::new(tables), SessionConfig::default());
//!
//! session.handle_note(60, 100);
//! session.handle_note(67, 100);
//! if let Some(reading) = session.single_interval()? {
//!     println!("{}", reading.name); // "Perfect Fifth"
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod generate;
pub mod session;
pub mod tables;

pub use error::{SessionError, TableKind};
pub use generate::expand_interval;
pub use session::{
    IntervalReading, NoteTracker, RefMode, ReferenceSession, SessionConfig,
};
pub use tables::ReferenceTables;
