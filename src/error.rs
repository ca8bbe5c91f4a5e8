//! # Error Types
//!
//! This module defines all error types for the fretvoice engine.
//!
//! Input validation fails fast with a descriptive error rather than producing
//! a silently wrong voicing list. An *empty* result is not an error; it is a
//! normal outcome meaning no playable voicing exists for the request. A
//! truncated search is also not an error; it is reported through the
//! `truncated` flag on [`crate::VoicingSet`].
//!
//! ## Usage
//! ```rust
//! use fretvoice::{generate_voicings, VoicingError};
//!
//! let tuning = [4, 9, 2, 7, 11, 4];
//! match generate_voicings(13, &[0, 4, 7], &tuning, 0, None) {
//!     Err(VoicingError::PitchOutOfRange { context, value }) => {
//!         eprintln!("bad {}: {}", context, value);
//!     }
//!     other => panic!("expected a range error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VoicingError {
    /// A pitch class outside [0, 11] was supplied for the root, bass, or a
    /// tuning entry.
    #[error("Invalid {context}: pitch class {value} is out of range 0-11")]
    PitchOutOfRange { context: &'static str, value: u8 },

    /// An interval outside [0, 11] was supplied in the chord's interval set.
    #[error("Invalid interval: {value} is out of range 0-11 semitones")]
    IntervalOutOfRange { value: u8 },

    /// The tuning has no strings.
    #[error("Invalid tuning: at least one string is required")]
    EmptyTuning,

    /// The capo is placed past the end of the fretboard.
    #[error("Invalid capo: fret {capo} is past the last fret ({max})")]
    CapoOutOfRange { capo: u8, max: u8 },

    /// A note name that could not be parsed (expected a letter A-G with an
    /// optional # or b).
    #[error("Unknown note name: '{0}'")]
    UnknownNote(String),

    /// A chord symbol whose quality suffix is not in the quality table.
    #[error("Unknown chord symbol: '{0}'")]
    UnknownChord(String),

    /// A tuning string that is neither a known tuning name nor a parseable
    /// note list.
    #[error("Unknown tuning: '{0}'")]
    UnknownTuning(String),

    /// Invalid YAML in a request document.
    #[error("Invalid request: {0}")]
    RequestError(String),
}
