//! # Voicing Engine
//!
//! Enumerate and search every physically reasonable fingering of a chord.
//!
//! ## Pipeline
//! 1. `candidates` - per-string legal fret choices (mute / open / fretted)
//! 2. `search` - depth-first, pruned backtracking over strings
//! 3. `dominance` - drop voicings strictly subsumed by richer ones
//!
//! The engine works in capo-relative pitch space: the capo is added
//! uniformly to every open string *and* to the requested chord tones before
//! any pitch computation, so returned fret numbers are always relative to
//! the capo'd nut. Re-deriving a sounding string's absolute pitch is
//! `tuning[i] + capo + frets[i]`.
//!
//! ## Sub-modules
//! - `types` - Voicing, VoicingSet, SearchOptions
//! - `candidates` - candidate fret enumerator
//! - `search` - backtracking search with pruning rules
//! - `dominance` - dominated-voicing elimination
//!
//! ## Entry Point
//! The crate-level [`crate::generate_voicings`] drives this module; nothing
//! here performs I/O or holds state across calls.

mod candidates;
mod dominance;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use types::{SearchOptions, Voicing, VoicingSet, MUTED};

pub(crate) use candidates::candidate_frets;
pub(crate) use dominance::filter_dominated;
pub(crate) use search::search_voicings;
