//! Voicing type definitions
//!
//! This module defines the result types handed to callers and the tunable
//! search parameters.

use serde::Serialize;

/// Fret value marking a muted string.
pub const MUTED: i8 = -1;

/// One complete assignment of mute/open/fret values across all strings.
///
/// Fret numbers are relative to the capo'd nut: `-1` muted, `0` open (or
/// capo'd) string, `n > 0` fretted `n` semitones above the capo. A voicing
/// is immutable once produced.
///
/// # Fields
/// - `frets`: per-string fret values, lowest-pitched string first
/// - `base_fret`: display base fret - the minimum fretted value when it
///   exceeds 2, otherwise 1, so open chords render from the nut while high
///   barre chords show their true position
/// - `shape`: exact shape label (E, G, A, C, or D) when the voicing matches
///   a template precisely
/// - `shape_score`: fuzzy shape similarity, used as a ranking tie-break
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub frets: Vec<i8>,
    pub base_fret: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
    pub shape_score: i32,
}

impl Voicing {
    /// Number of fretted (strictly positive) notes.
    pub fn fretted_count(&self) -> usize {
        self.frets.iter().filter(|&&f| f > 0).count()
    }

    /// Lowest fretted value, if any string is fretted.
    pub fn min_fretted(&self) -> Option<i8> {
        self.frets.iter().filter(|&&f| f > 0).min().copied()
    }

    /// Highest fretted value, if any string is fretted.
    pub fn max_fretted(&self) -> Option<i8> {
        self.frets.iter().filter(|&&f| f > 0).max().copied()
    }

    /// Distance in frets between the lowest and highest fretted note.
    pub fn span(&self) -> i8 {
        match (self.min_fretted(), self.max_fretted()) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }

    /// Number of non-muted strings.
    pub fn sounding_count(&self) -> usize {
        self.frets.iter().filter(|&&f| f != MUTED).count()
    }

    /// Index of the first sounding string, scanning from the lowest string.
    pub fn first_sounding(&self) -> Option<usize> {
        self.frets.iter().position(|&f| f != MUTED)
    }

    /// Muted strings strictly between the first and last sounding string.
    pub fn interior_mutes(&self) -> usize {
        let first = match self.first_sounding() {
            Some(i) => i,
            None => return 0,
        };
        let last = self.frets.iter().rposition(|&f| f != MUTED).unwrap_or(first);
        self.frets[first..=last]
            .iter()
            .filter(|&&f| f == MUTED)
            .count()
    }
}

/// The ordered result of one engine invocation.
///
/// `truncated` reports that the search hit its iteration cap before
/// exhausting the space: the voicings present are valid but the list may be
/// incomplete, and callers should signal partial results instead of
/// implying completeness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicingSet {
    pub voicings: Vec<Voicing>,
    pub truncated: bool,
}

/// Tunable search bounds.
///
/// The iteration cap is owned by a single invocation (threaded through the
/// search, never process-wide), so concurrent calls stay independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Highest fret the search will finger, before the physical limit
    pub search_limit: u8,
    /// Last fret that physically exists on the neck
    pub physical_limit: u8,
    /// Backtracking-node budget; exceeding it truncates the search
    pub max_iterations: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_limit: 15,
            physical_limit: 22,
            max_iterations: 20_000,
        }
    }
}

impl SearchOptions {
    /// Upper fret bound for candidate enumeration under a capo.
    pub(crate) fn fret_limit(&self, capo: u8) -> i8 {
        self.search_limit.min(self.physical_limit.saturating_sub(capo)) as i8
    }
}
