//! Backtracking voicing search
//!
//! Depth-first assignment over strings in fixed index order, lowest-pitched
//! string first. The recursion carries its pruning state by value: the
//! running min/max of fretted values, whether any open string is in use, and
//! a bitmask of covered target pitch classes. Depth equals the string count,
//! so direct recursion needs no explicit stack.
//!
//! ## Pruning rules (checked before descending into a candidate)
//! 1. Coverage feasibility: more uncovered targets than unassigned strings
//!    can never complete.
//! 2. Bass placement: the first sounding string must carry the effective
//!    bass pitch class.
//! 3. Span: fretted notes must fit a four-fret box (span <= 3).
//! 4. Open/fretted compatibility: open strings never combine with fretted
//!    notes above fret 4.
//! 5. Finger budget: treating the minimum fretted value as a single-finger
//!    barre, at most 3 fretted notes may lie strictly above it.
//!
//! The iteration counter is owned by the invocation. Once it crosses the
//! cap, expansion stops everywhere and the voicings accumulated so far are
//! returned with the `truncated` flag raised.

use super::types::MUTED;

/// Maximum distance between the lowest and highest fretted note.
const MAX_SPAN: i8 = 3;

/// Highest fretted note an open string may coexist with.
const OPEN_REACH_LIMIT: i8 = 4;

/// Fretted notes allowed strictly above the barre fret.
const FINGERS_ABOVE_BARRE: usize = 3;

/// Raw search output: accepted fret assignments plus the truncation flag.
pub(crate) struct SearchOutcome {
    pub shapes: Vec<Vec<i8>>,
    pub truncated: bool,
}

/// Run the full backtracking search.
///
/// `candidates` holds the per-string legal frets from the enumerator,
/// `open_pitches` the capo-relative open pitch class per string. Accepted
/// assignments cover `target_mask` completely and sound at least
/// `min_sounding` strings.
pub(crate) fn search_voicings(
    candidates: &[Vec<i8>],
    open_pitches: &[u8],
    target_mask: u16,
    bass: u8,
    min_sounding: usize,
    max_iterations: usize,
) -> SearchOutcome {
    let mut search = Search {
        candidates,
        open_pitches,
        target_mask,
        bass,
        min_sounding,
        max_iterations,
        iterations: 0,
        truncated: false,
        accepted: Vec::new(),
    };
    let mut frets = Vec::with_capacity(candidates.len());
    search.descend(&mut frets, State::default());
    SearchOutcome {
        shapes: search.accepted,
        truncated: search.truncated,
    }
}

/// Per-branch pruning state, copied down the recursion.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    min_fret: Option<i8>,
    max_fret: Option<i8>,
    has_open: bool,
    covered: u16,
}

struct Search<'a> {
    candidates: &'a [Vec<i8>],
    open_pitches: &'a [u8],
    target_mask: u16,
    bass: u8,
    min_sounding: usize,
    max_iterations: usize,
    iterations: usize,
    truncated: bool,
    accepted: Vec<Vec<i8>>,
}

impl Search<'_> {
    fn descend(&mut self, frets: &mut Vec<i8>, state: State) {
        if self.truncated {
            return;
        }
        if self.iterations >= self.max_iterations {
            self.truncated = true;
            return;
        }
        self.iterations += 1;

        let depth = frets.len();
        let string_count = self.candidates.len();
        if depth == string_count {
            let sounding = frets.iter().filter(|&&f| f != MUTED).count();
            if state.covered == self.target_mask && sounding >= self.min_sounding {
                self.accepted.push(frets.clone());
            }
            return;
        }

        // Rule 1: more uncovered targets than strings left can never complete
        let uncovered = (self.target_mask & !state.covered).count_ones() as usize;
        if uncovered > string_count - depth {
            return;
        }

        // Copy the slice reference out so the loop does not hold a borrow of
        // self across the recursive call
        let candidates = self.candidates;
        for &fret in &candidates[depth] {
            if self.truncated {
                return;
            }
            if fret == MUTED {
                frets.push(MUTED);
                self.descend(frets, state);
                frets.pop();
                continue;
            }

            let pitch = (self.open_pitches[depth] + fret as u8) % 12;

            // Rule 2: the first sounding string carries the bass
            let first_sounding = frets.iter().all(|&f| f == MUTED);
            if first_sounding && pitch != self.bass {
                continue;
            }

            let mut next = state;
            if fret > 0 {
                next.min_fret = Some(state.min_fret.map_or(fret, |m| m.min(fret)));
                next.max_fret = Some(state.max_fret.map_or(fret, |m| m.max(fret)));
                // Rule 3: one-hand box of at most four consecutive frets
                if next.max_fret.unwrap() - next.min_fret.unwrap() > MAX_SPAN {
                    continue;
                }
            } else {
                next.has_open = true;
            }

            // Rule 4: open strings never mix with high-neck reaches
            if next.has_open && next.max_fret.unwrap_or(0) > OPEN_REACH_LIMIT {
                continue;
            }

            // Rule 5: a barre at the minimum fret frees at most three fingers
            if fret > 0 {
                let barre = next.min_fret.unwrap();
                let above = frets
                    .iter()
                    .chain(std::iter::once(&fret))
                    .filter(|&&f| f > barre)
                    .count();
                if above > FINGERS_ABOVE_BARRE {
                    continue;
                }
            }

            next.covered = state.covered | (1 << pitch);
            frets.push(fret);
            self.descend(frets, next);
            frets.pop();
        }
    }
}
