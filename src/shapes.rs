//! # Shape Classifier
//!
//! Matches voicings against the five classic open/barre shape templates
//! (E, G, A, C, D) and computes a fuzzy similarity score used for ranking.
//!
//! Shapes only make sense on a fretboard whose adjacent-string intervals are
//! the standard (5, 5, 5, 4, 5) semitone layout; on any other tuning no
//! label is ever assigned and every fuzzy score is 0.
//!
//! Each template is anchored on the string that carries the chord root in
//! the open form of the shape. An *exact* match requires the anchor to sound
//! the root and every other string to sit at its template offset from the
//! anchor fret, with don't-care strings muted. The *fuzzy* score rewards
//! per-string agreement with a template without requiring a full match.

use crate::voicing::MUTED;

/// One slot of a shape template.
///
/// `Muted` is the "don't care" slot: an exact match requires the string to be
/// muted, and a fuzzy match penalizes it when it sounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Fret offset relative to the anchor string's fret
    At(i8),
    /// String must be muted for an exact match
    Muted,
}

/// A named shape template: anchor string plus per-string offsets.
#[derive(Debug, Clone, Copy)]
pub struct ShapePattern {
    pub name: &'static str,
    /// Index of the string carrying the root in the open form of the shape
    pub anchor: usize,
    pub slots: [Slot; 6],
}

use Slot::{At, Muted};

/// The fixed shape library, in match-priority order.
pub const SHAPES: [ShapePattern; 5] = [
    // Open E: 0 2 2 1 0 0
    ShapePattern {
        name: "E",
        anchor: 0,
        slots: [At(0), At(2), At(2), At(1), At(0), At(0)],
    },
    // Open G: 3 2 0 0 0 3
    ShapePattern {
        name: "G",
        anchor: 0,
        slots: [At(0), At(-1), At(-3), At(-3), At(-3), At(0)],
    },
    // Open A: x 0 2 2 2 0
    ShapePattern {
        name: "A",
        anchor: 1,
        slots: [Muted, At(0), At(2), At(2), At(2), At(0)],
    },
    // Open C: x 3 2 0 1 0
    ShapePattern {
        name: "C",
        anchor: 1,
        slots: [Muted, At(0), At(-1), At(-3), At(-2), At(-3)],
    },
    // Open D: x x 0 2 3 2
    ShapePattern {
        name: "D",
        anchor: 2,
        slots: [Muted, Muted, At(0), At(2), At(3), At(2)],
    },
];

/// Span of adjacent-string intervals the shape library is defined for.
const CAGED_INTERVALS: [u8; 5] = [5, 5, 5, 4, 5];

/// Whether the shape library applies to this tuning at all.
pub(crate) fn applies_to(tuning: &[u8]) -> bool {
    if tuning.len() != 6 {
        return false;
    }
    tuning
        .windows(2)
        .zip(CAGED_INTERVALS)
        .all(|(pair, interval)| (pair[1] + 12 - pair[0]) % 12 == interval)
}

/// Classify a voicing against the shape library.
///
/// Returns the first template (library order E, G, A, C, D) whose anchor
/// string sounds the chord root and whose every slot matches exactly.
pub(crate) fn classify(frets: &[i8], tuning: &[u8], root: u8) -> Option<&'static str> {
    if !applies_to(tuning) {
        return None;
    }
    SHAPES
        .iter()
        .find(|shape| matches_exactly(shape, frets, tuning, root))
        .map(|shape| shape.name)
}

fn matches_exactly(shape: &ShapePattern, frets: &[i8], tuning: &[u8], root: u8) -> bool {
    let anchor_fret = frets[shape.anchor];
    if anchor_fret < 0 {
        return false;
    }
    if (tuning[shape.anchor] + anchor_fret as u8) % 12 != root % 12 {
        return false;
    }
    frets.iter().zip(shape.slots).all(|(&fret, slot)| match slot {
        // Offsets below the nut can never match; a muted string must not be
        // mistaken for an expected fret of -1
        At(offset) => fret >= 0 && fret == anchor_fret + offset,
        Muted => fret == MUTED,
    })
}

/// Fuzzy shape similarity score for ranking.
///
/// For every string that sounds the chord root and every template anchored
/// on that string, score +2 per string sitting exactly at its template
/// offset and -1 per sounded string that misses (including sounded strings
/// on don't-care slots). A candidate qualifies only with at least 3 exact
/// matches; the result is the best qualifying score, 0 if none qualify.
pub(crate) fn fuzzy_score(frets: &[i8], tuning: &[u8], root: u8) -> i32 {
    if !applies_to(tuning) {
        return 0;
    }

    let mut best = 0;
    for (string, &fret) in frets.iter().enumerate() {
        if fret < 0 || (tuning[string] + fret as u8) % 12 != root % 12 {
            continue;
        }
        for shape in SHAPES.iter().filter(|shape| shape.anchor == string) {
            let (matches, score) = score_against(shape, frets, fret);
            if matches >= 3 && score > best {
                best = score;
            }
        }
    }
    best
}

fn score_against(shape: &ShapePattern, frets: &[i8], anchor_fret: i8) -> (u32, i32) {
    let mut matches = 0;
    let mut score = 0;
    for (&fret, slot) in frets.iter().zip(shape.slots) {
        match slot {
            At(offset) => {
                let expected = anchor_fret + offset;
                if fret >= 0 && expected >= 0 && fret == expected {
                    matches += 1;
                    score += 2;
                } else if fret >= 0 {
                    score -= 1;
                }
            }
            Muted => {
                if fret >= 0 {
                    score -= 1;
                }
            }
        }
    }
    (matches, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn standard() -> Vec<u8> {
        Tuning::standard().strings().to_vec()
    }

    #[test]
    fn test_open_shapes_classify() {
        let tuning = standard();
        assert_eq!(classify(&[0, 2, 2, 1, 0, 0], &tuning, 4), Some("E"));
        assert_eq!(classify(&[3, 2, 0, 0, 0, 3], &tuning, 7), Some("G"));
        assert_eq!(classify(&[-1, 0, 2, 2, 2, 0], &tuning, 9), Some("A"));
        assert_eq!(classify(&[-1, 3, 2, 0, 1, 0], &tuning, 0), Some("C"));
        assert_eq!(classify(&[-1, -1, 0, 2, 3, 2], &tuning, 2), Some("D"));
    }

    #[test]
    fn test_barre_shapes_classify() {
        let tuning = standard();
        // F major as an E shape barred at fret 1
        assert_eq!(classify(&[1, 3, 3, 2, 1, 1], &tuning, 5), Some("E"));
        // B major as an A shape barred at fret 2
        assert_eq!(classify(&[-1, 2, 4, 4, 4, 2], &tuning, 11), Some("A"));
        // C major as an E shape barred at fret 8
        assert_eq!(classify(&[8, 10, 10, 9, 8, 8], &tuning, 0), Some("E"));
    }

    #[test]
    fn test_anchor_must_sound_the_root() {
        let tuning = standard();
        // Correct E-shape geometry but the wrong root for the anchor pitch
        assert_eq!(classify(&[1, 3, 3, 2, 1, 1], &tuning, 0), None);
    }

    #[test]
    fn test_dont_care_slot_requires_mute() {
        let tuning = standard();
        // C shape with the low E sounded: no longer an exact match
        assert_eq!(classify(&[0, 3, 2, 0, 1, 0], &tuning, 0), None);
    }

    #[test]
    fn test_no_shape_on_foreign_tuning() {
        let dadgad = Tuning::named("dadgad").unwrap();
        let frets = [0, 2, 2, 1, 0, 0];
        assert_eq!(classify(&frets, dadgad.strings(), 4), None);
        assert_eq!(fuzzy_score(&frets, dadgad.strings(), 4), 0);
    }

    #[test]
    fn test_low_anchor_offsets_cannot_match_mutes() {
        let tuning = standard();
        // G shape anchored at fret 2 expects fret -1 on three strings; muted
        // strings must not satisfy that
        assert_eq!(classify(&[2, 1, -1, -1, -1, 2], &tuning, 6), None);
    }

    #[test]
    fn test_fuzzy_score_full_match() {
        let tuning = standard();
        // All five sounded strings of the C shape match: 5 * 2 = 10
        assert_eq!(fuzzy_score(&[-1, 3, 2, 0, 1, 0], &tuning, 0), 10);
        // Six matching strings of an E barre: 6 * 2 = 12
        assert_eq!(fuzzy_score(&[1, 3, 3, 2, 1, 1], &tuning, 5), 12);
    }

    #[test]
    fn test_fuzzy_score_partial_match() {
        let tuning = standard();
        // A-shape A major with the top string muted: anchor + two inner
        // strings match (+6), nothing else sounds against the template
        assert_eq!(fuzzy_score(&[-1, 0, 2, 2, -1, -1], &tuning, 9), 6);
    }

    #[test]
    fn test_fuzzy_score_requires_three_matches() {
        let tuning = standard();
        // Only the anchor and one other string agree with any template
        assert_eq!(fuzzy_score(&[-1, 0, 2, -1, -1, -1], &tuning, 9), 0);
    }
}
