//! # Voicing Ranker
//!
//! Stable multi-key sort producing the final best-first ordering.
//!
//! Keys, in order (ties fall through):
//! 1. Exact shape label equal to the root's plain letter name - a C chord
//!    prefers the one true "C shape" above everything else
//! 2. Fewer fretted notes
//! 3. Lower minimum fretted position
//! 4. Smaller fret span
//! 5. Higher fuzzy shape score
//! 6. More sounding strings
//! 7. Fewer mutes strictly between the first and last sounding string
//!
//! The sort is stable, so voicings equal on every key keep the
//! deterministic order the search produced them in.

use crate::pitch::natural_letter;
use crate::voicing::Voicing;

/// Sort voicings best-first for the given chord root.
pub(crate) fn rank_voicings(voicings: &mut [Voicing], root: u8) {
    let preferred = natural_letter(root);
    voicings.sort_by(|a, b| {
        let a_idiomatic = preferred.is_some() && a.shape == preferred;
        let b_idiomatic = preferred.is_some() && b.shape == preferred;
        b_idiomatic
            .cmp(&a_idiomatic)
            .then_with(|| a.fretted_count().cmp(&b.fretted_count()))
            .then_with(|| a.min_fretted().unwrap_or(0).cmp(&b.min_fretted().unwrap_or(0)))
            .then_with(|| a.span().cmp(&b.span()))
            .then_with(|| b.shape_score.cmp(&a.shape_score))
            .then_with(|| b.sounding_count().cmp(&a.sounding_count()))
            .then_with(|| a.interior_mutes().cmp(&b.interior_mutes()))
    });
}

/// Display base fret: the minimum fretted value when it exceeds 2, else 1.
///
/// Low-position chords render starting at fret 1; high-position barre
/// chords show their true starting fret.
pub(crate) fn base_fret(frets: &[i8]) -> u8 {
    let min = frets.iter().filter(|&&f| f > 0).min().copied().unwrap_or(0);
    if min > 2 {
        min as u8
    } else {
        1
    }
}
