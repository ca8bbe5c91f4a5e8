//! Candidate fret enumerator
//!
//! For each string, the set of fret choices the search may assign: muting is
//! always legal, the open string is legal when its pitch class is a chord
//! target, and a fretted note is legal when the resulting pitch class is a
//! target and the fret is inside the search bound.

use super::types::MUTED;

/// Enumerate the legal fret choices for one string.
///
/// `open_pitch` is the string's capo-relative open pitch class,
/// `target_mask` a 12-bit set of target pitch classes, and `fret_limit` the
/// inclusive upper fret bound. Candidates are emitted in a fixed order
/// (mute, open, ascending frets) so the search is deterministic.
pub(crate) fn candidate_frets(open_pitch: u8, target_mask: u16, fret_limit: i8) -> Vec<i8> {
    let mut frets = vec![MUTED];
    if target_mask & (1 << (open_pitch % 12)) != 0 {
        frets.push(0);
    }
    for fret in 1..=fret_limit {
        let pitch = (open_pitch + fret as u8) % 12;
        if target_mask & (1 << pitch) != 0 {
            frets.push(fret);
        }
    }
    frets
}
