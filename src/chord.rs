//! # Chord Model
//!
//! Chord specifications and chord-symbol parsing.
//!
//! A [`ChordSpec`] is the harmonic intent handed to the voicing engine: a
//! root pitch class, a set of interval semitones added to the root mod 12,
//! and an optional slash-chord bass. The symbol parser turns text like
//! `"Am7"` or `"C/E"` into a spec using a fixed quality table.
//!
//! ## Supported Chord Qualities
//! - **Major**: `C`, `Cmaj`, `CM` → root, major 3rd, perfect 5th
//! - **Minor**: `m`, `min`, `-` → root, minor 3rd, perfect 5th
//! - **Power**: `5` → root, perfect 5th
//! - **Dominant 7th**: `7` → major triad + minor 7th
//! - **Major 7th**: `maj7`, `M7` → major triad + major 7th
//! - **Minor 7th**: `m7`, `min7`, `-7` → minor triad + minor 7th
//! - **Diminished**: `dim`, `°` / **Dim 7th**: `dim7` / **Half-dim**: `m7b5`
//! - **Augmented**: `aug`, `+`
//! - **Suspended**: `sus2`, `sus4` (also plain `sus`)
//! - **Sixths**: `6`, `m6`
//! - **Ninths**: `9`, `maj9`, `m9`, `add9`
//!
//! A trailing `/Note` marks a slash chord: `C/E` is a C major triad voiced
//! with E as the lowest sounding note.

use crate::error::VoicingError;
use crate::pitch::parse_note;

/// The harmonic intent of a chord request.
///
/// The root is always a target pitch class, whether or not interval 0 is
/// listed. The effective bass is `bass` when present, otherwise the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSpec {
    /// Root pitch class in [0, 11]
    pub root: u8,
    /// Interval semitones, each added to the root mod 12
    pub intervals: Vec<u8>,
    /// Slash-chord bass pitch class; `None` means the root is the bass
    pub bass: Option<u8>,
}

impl ChordSpec {
    /// Build a spec from raw parts.
    pub fn new(root: u8, intervals: &[u8], bass: Option<u8>) -> Self {
        Self {
            root,
            intervals: intervals.to_vec(),
            bass,
        }
    }

    /// The bass pitch class the first sounding string must carry.
    pub fn effective_bass(&self) -> u8 {
        self.bass.unwrap_or(self.root)
    }

    /// Distinct pitch classes named by the root and intervals, in ascending
    /// order. Does not include a slash bass outside the chord tones.
    pub fn chord_tones(&self) -> Vec<u8> {
        let mut tones = vec![self.root % 12];
        for &interval in &self.intervals {
            let pc = (self.root + interval) % 12;
            if !tones.contains(&pc) {
                tones.push(pc);
            }
        }
        tones.sort_unstable();
        tones
    }
}

/// Quality suffix table: (names, interval semitones above the root)
const QUALITIES: &[(&[&str], &[u8])] = &[
    (&["", "maj", "M"], &[0, 4, 7]),
    (&["m", "min", "-"], &[0, 3, 7]),
    (&["5"], &[0, 7]),
    (&["7"], &[0, 4, 7, 10]),
    (&["maj7", "M7"], &[0, 4, 7, 11]),
    (&["m7", "min7", "-7"], &[0, 3, 7, 10]),
    (&["dim", "°"], &[0, 3, 6]),
    (&["dim7"], &[0, 3, 6, 9]),
    (&["m7b5", "ø"], &[0, 3, 6, 10]),
    (&["aug", "+"], &[0, 4, 8]),
    (&["sus2"], &[0, 2, 7]),
    (&["sus4", "sus"], &[0, 5, 7]),
    (&["6"], &[0, 4, 7, 9]),
    (&["m6", "min6"], &[0, 3, 7, 9]),
    (&["9"], &[0, 2, 4, 7, 10]),
    (&["maj9", "M9"], &[0, 2, 4, 7, 11]),
    (&["m9", "min9"], &[0, 2, 3, 7, 10]),
    (&["add9"], &[0, 2, 4, 7]),
];

/// Look up a quality suffix in the table.
fn quality_intervals(quality: &str) -> Option<&'static [u8]> {
    QUALITIES
        .iter()
        .find(|(names, _)| names.contains(&quality))
        .map(|(_, intervals)| *intervals)
}

/// Parse a chord symbol into a [`ChordSpec`].
///
/// # Example
/// ```rust
/// use fretvoice::parse_chord_symbol;
///
/// let c = parse_chord_symbol("C").unwrap();
/// assert_eq!(c.root, 0);
/// assert_eq!(c.intervals, vec![0, 4, 7]);
/// assert_eq!(c.bass, None);
///
/// let slash = parse_chord_symbol("Am7/G").unwrap();
/// assert_eq!(slash.root, 9);
/// assert_eq!(slash.bass, Some(7));
/// ```
///
/// # Errors
/// Returns [`VoicingError::UnknownNote`] for an unparseable root or bass and
/// [`VoicingError::UnknownChord`] for a quality suffix not in the table.
pub fn parse_chord_symbol(symbol: &str) -> Result<ChordSpec, VoicingError> {
    let trimmed = symbol.trim();
    let (main, slash) = match trimmed.split_once('/') {
        Some((main, bass)) => (main, Some(bass)),
        None => (trimmed, None),
    };

    let chars: Vec<char> = main.chars().collect();
    if chars.is_empty() {
        return Err(VoicingError::UnknownChord(symbol.to_string()));
    }

    // Root letter plus optional accidental
    let mut idx = 1;
    if idx < chars.len() && (chars[idx] == '#' || chars[idx] == 'b') {
        idx += 1;
    }
    let root_len: usize = chars[..idx].iter().map(|c| c.len_utf8()).sum();
    let root = parse_note(&main[..root_len])?;

    let quality = &main[root_len..];
    let intervals = quality_intervals(quality)
        .ok_or_else(|| VoicingError::UnknownChord(symbol.to_string()))?;

    let bass = match slash {
        Some(name) => Some(parse_note(name)?),
        None => None,
    };

    Ok(ChordSpec {
        root,
        intervals: intervals.to_vec(),
        bass,
    })
}
