//! # Pitch Model
//!
//! Pure functions mapping note names to pitch classes and back.
//!
//! A pitch class is a note identity independent of octave, an integer in
//! [0, 11] with C = 0. All chord and tuning arithmetic in this crate happens
//! modulo 12 on these values.

use crate::error::VoicingError;

/// Number of pitch classes in an octave
pub const SEMITONES: u8 = 12;

/// Note names for each pitch class, sharps preferred
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name into a pitch class.
///
/// Accepts a letter A-G followed by an optional `#` or `b`.
///
/// # Example
/// ```rust
/// use fretvoice::parse_note;
///
/// assert_eq!(parse_note("C").unwrap(), 0);
/// assert_eq!(parse_note("F#").unwrap(), 6);
/// assert_eq!(parse_note("Bb").unwrap(), 10);
/// ```
pub fn parse_note(name: &str) -> Result<u8, VoicingError> {
    let mut chars = name.chars();
    let letter = chars
        .next()
        .ok_or_else(|| VoicingError::UnknownNote(name.to_string()))?;

    let base: i8 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(VoicingError::UnknownNote(name.to_string())),
    };

    let accidental: i8 = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return Err(VoicingError::UnknownNote(name.to_string())),
    };

    // Anything after the accidental is junk
    if chars.next().is_some() {
        return Err(VoicingError::UnknownNote(name.to_string()));
    }

    Ok((base + accidental).rem_euclid(12) as u8)
}

/// Display name for a pitch class, sharps preferred.
///
/// # Example
/// ```rust
/// use fretvoice::pitch_name;
///
/// assert_eq!(pitch_name(0), "C");
/// assert_eq!(pitch_name(6), "F#");
/// ```
pub fn pitch_name(pitch_class: u8) -> &'static str {
    SHARP_NAMES[(pitch_class % SEMITONES) as usize]
}

/// The plain letter name for a pitch class, if it falls on a natural note.
///
/// Accidentals (C#, Eb, ...) have no plain letter name and return `None`.
/// Used by the ranker: a root of C prefers a voicing classified as an exact
/// "C" shape over everything else.
pub fn natural_letter(pitch_class: u8) -> Option<&'static str> {
    match pitch_class % SEMITONES {
        0 => Some("C"),
        2 => Some("D"),
        4 => Some("E"),
        5 => Some("F"),
        7 => Some("G"),
        9 => Some("A"),
        11 => Some("B"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals() {
        assert_eq!(parse_note("C").unwrap(), 0);
        assert_eq!(parse_note("D").unwrap(), 2);
        assert_eq!(parse_note("E").unwrap(), 4);
        assert_eq!(parse_note("F").unwrap(), 5);
        assert_eq!(parse_note("G").unwrap(), 7);
        assert_eq!(parse_note("A").unwrap(), 9);
        assert_eq!(parse_note("B").unwrap(), 11);
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(parse_note("C#").unwrap(), 1);
        assert_eq!(parse_note("Db").unwrap(), 1);
        assert_eq!(parse_note("Eb").unwrap(), 3);
        assert_eq!(parse_note("Cb").unwrap(), 11); // wraps below C
        assert_eq!(parse_note("B#").unwrap(), 0); // wraps above B
    }

    #[test]
    fn test_parse_lowercase_letter() {
        assert_eq!(parse_note("e").unwrap(), 4);
        assert_eq!(parse_note("bb").unwrap(), 10);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(parse_note("").is_err());
        assert!(parse_note("H").is_err());
        assert!(parse_note("C##").is_err());
        assert!(parse_note("Cx").is_err());
    }

    #[test]
    fn test_pitch_names_round_trip() {
        for pc in 0..12 {
            assert_eq!(parse_note(pitch_name(pc)).unwrap(), pc);
        }
    }

    #[test]
    fn test_natural_letters() {
        assert_eq!(natural_letter(0), Some("C"));
        assert_eq!(natural_letter(7), Some("G"));
        assert_eq!(natural_letter(1), None);
        assert_eq!(natural_letter(10), None);
    }
}
