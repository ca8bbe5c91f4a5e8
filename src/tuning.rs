//! # Tuning Model
//!
//! Tuning definitions: an ordered sequence of open-string pitch classes,
//! lowest-pitched string first.
//!
//! Tunings come from three places: the standard reference tuning, a small
//! registry of common named tunings, or a free-form note list parsed from
//! text (`"E A D G B E"`, `"EADGBE"`, `"DADGAD"`). The engine itself is
//! generic over string count; the named registry is six-string.

use crate::error::VoicingError;
use crate::pitch::parse_note;

/// An instrument tuning: open-string pitch classes, lowest string first.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    strings: Vec<u8>,
}

impl Tuning {
    /// Standard six-string guitar tuning E A D G B E.
    pub fn standard() -> Self {
        Self {
            strings: vec![4, 9, 2, 7, 11, 4],
        }
    }

    /// Build a tuning from raw pitch classes, lowest string first.
    pub fn from_pitch_classes(strings: &[u8]) -> Self {
        Self {
            strings: strings.to_vec(),
        }
    }

    /// Look up a named tuning.
    ///
    /// Known names: `standard`, `drop-d`, `dadgad`, `open-g`, `open-d`.
    pub fn named(name: &str) -> Option<Self> {
        let strings = match name.to_lowercase().as_str() {
            "standard" => vec![4, 9, 2, 7, 11, 4],
            "drop-d" | "dropd" => vec![2, 9, 2, 7, 11, 4],
            "dadgad" => vec![2, 9, 2, 7, 9, 2],
            "open-g" => vec![2, 7, 2, 7, 11, 2],
            "open-d" => vec![2, 9, 2, 6, 9, 2],
            _ => return None,
        };
        Some(Self { strings })
    }

    /// Parse a tuning from text: a registry name, a spaced or comma-separated
    /// note list, or a compact note run like `"EADGBE"`.
    ///
    /// # Example
    /// ```rust
    /// use fretvoice::Tuning;
    ///
    /// assert_eq!(Tuning::parse("standard").unwrap(), Tuning::standard());
    /// assert_eq!(Tuning::parse("E A D G B E").unwrap(), Tuning::standard());
    /// assert_eq!(Tuning::parse("EADGBE").unwrap(), Tuning::standard());
    /// assert_eq!(
    ///     Tuning::parse("drop-d").unwrap(),
    ///     Tuning::parse("D A D G B E").unwrap()
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self, VoicingError> {
        let trimmed = text.trim();
        if let Some(tuning) = Self::named(trimmed) {
            return Ok(tuning);
        }

        let strings = if trimmed.contains([' ', ',']) {
            parse_note_list(trimmed)
        } else {
            parse_note_run(trimmed)
        }
        .ok_or_else(|| VoicingError::UnknownTuning(text.to_string()))?;

        if strings.is_empty() {
            return Err(VoicingError::UnknownTuning(text.to_string()));
        }
        Ok(Self { strings })
    }

    /// Open-string pitch classes, lowest string first.
    pub fn strings(&self) -> &[u8] {
        &self.strings
    }

    /// Number of strings.
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse whitespace- or comma-separated note names.
fn parse_note_list(text: &str) -> Option<Vec<u8>> {
    text.split([' ', ','])
        .filter(|token| !token.is_empty())
        .map(|token| parse_note(token).ok())
        .collect()
}

/// Parse a compact run of note names, each a letter with an optional # or b.
fn parse_note_run(text: &str) -> Option<Vec<u8>> {
    let chars: Vec<char> = text.chars().collect();
    let mut strings = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut end = i + 1;
        if end < chars.len() && (chars[end] == '#' || chars[end] == 'b') {
            end += 1;
        }
        let token: String = chars[i..end].iter().collect();
        strings.push(parse_note(&token).ok()?);
        i = end;
    }
    Some(strings)
}
