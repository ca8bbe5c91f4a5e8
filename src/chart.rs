//! # Chart Formatting
//!
//! Plain-text rendering of voicings for the command line. The library's
//! actual consumers (fretboard UIs, audio) take the [`Voicing`] data
//! directly; this is only the human-readable fallback.

use crate::voicing::{Voicing, MUTED};

/// Format a fret sequence in the usual chart notation: `x32010`.
///
/// Falls back to space-separated values when any fret needs two digits.
///
/// # Example
/// ```rust
/// use fretvoice::format_frets;
///
/// assert_eq!(format_frets(&[-1, 3, 2, 0, 1, 0]), "x32010");
/// assert_eq!(format_frets(&[8, 10, 10, 9, 8, 8]), "8 10 10 9 8 8");
/// ```
pub fn format_frets(frets: &[i8]) -> String {
    let wide = frets.iter().any(|&f| f > 9);
    let separator = if wide { " " } else { "" };
    frets
        .iter()
        .map(|&f| {
            if f == MUTED {
                "x".to_string()
            } else {
                f.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// One summary line per voicing: frets, display base fret, shape label.
pub fn format_voicing(voicing: &Voicing) -> String {
    let mut line = format!(
        "{:<14} fret {}",
        format_frets(&voicing.frets),
        voicing.base_fret
    );
    if let Some(shape) = voicing.shape {
        line.push_str(&format!("   {} shape", shape));
    }
    line
}
