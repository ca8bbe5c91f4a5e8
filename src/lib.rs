//! # fretvoice
//!
//! Chord voicing generator and ranker for fretted string instruments.
//!
//! Given a chord (root, intervals, optional slash bass), a tuning, and a
//! capo position, the engine computes every physically reasonable fingering
//! and returns them ordered best-first by playability and idiomatic shape.
//!
//! ## Pipeline
//! 1. Enumerate per-string candidate frets (mute / open / fretted)
//! 2. Depth-first pruned backtracking search over strings
//! 3. Drop voicings dominated by richer ones
//! 4. Classify against the E/G/A/C/D shape templates
//! 5. Stable multi-key ranking
//!
//! The engine is a pure, synchronous function of its inputs: no I/O, no
//! shared state, deterministic output. Rendering, audio, and controls are
//! external consumers of the returned [`VoicingSet`].
//!
//! ## Example
//! ```rust
//! use fretvoice::{voice_chord, VoicingOptions};
//!
//! let result = voice_chord("C", &VoicingOptions::default()).unwrap();
//! assert!(!result.truncated);
//!
//! // The familiar open C comes out on top
//! assert_eq!(result.voicings[0].frets, vec![-1, 3, 2, 0, 1, 0]);
//! assert_eq!(result.voicings[0].shape, Some("C"));
//! ```

pub mod chart;
pub mod chord;
pub mod error;
pub mod pitch;
pub mod request;
pub mod shapes;
pub mod tuning;
pub mod voicing;

mod rank;

pub use chart::{format_frets, format_voicing};
pub use chord::{parse_chord_symbol, ChordSpec};
pub use error::VoicingError;
pub use pitch::{natural_letter, parse_note, pitch_name};
pub use request::RawRequest;
pub use tuning::Tuning;
pub use voicing::{SearchOptions, Voicing, VoicingSet, MUTED};

use voicing::{candidate_frets, filter_dominated, search_voicings};

/// Options for the chord-symbol entry point [`voice_chord`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoicingOptions {
    pub tuning: Tuning,
    pub capo: u8,
    pub search: SearchOptions,
}

/// Generate every reasonable voicing of a chord, ordered best-first.
///
/// This is the main entry point for the library. `root`, each interval, and
/// `bass` are pitch classes / semitone offsets in [0, 11]; `tuning` lists
/// open-string pitch classes lowest string first; `capo` raises every open
/// string uniformly. Fret numbers in the result are relative to the capo'd
/// nut, so a sounding string's absolute pitch is
/// `tuning[i] + capo + frets[i]`.
///
/// # Example
/// ```rust
/// use fretvoice::generate_voicings;
///
/// // C major on a standard-tuned guitar
/// let tuning = [4, 9, 2, 7, 11, 4];
/// let result = generate_voicings(0, &[0, 4, 7], &tuning, 0, None).unwrap();
/// assert!(!result.voicings.is_empty());
/// ```
///
/// # Errors
/// Returns [`VoicingError`] for out-of-range pitch classes or intervals, an
/// empty tuning, or a capo past the last fret. An empty voicing list is a
/// normal outcome, not an error.
pub fn generate_voicings(
    root: u8,
    intervals: &[u8],
    tuning: &[u8],
    capo: u8,
    bass: Option<u8>,
) -> Result<VoicingSet, VoicingError> {
    generate_voicings_with(root, intervals, tuning, capo, bass, &SearchOptions::default())
}

/// [`generate_voicings`] with explicit search bounds.
///
/// The iteration cap in [`SearchOptions`] bounds pathological
/// interval/tuning combinations; when it is hit, the voicings found so far
/// are returned with `truncated` set.
pub fn generate_voicings_with(
    root: u8,
    intervals: &[u8],
    tuning: &[u8],
    capo: u8,
    bass: Option<u8>,
    options: &SearchOptions,
) -> Result<VoicingSet, VoicingError> {
    validate_inputs(root, intervals, tuning, capo, bass, options)?;

    let spec = ChordSpec::new(root, intervals, bass);
    let tones = spec.chord_tones();
    // Power chords may sound only two strings; everything else needs three
    let min_sounding = if tones.len() == 2 { 2 } else { 3 };

    // Capo-relative pitch space: the capo shifts every open string and the
    // requested chord tones uniformly, so fret numbers stay relative to the
    // capo'd nut
    let open_pitches: Vec<u8> = tuning.iter().map(|&pc| (pc + capo) % 12).collect();
    let shifted_root = (root + capo) % 12;
    let shifted_bass = (spec.effective_bass() + capo) % 12;
    let mut target_mask: u16 = 1 << shifted_bass;
    for &tone in &tones {
        target_mask |= 1 << ((tone + capo) % 12);
    }

    let fret_limit = options.fret_limit(capo);
    let candidates: Vec<Vec<i8>> = open_pitches
        .iter()
        .map(|&pc| candidate_frets(pc, target_mask, fret_limit))
        .collect();

    let outcome = search_voicings(
        &candidates,
        &open_pitches,
        target_mask,
        shifted_bass,
        min_sounding,
        options.max_iterations,
    );
    let kept = filter_dominated(outcome.shapes);

    let mut voicings: Vec<Voicing> = kept
        .into_iter()
        .map(|frets| {
            let shape = shapes::classify(&frets, &open_pitches, shifted_root);
            let shape_score = shapes::fuzzy_score(&frets, &open_pitches, shifted_root);
            let base_fret = rank::base_fret(&frets);
            Voicing {
                frets,
                base_fret,
                shape,
                shape_score,
            }
        })
        .collect();

    rank::rank_voicings(&mut voicings, root);

    Ok(VoicingSet {
        voicings,
        truncated: outcome.truncated,
    })
}

/// Generate voicings from a chord symbol like `"Am7"` or `"C/E"`.
///
/// Parses the symbol, then runs the full pipeline under the given tuning,
/// capo, and search bounds.
///
/// # Example
/// ```rust
/// use fretvoice::{voice_chord, Tuning, VoicingOptions};
///
/// let options = VoicingOptions {
///     tuning: Tuning::parse("drop-d").unwrap(),
///     capo: 0,
///     ..VoicingOptions::default()
/// };
/// let result = voice_chord("D5", &options).unwrap();
/// assert!(!result.voicings.is_empty());
/// ```
pub fn voice_chord(symbol: &str, options: &VoicingOptions) -> Result<VoicingSet, VoicingError> {
    let spec = parse_chord_symbol(symbol)?;
    generate_voicings_with(
        spec.root,
        &spec.intervals,
        options.tuning.strings(),
        options.capo,
        spec.bass,
        &options.search,
    )
}

/// Fail fast on precondition violations before any pitch computation.
fn validate_inputs(
    root: u8,
    intervals: &[u8],
    tuning: &[u8],
    capo: u8,
    bass: Option<u8>,
    options: &SearchOptions,
) -> Result<(), VoicingError> {
    if root > 11 {
        return Err(VoicingError::PitchOutOfRange {
            context: "root",
            value: root,
        });
    }
    if let Some(bass) = bass {
        if bass > 11 {
            return Err(VoicingError::PitchOutOfRange {
                context: "bass",
                value: bass,
            });
        }
    }
    for &interval in intervals {
        if interval > 11 {
            return Err(VoicingError::IntervalOutOfRange { value: interval });
        }
    }
    if tuning.is_empty() {
        return Err(VoicingError::EmptyTuning);
    }
    for &pc in tuning {
        if pc > 11 {
            return Err(VoicingError::PitchOutOfRange {
                context: "tuning",
                value: pc,
            });
        }
    }
    if capo > options.physical_limit {
        return Err(VoicingError::CapoOutOfRange {
            capo,
            max: options.physical_limit,
        });
    }
    Ok(())
}
