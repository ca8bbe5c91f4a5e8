use super::search::SearchOutcome;
use super::{candidate_frets, filter_dominated, search_voicings, MUTED};

const STANDARD: [u8; 6] = [4, 9, 2, 7, 11, 4];

fn mask(pitch_classes: &[u8]) -> u16 {
    pitch_classes.iter().fold(0, |m, &pc| m | (1 << pc))
}

fn run_search(
    tuning: &[u8],
    targets: &[u8],
    bass: u8,
    min_sounding: usize,
    max_iterations: usize,
) -> SearchOutcome {
    let target_mask = mask(targets);
    let candidates: Vec<Vec<i8>> = tuning
        .iter()
        .map(|&pc| candidate_frets(pc, target_mask, 15))
        .collect();
    search_voicings(
        &candidates,
        tuning,
        target_mask,
        bass,
        min_sounding,
        max_iterations,
    )
}

fn sounded_pitches(tuning: &[u8], frets: &[i8]) -> Vec<u8> {
    frets
        .iter()
        .zip(tuning)
        .filter(|(&f, _)| f != MUTED)
        .map(|(&f, &open)| (open + f as u8) % 12)
        .collect()
}

#[test]
fn test_candidates_for_c_major_on_low_e() {
    // Low E string, targets C E G: open E counts, then frets landing on a
    // chord tone up to the search limit
    let frets = candidate_frets(4, mask(&[0, 4, 7]), 15);
    assert_eq!(frets, vec![-1, 0, 3, 8, 12, 15]);
}

#[test]
fn test_candidates_respect_fret_limit() {
    let frets = candidate_frets(4, mask(&[0, 4, 7]), 3);
    assert_eq!(frets, vec![-1, 0, 3]);
}

#[test]
fn test_candidates_mute_only_when_nothing_fits() {
    // One pitch class, a string that never reaches it below the limit
    let frets = candidate_frets(0, mask(&[6]), 5);
    assert_eq!(frets, vec![MUTED]);
}

#[test]
fn test_search_accepts_only_full_coverage() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    assert!(!outcome.truncated);
    assert!(!outcome.shapes.is_empty());
    for shape in &outcome.shapes {
        let sounded = mask(&sounded_pitches(&STANDARD, shape));
        assert_eq!(
            sounded & mask(&[0, 4, 7]),
            mask(&[0, 4, 7]),
            "voicing {:?} misses a chord tone",
            shape
        );
    }
}

#[test]
fn test_search_finds_the_open_c() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    assert!(outcome.shapes.contains(&vec![-1, 3, 2, 0, 1, 0]));
}

#[test]
fn test_first_sounding_string_carries_the_bass() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    for shape in &outcome.shapes {
        let first = shape.iter().position(|&f| f != MUTED).unwrap();
        let pitch = (STANDARD[first] + shape[first] as u8) % 12;
        assert_eq!(pitch, 0, "voicing {:?} has the wrong bass", shape);
    }
}

#[test]
fn test_slash_bass_constraint() {
    // C/E: target set includes the bass; every first sounding string is E
    let outcome = run_search(&STANDARD, &[0, 4, 7], 4, 3, 20_000);
    assert!(!outcome.shapes.is_empty());
    for shape in &outcome.shapes {
        let first = shape.iter().position(|&f| f != MUTED).unwrap();
        let pitch = (STANDARD[first] + shape[first] as u8) % 12;
        assert_eq!(pitch, 4);
    }
}

#[test]
fn test_span_never_exceeds_three() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    for shape in &outcome.shapes {
        let fretted: Vec<i8> = shape.iter().copied().filter(|&f| f > 0).collect();
        if let (Some(&min), Some(&max)) = (fretted.iter().min(), fretted.iter().max()) {
            assert!(max - min <= 3, "voicing {:?} spans too far", shape);
        }
    }
}

#[test]
fn test_open_strings_never_mix_with_high_frets() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    for shape in &outcome.shapes {
        let has_open = shape.iter().any(|&f| f == 0);
        let max_fretted = shape.iter().copied().filter(|&f| f > 0).max().unwrap_or(0);
        if has_open {
            assert!(max_fretted <= 4, "voicing {:?} reaches past the open position", shape);
        }
    }
}

#[test]
fn test_finger_budget_over_the_barre() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    for shape in &outcome.shapes {
        let fretted: Vec<i8> = shape.iter().copied().filter(|&f| f > 0).collect();
        if let Some(&barre) = fretted.iter().min() {
            let above = fretted.iter().filter(|&&f| f > barre).count();
            assert!(above <= 3, "voicing {:?} needs too many fingers", shape);
        }
    }
}

#[test]
fn test_power_chord_density() {
    // Two target pitch classes: two sounding strings suffice
    let outcome = run_search(&STANDARD, &[4, 11], 4, 2, 20_000);
    assert!(!outcome.shapes.is_empty());
    assert!(outcome
        .shapes
        .iter()
        .any(|shape| shape.iter().filter(|&&f| f != MUTED).count() == 2));
    for shape in &outcome.shapes {
        assert!(shape.iter().filter(|&&f| f != MUTED).count() >= 2);
    }
}

#[test]
fn test_triad_density_needs_three_strings() {
    let outcome = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    for shape in &outcome.shapes {
        assert!(shape.iter().filter(|&&f| f != MUTED).count() >= 3);
    }
}

#[test]
fn test_iteration_cap_truncates_but_keeps_results() {
    let full = run_search(&STANDARD, &[0, 4, 7], 0, 3, 20_000);
    let capped = run_search(&STANDARD, &[0, 4, 7], 0, 3, 200);

    assert!(!full.truncated);
    assert!(capped.truncated);
    assert!(!capped.shapes.is_empty());
    assert!(capped.shapes.len() < full.shapes.len());

    // Truncated results are still internally consistent
    for shape in &capped.shapes {
        let sounded = mask(&sounded_pitches(&STANDARD, shape));
        assert_eq!(sounded & mask(&[0, 4, 7]), mask(&[0, 4, 7]));
    }
}

#[test]
fn test_infeasible_coverage_is_empty_not_an_error() {
    // Three chord tones cannot fit on one string
    let outcome = run_search(&[0], &[0, 4, 7], 0, 3, 20_000);
    assert!(outcome.shapes.is_empty());
    assert!(!outcome.truncated);
}

#[test]
fn test_dominated_voicing_is_removed() {
    let shapes = vec![
        vec![-1, 3, 2, 0, 1, 0],
        vec![-1, -1, 2, 0, 1, 0],
        vec![-1, 3, 2, 0, 1, -1],
    ];
    let kept = filter_dominated(shapes);
    assert_eq!(kept, vec![vec![-1, 3, 2, 0, 1, 0]]);
}

#[test]
fn test_differing_frets_are_not_dominated() {
    let shapes = vec![vec![-1, 3, 2, 0, 1, 0], vec![-1, 3, 5, 5, 5, 3]];
    let kept = filter_dominated(shapes);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_equal_voicings_deduplicate() {
    let shapes = vec![
        vec![-1, 0, 2, 2, 2, 0],
        vec![-1, 0, 2, 2, 2, 0],
        vec![-1, 0, 2, 2, 2, 0],
    ];
    let kept = filter_dominated(shapes);
    assert_eq!(kept, vec![vec![-1, 0, 2, 2, 2, 0]]);
}

#[test]
fn test_search_is_deterministic() {
    let first = run_search(&STANDARD, &[0, 3, 7, 10], 0, 3, 20_000);
    let second = run_search(&STANDARD, &[0, 3, 7, 10], 0, 3, 20_000);
    assert_eq!(first.shapes, second.shapes);
    assert_eq!(first.truncated, second.truncated);
}
