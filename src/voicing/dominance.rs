//! Dominated-voicing elimination
//!
//! A voicing is dominated when every string it sounds is sounded at the same
//! fret by another voicing that is strictly richer (the other additionally
//! sounds strings this one mutes). The richer voicing survives; exact
//! duplicates keep a single representative.

use super::types::MUTED;

/// Whether `richer` sounds every string of `sparse` at the same fret.
fn subsumes(sparse: &[i8], richer: &[i8]) -> bool {
    sparse
        .iter()
        .zip(richer)
        .all(|(&fret, &other)| fret == MUTED || fret == other)
}

/// Remove dominated voicings and de-duplicate equals.
///
/// Dominance is a partial order on fret assignments, so dropping everything
/// strictly below some other element leaves exactly the maximal voicings.
pub(crate) fn filter_dominated(shapes: Vec<Vec<i8>>) -> Vec<Vec<i8>> {
    let mut keep = vec![true; shapes.len()];
    for (i, shape) in shapes.iter().enumerate() {
        for (j, other) in shapes.iter().enumerate() {
            if i == j {
                continue;
            }
            if shape == other {
                // Equal voicings: keep only the first occurrence
                if j < i {
                    keep[i] = false;
                    break;
                }
            } else if subsumes(shape, other) {
                keep[i] = false;
                break;
            }
        }
    }
    shapes
        .into_iter()
        .zip(keep)
        .filter_map(|(shape, kept)| kept.then_some(shape))
        .collect()
}
