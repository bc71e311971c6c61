//! Similarity-based palette reduction.
//!
//! Shrinks a color set to a target count by repeatedly removing the color
//! whose mean pairwise distance to the rest of the set is smallest - the
//! color most replaceable by its neighbors. This preserves visual
//! diversity better than truncating by frequency alone.
//!
//! Each round recomputes every mean from scratch, so the whole search is
//! O(n^3) in the candidate count. That is fine at palette sizes (tens of
//! colors); [`crate::engine`] refuses candidate sets large enough to make
//! it pathological.

use rayon::prelude::*;

use crate::color::Color;
use crate::frequency::FrequencyEntry;

/// Audit record for one removed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Removal {
    pub color: Color,
    /// The removed color's share of considered pixels.
    pub percentage: f64,
    /// Its mean pairwise distance at the moment of removal.
    pub mean_distance: f64,
}

/// Mean pairwise distance from each entry to all others.
///
/// A singleton set has no pairs; its lone entry reports infinity so it can
/// never look like the most redundant color.
pub fn mean_distances(entries: &[FrequencyEntry]) -> Vec<f64> {
    if entries.len() < 2 {
        return vec![f64::INFINITY; entries.len()];
    }
    let divisor = (entries.len() - 1) as f64;
    entries
        .par_iter()
        .enumerate()
        .map(|(i, entry)| {
            let total: f64 = entries
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| entry.color.distance(other.color))
                .sum();
            total / divisor
        })
        .collect()
}

/// Remove the most redundant colors until at most `target` remain.
///
/// Survivors keep their original order; the function only ever removes
/// entries, never reorders or rewrites them. Ties on the minimum mean are
/// broken by taking the first entry in current order, so the result is
/// deterministic. Returns the survivors and the removal log in removal
/// order.
///
/// Calling this on a set already at or below `target` is a no-op.
pub fn reduce(
    mut entries: Vec<FrequencyEntry>,
    target: usize,
) -> (Vec<FrequencyEntry>, Vec<Removal>) {
    let mut removals = Vec::new();

    while entries.len() > target {
        let means = mean_distances(&entries);

        let mut min_idx = 0;
        for (i, mean) in means.iter().enumerate().skip(1) {
            if *mean < means[min_idx] {
                min_idx = i;
            }
        }

        let removed = entries.remove(min_idx);
        removals.push(Removal {
            color: removed.color,
            percentage: removed.percentage,
            mean_distance: means[min_idx],
        });
    }

    (entries, removals)
}
