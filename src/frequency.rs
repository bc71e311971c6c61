//! Color frequency counting.
//!
//! Counts how often each non-ignored color appears over a scan plan and
//! converts counts to percentages of the considered pixels. Entries keep
//! their first-encountered order; when no reduction happens downstream,
//! that order is the final palette order.

use std::collections::HashMap;

use crate::color::Color;
use crate::ignore::IgnoreList;
use crate::source::PixelSource;

/// One counted color with its share of the considered pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    pub color: Color,
    pub count: u64,
    /// Percentage of considered pixels, in (0, 100].
    pub percentage: f64,
}

/// Tallies from one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelStats {
    /// Coordinates the scan plan visited.
    pub sampled: u64,
    /// Sampled pixels that were counted.
    pub considered: u64,
    /// Sampled pixels excluded by the ignore list.
    pub ignored: u64,
}

/// Insertion-ordered color frequency map.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<Color, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from entries, preserving their order.
    pub fn from_entries(entries: Vec<FrequencyEntry>) -> Self {
        let index = entries.iter().enumerate().map(|(i, e)| (e.color, i)).collect();
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn get(&self, color: Color) -> Option<&FrequencyEntry> {
        self.index.get(&color).map(|&i| &self.entries[i])
    }

    /// Colors in table order.
    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|e| e.color).collect()
    }

    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }

    /// Sum of all percentages; 100 (within float tolerance) for any
    /// non-empty table that has not been filtered.
    pub fn percentage_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// Drop every color below `min_percentage`. A pure filter: surviving
    /// entries keep their order and their percentage values.
    pub fn retain_at_least(&mut self, min_percentage: f64) {
        self.entries.retain(|e| e.percentage >= min_percentage);
        self.index = self.entries.iter().enumerate().map(|(i, e)| (e.color, i)).collect();
    }

    fn tally(&mut self, color: Color) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(FrequencyEntry { color, count: 1, percentage: 0.0 });
            }
        }
    }

    fn finalize(&mut self, considered: u64) {
        if considered == 0 {
            return;
        }
        for entry in &mut self.entries {
            entry.percentage = entry.count as f64 / considered as f64 * 100.0;
        }
    }
}

/// Result of counting a scan plan.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub table: FrequencyTable,
    pub stats: PixelStats,
}

/// Count non-ignored colors over the given coordinates.
///
/// Percentages are relative to the considered pixels, never to the total
/// image area. An all-ignored scan yields an empty table with
/// `considered == 0`; that is a valid (if unhelpful) result, and it is the
/// caller's job to surface it as a warning.
pub fn aggregate<S: PixelSource>(
    source: &S,
    coords: &[(u32, u32)],
    ignore: &IgnoreList,
) -> Aggregation {
    let mut table = FrequencyTable::new();
    let mut stats = PixelStats { sampled: coords.len() as u64, ..Default::default() };

    for &(x, y) in coords {
        let color = source.pixel(x, y);
        if ignore.matches(color) {
            stats.ignored += 1;
        } else {
            table.tally(color);
            stats.considered += 1;
        }
    }

    table.finalize(stats.considered);
    Aggregation { table, stats }
}
