//! Ignore-list matching.

use crate::color::Color;

/// Colors the caller wants excluded from counting, with a shared distance
/// threshold. A sampled pixel is dropped when it is within `threshold` of
/// any entry; a threshold of 0 means exact matches only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IgnoreList {
    pub colors: Vec<Color>,
    pub threshold: f64,
}

impl IgnoreList {
    pub fn new(colors: Vec<Color>, threshold: f64) -> Self {
        Self { colors, threshold }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether a sampled color should be excluded from counting.
    pub fn matches(&self, color: Color) -> bool {
        self.colors.iter().any(|ignored| color.distance(*ignored) <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_matches_nothing() {
        let ignore = IgnoreList::default();
        assert!(!ignore.matches(Color::new(0, 0, 0, 255)));
    }

    #[test]
    fn test_exact_match_at_zero_threshold() {
        let ignore = IgnoreList::new(vec![Color::new(0, 0, 0, 255)], 0.0);
        assert!(ignore.matches(Color::new(0, 0, 0, 255)));
        assert!(!ignore.matches(Color::new(1, 0, 0, 255)));
    }

    #[test]
    fn test_near_match_within_threshold() {
        let ignore = IgnoreList::new(vec![Color::new(0, 0, 0, 255)], 10.0);
        assert!(ignore.matches(Color::new(5, 5, 5, 255)));
        assert!(!ignore.matches(Color::new(200, 200, 200, 255)));
    }

    #[test]
    fn test_any_entry_matches() {
        let ignore = IgnoreList::new(
            vec![Color::new(0, 0, 0, 255), Color::new(255, 255, 255, 255)],
            0.0,
        );
        assert!(ignore.matches(Color::new(255, 255, 255, 255)));
        assert!(!ignore.matches(Color::new(128, 128, 128, 255)));
    }
}
