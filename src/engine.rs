//! Palette extraction orchestrator.
//!
//! One call runs the full pipeline: scan plan -> frequency aggregation ->
//! prevalence filter -> similarity reduction. The engine owns no state
//! across calls and performs no I/O; it samples whatever [`PixelSource`]
//! the caller hands it and returns the surviving colors in order.

use crate::color::Color;
use crate::error::ExtractError;
use crate::frequency::{aggregate, FrequencyTable, PixelStats};
use crate::ignore::IgnoreList;
use crate::models::Warning;
use crate::reduce::{reduce, Removal};
use crate::scan::{scan_plan, Orientation, ScanMode};
use crate::source::PixelSource;

/// Cap on the candidate set handed to the reducer. The reduction search
/// is cubic, so a full-image extract with a permissive filter could
/// otherwise stall on thousands of unique colors.
pub const REDUCTION_CANDIDATE_LIMIT: usize = 4096;

/// Palette size budget.
///
/// An explicit variant instead of a float infinity sentinel, so "no
/// limit" never leaks into numeric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBudget {
    /// Keep every color that survives filtering.
    #[default]
    Unlimited,
    /// Reduce down to at most this many colors.
    Limit(usize),
}

/// Tuning for one extraction call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    pub ignore: IgnoreList,
    pub max_colors: ColorBudget,
    /// Minimum share of considered pixels a color needs to survive
    /// filtering, in [0, 100]. 0 keeps everything that appeared at all.
    pub min_percentage: f64,
    pub scan_mode: ScanMode,
    /// Strip axis, consulted only for row scans of square images.
    pub orientation: Option<Orientation>,
}

/// Result of one extraction call.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Surviving colors: first-seen order, minus removals.
    pub colors: Vec<Color>,
    /// Frequency data for the survivors. Percentages are shares of the
    /// considered pixels from the original scan, not renormalized after
    /// filtering or reduction.
    pub table: FrequencyTable,
    pub stats: PixelStats,
    /// Reducer audit log, in removal order.
    pub removals: Vec<Removal>,
    pub warnings: Vec<Warning>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn validate(options: &ExtractOptions) -> Result<(), ExtractError> {
    if !options.min_percentage.is_finite()
        || options.min_percentage < 0.0
        || options.min_percentage > 100.0
    {
        return Err(ExtractError::InvalidPercentage(options.min_percentage));
    }
    if !options.ignore.threshold.is_finite() || options.ignore.threshold < 0.0 {
        return Err(ExtractError::InvalidThreshold(options.ignore.threshold));
    }
    Ok(())
}

/// Extract an ordered palette from an image.
///
/// Configuration problems (bad numeric ranges, missing orientation for a
/// square row scan) fail before any pixel is sampled. An image whose
/// sampled pixels all match the ignore list is not an error: the result
/// carries an empty palette and a warning.
pub fn extract<S: PixelSource>(
    source: &S,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    validate(options)?;
    let coords =
        scan_plan(source.width(), source.height(), options.scan_mode, options.orientation)?;

    let aggregation = aggregate(source, &coords, &options.ignore);
    let mut table = aggregation.table;
    let stats = aggregation.stats;

    let mut warnings = Vec::new();
    if stats.considered == 0 {
        warnings.push(Warning::new(
            "no pixels were considered (empty scan or every sample matched the ignore list); \
             palette is empty",
        ));
    }

    table.retain_at_least(options.min_percentage);

    let mut removals = Vec::new();
    if let ColorBudget::Limit(target) = options.max_colors {
        if table.len() > target {
            if table.len() > REDUCTION_CANDIDATE_LIMIT {
                return Err(ExtractError::PaletteTooLarge {
                    candidates: table.len(),
                    limit: REDUCTION_CANDIDATE_LIMIT,
                });
            }
            let (kept, removed) = reduce(table.into_entries(), target);
            removals = removed;
            table = FrequencyTable::from_entries(kept);
        }
    }

    let colors = table.colors();
    Ok(Extraction { colors, table, stats, removals, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const RED: Color = Color::new(255, 0, 0, 255);
    const GREEN: Color = Color::new(0, 255, 0, 255);
    const BLUE: Color = Color::new(0, 0, 255, 255);

    fn image_2x2() -> RgbaImage {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        img
    }

    #[test]
    fn test_extract_defaults_keep_everything_in_order() {
        let img = image_2x2();
        let result = extract(&img, &ExtractOptions::default()).unwrap();

        assert_eq!(result.colors, vec![RED, GREEN, BLUE]);
        assert!(result.removals.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.stats.sampled, 4);
    }

    #[test]
    fn test_extract_budget_at_or_above_count_skips_reduction() {
        let img = image_2x2();
        let options =
            ExtractOptions { max_colors: ColorBudget::Limit(3), ..Default::default() };
        let result = extract(&img, &options).unwrap();
        assert_eq!(result.colors.len(), 3);
        assert!(result.removals.is_empty());
    }

    #[test]
    fn test_extract_reduces_to_budget() {
        let img = image_2x2();
        let options =
            ExtractOptions { max_colors: ColorBudget::Limit(2), ..Default::default() };
        let result = extract(&img, &options).unwrap();

        assert_eq!(result.colors.len(), 2);
        assert_eq!(result.removals.len(), 1);
        // Survivors keep first-seen relative order
        let all = [RED, GREEN, BLUE];
        let expected: Vec<Color> =
            all.into_iter().filter(|c| result.colors.contains(c)).collect();
        assert_eq!(result.colors, expected);
    }

    #[test]
    fn test_extract_min_percentage_filters_before_reduction() {
        let img = image_2x2();
        let options = ExtractOptions { min_percentage: 30.0, ..Default::default() };
        let result = extract(&img, &options).unwrap();
        assert_eq!(result.colors, vec![RED]);
        // Pure filter: the survivor keeps its original share
        assert_eq!(result.table.get(RED).unwrap().percentage, 50.0);
    }

    #[test]
    fn test_extract_all_ignored_warns_and_returns_empty() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        let options = ExtractOptions {
            ignore: IgnoreList::new(vec![Color::new(0, 0, 0, 255)], 0.0),
            ..Default::default()
        };

        let result = extract(&img, &options).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stats.considered, 0);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_extract_rejects_bad_percentage() {
        let img = image_2x2();
        for bad in [-1.0, 100.5, f64::NAN] {
            let options = ExtractOptions { min_percentage: bad, ..Default::default() };
            assert!(matches!(
                extract(&img, &options),
                Err(ExtractError::InvalidPercentage(_))
            ));
        }
    }

    #[test]
    fn test_extract_rejects_bad_threshold() {
        let img = image_2x2();
        let options = ExtractOptions {
            ignore: IgnoreList::new(vec![RED], -2.0),
            ..Default::default()
        };
        assert!(matches!(extract(&img, &options), Err(ExtractError::InvalidThreshold(_))));
    }

    #[test]
    fn test_extract_square_row_scan_needs_orientation() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let options = ExtractOptions { scan_mode: ScanMode::Row, ..Default::default() };
        assert!(matches!(extract(&img, &options), Err(ExtractError::AmbiguousOrientation)));
    }

    #[test]
    fn test_extract_row_scan_reads_strip_in_order() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([1, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([2, 0, 0, 255]));
        img.put_pixel(2, 0, Rgba([3, 0, 0, 255]));

        let options = ExtractOptions { scan_mode: ScanMode::Row, ..Default::default() };
        let result = extract(&img, &options).unwrap();
        assert_eq!(
            result.colors,
            vec![Color::new(1, 0, 0, 255), Color::new(2, 0, 0, 255), Color::new(3, 0, 0, 255)]
        );
    }

    #[test]
    fn test_extract_refuses_pathological_reduction() {
        // 70x70 unique colors = 4900 candidates, over the reducer cap
        let img = RgbaImage::from_fn(70, 70, |x, y| {
            Rgba([x as u8, y as u8, ((x * 70 + y) % 251) as u8, 255])
        });
        let options =
            ExtractOptions { max_colors: ColorBudget::Limit(2), ..Default::default() };

        assert!(matches!(
            extract(&img, &options),
            Err(ExtractError::PaletteTooLarge { .. })
        ));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let img = image_2x2();
        let options =
            ExtractOptions { max_colors: ColorBudget::Limit(2), ..Default::default() };
        let a = extract(&img, &options).unwrap();
        let b = extract(&img, &options).unwrap();
        assert_eq!(a.colors, b.colors);
    }
}
