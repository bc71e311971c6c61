//! Palette descriptor export.
//!
//! Builds a serializable [`PaletteDoc`] from an extraction result and
//! writes it as pretty-printed JSON. This is a collaborator concern: the
//! engine itself never persists anything.

use std::path::Path;

use thiserror::Error;

use crate::engine::Extraction;
use crate::models::{PaletteDoc, PaletteEntry, SourceInfo};

/// Error type for descriptor export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build a descriptor from an extraction result.
///
/// Colors appear in palette order; percentages are the shares of the
/// considered pixels reported by the engine.
pub fn palette_doc(name: &str, width: u32, height: u32, extraction: &Extraction) -> PaletteDoc {
    let colors = extraction
        .table
        .iter()
        .enumerate()
        .map(|(index, entry)| PaletteEntry {
            index,
            hex: entry.color.to_hex(),
            rgba: entry.color.channels(),
            percentage: entry.percentage,
        })
        .collect();

    PaletteDoc {
        name: name.to_string(),
        source: SourceInfo {
            width,
            height,
            sampled: extraction.stats.sampled,
            considered: extraction.stats.considered,
            ignored: extraction.stats.ignored,
        },
        colors,
    }
}

/// Serialize a descriptor to a pretty JSON string.
pub fn palette_json(doc: &PaletteDoc) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a descriptor to disk, creating parent directories as needed.
pub fn write_palette_json(doc: &PaletteDoc, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, palette_json(doc)?)?;
    Ok(())
}
