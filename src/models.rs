//! Shared result and descriptor types.

use serde::{Deserialize, Serialize};

/// A non-fatal condition raised during extraction.
///
/// Warnings never abort a run; callers decide whether to surface them or
/// treat them as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Serializable palette descriptor, consumed by downstream asset tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteDoc {
    pub name: String,
    pub source: SourceInfo,
    /// Surviving colors in palette order.
    pub colors: Vec<PaletteEntry>,
}

/// Provenance block for a palette descriptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    pub sampled: u64,
    pub considered: u64,
    pub ignored: u64,
}

/// One color in a palette descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteEntry {
    pub index: usize,
    pub hex: String,
    pub rgba: [u8; 4],
    /// Share of considered pixels this color covered.
    pub percentage: f64,
}
