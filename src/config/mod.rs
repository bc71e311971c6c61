//! Project configuration for `palex.toml`
//!
//! The schema module defines the file structure; the loader module
//! handles discovery, parsing, validation, and CLI overrides.

mod loader;
mod schema;

pub use loader::{
    find_config, find_config_from, load_config, merge_cli_overrides, CliOverrides,
    ConfigError, CONFIG_FILE_NAME,
};
pub use schema::{ExtractConfig, IgnoreConfig, PalexConfig, SwatchConfig};
