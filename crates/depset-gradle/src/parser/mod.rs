//! Configuration source dispatcher.
//!
//! Routes parsing to the appropriate module based on file name:
//! - `*.gradle.kts`: `appConfig { }` block of a Kotlin DSL build script
//! - `*.toml`: `depset.toml` with `[appConfig]` and `[catalog]` tables

pub mod kotlin;
pub mod toml;

use crate::error::{GradleError, Result};
use crate::extension::AppConfig;
use depset_core::CatalogGroup;
use std::path::Path;

/// Maximum accepted configuration file size in bytes (1MB).
const MAX_FILE_SIZE: u64 = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub app: AppConfig,
    /// Extra catalog groups, in declaration order.
    pub catalog: Vec<CatalogGroup>,
}

impl ParsedConfig {
    /// Layers `other` over `self`; catalog groups from `other` come last so
    /// they replace same-named groups when added to a catalog.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.catalog.extend(other.catalog);
        Self {
            app: self.app.merge(other.app),
            catalog: self.catalog,
        }
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<ParsedConfig> {
    let name = path.to_string_lossy();
    if name.ends_with(".gradle.kts") {
        kotlin::parse_app_config(content)
    } else if name.ends_with(".toml") {
        toml::parse_depset_toml(content)
    } else {
        Err(GradleError::ParseError {
            message: format!("unsupported configuration file: {name}"),
        })
    }
}

/// Reads and parses a configuration file from disk.
pub fn load_config(path: &Path) -> Result<ParsedConfig> {
    tracing::debug!("Loading configuration from {:?}", path);

    let size = std::fs::metadata(path)?.len();
    if size > MAX_FILE_SIZE {
        return Err(GradleError::ParseError {
            message: format!(
                "{} is too large: {} bytes (max: {} bytes)",
                path.display(),
                size,
                MAX_FILE_SIZE
            ),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("Failed to read {:?}: {}", path, e);
        GradleError::Io(e)
    })?;

    let parsed = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded {:?}: {} catalog groups",
        path,
        parsed.catalog.len()
    );
    Ok(parsed)
}
