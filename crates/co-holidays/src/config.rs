//! Catalog configuration collaborator.
//!
//! Supplies the date-format pattern handed to whatever serializes the
//! output, and the display name for each catalog position.  The resolver
//! refuses to run until [`CatalogConfig::is_ready`] holds, so a missing or
//! incomplete configuration surfaces as a configuration error instead of a
//! truncated holiday list.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use co_core::errors::{Error, Result};

use crate::catalog::CATALOG;

/// Date-format pattern and holiday-name list backing the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// strftime-style pattern for the serialization collaborator.  The core
    /// never interprets it beyond checking that it is non-blank.
    date_format: String,
    /// One display name per catalog position, in catalog order.
    holiday_names: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".into(),
            holiday_names: CATALOG.iter().map(|entry| entry.name.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| {
            warn!(%err, "catalog configuration failed to parse");
            Error::Configuration(err.to_string())
        })
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            warn!(path = %path.display(), %err, "catalog configuration unreadable");
            Error::Configuration(format!("{}: {err}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Whether the configuration can back a resolution: a non-blank date
    /// format and exactly one name per catalog rule.
    pub fn is_ready(&self) -> bool {
        !self.date_format.trim().is_empty() && self.holiday_names.len() == CATALOG.len()
    }

    /// The date-format pattern.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// The display names, in catalog order.
    pub fn holiday_names(&self) -> &[String] {
        &self.holiday_names
    }
}
