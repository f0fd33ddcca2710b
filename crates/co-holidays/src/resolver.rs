//! Holiday resolution for a calendar year.

use serde::Serialize;
use tracing::{debug, warn};

use co_core::errors::{Error, Result};
use co_core::{ensure, Year};
use co_time::{easter_sunday, Date, MAX_YEAR, MIN_YEAR};

use crate::catalog::CATALOG;
use crate::config::CatalogConfig;

/// A holiday resolved to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHoliday {
    /// The observed date.
    pub date: Date,
    /// Display name.  When two holidays coincide on a date, the merged
    /// entry joins their names with `"; "`, earliest catalog position
    /// first.
    pub name: String,
}

impl std::fmt::Display for ResolvedHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.date, self.name)
    }
}

/// Resolves the yearly holiday list from the catalog and its configuration.
///
/// Resolution is a pure function of the year: the catalog is a process-wide
/// constant and the configuration is immutable once constructed, so a
/// resolver can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct HolidayResolver {
    config: CatalogConfig,
}

impl HolidayResolver {
    /// Create a resolver backed by the built-in configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver backed by the given configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Return the backing configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Compute the chronologically ordered holidays observed in `year`.
    ///
    /// Easter Sunday is computed once and reused by every Easter-relative
    /// rule.  Entries resolving to the same date are merged pairwise; see
    /// [`ResolvedHoliday::name`].  Any failure yields an error and no list.
    ///
    /// # Errors
    /// * configuration error when the backing configuration is not ready
    ///   (checked before any date computation);
    /// * invalid-year error for years outside the supported range;
    /// * a resolution error naming the catalog entry for any other failure.
    pub fn resolve(&self, year: Year) -> Result<Vec<ResolvedHoliday>> {
        debug!(year, "resolving holiday calendar");
        if !self.config.is_ready() {
            warn!(year, "catalog configuration not ready");
            return Err(Error::Configuration(
                "date format or holiday names missing".into(),
            ));
        }
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            Error::InvalidYear(year)
        );

        let easter = easter_sunday(year)?;
        let mut entries = Vec::with_capacity(CATALOG.len());
        for (entry, name) in CATALOG.iter().zip(self.config.holiday_names()) {
            let date = entry
                .rule
                .resolve(year, easter)
                .map_err(|source| Error::Resolution {
                    name: entry.name.to_string(),
                    source: Box::new(source),
                })?;
            entries.push(ResolvedHoliday {
                date,
                name: name.clone(),
            });
        }

        // Stable sort: coinciding dates keep their catalog order.
        entries.sort_by_key(|holiday| holiday.date);
        let resolved = merge_adjacent(entries);
        debug!(year, count = resolved.len(), "holiday calendar resolved");
        Ok(resolved)
    }
}

/// Merge adjacent entries sharing a date into one entry whose names are
/// joined with `"; "`.
///
/// One pass, at most one merge per adjacent pair: should three entries ever
/// share a date, the third stays as a separate entry.
fn merge_adjacent(entries: Vec<ResolvedHoliday>) -> Vec<ResolvedHoliday> {
    let mut merged = Vec::with_capacity(entries.len());
    let mut iter = entries.into_iter().peekable();
    while let Some(mut current) = iter.next() {
        if matches!(iter.peek(), Some(next) if next.date == current.date) {
            if let Some(next) = iter.next() {
                current.name = format!("{}; {}", current.name, next.name);
            }
        }
        merged.push(current);
    }
    merged
}
