//! # co-holidays
//!
//! Holiday date rules, the Colombian holiday catalog, and the resolver
//! producing the chronologically ordered holiday list for a year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day calendar built on the resolver.
pub mod calendar;

/// The invariant 20-entry holiday catalog.
pub mod catalog;

/// Catalog configuration collaborator.
pub mod config;

/// `HolidayRule` — how a holiday's date is determined.
pub mod rule;

/// `HolidayResolver` and `ResolvedHoliday`.
pub mod resolver;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, Colombia};
pub use catalog::{CatalogEntry, CATALOG};
pub use config::CatalogConfig;
pub use resolver::{HolidayResolver, ResolvedHoliday};
pub use rule::{EasterOffset, HolidayRule};
