//! # colombian-holidays
//!
//! Computation of the fixed and moveable public holidays observed in
//! Colombia.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `co-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! colombian-holidays = "0.1"
//! ```
//!
//! ```rust
//! use colombian_holidays::holidays::HolidayResolver;
//!
//! let resolver = HolidayResolver::new();
//! let observed = resolver.resolve(2024).unwrap();
//! assert_eq!(observed.len(), 20);
//! assert_eq!(observed[0].name, "New Year's Day");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared aliases.
pub use co_core as core;

/// Date, weekday, and Easter-computation types.
pub use co_time as time;

/// Holiday rules, catalog, configuration, and the resolver.
pub use co_holidays as holidays;
