//! Error types for colombian-holidays.
//!
//! Every fallible operation in the workspace surfaces one of the variants
//! below to its immediate caller; nothing is swallowed and nothing is
//! retried.  A failed resolution yields no holiday list, never a partial one.

use thiserror::Error;

use crate::Year;

/// The top-level error type used throughout colombian-holidays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Year outside the range supported by the ecclesiastical Easter
    /// computation and the `Date` type.
    #[error("year {0} is outside the supported range")]
    InvalidYear(Year),

    /// Malformed calendar date construction (bad month or day-of-month).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The catalog configuration is missing or incomplete.  The resolver
    /// refuses to run against such a configuration.
    #[error("configuration not ready: {0}")]
    Configuration(String),

    /// A catalog entry could not be resolved into a date.  Wraps the
    /// underlying cause.
    #[error("could not resolve holiday {name:?}")]
    Resolution {
        /// Canonical name of the entry that failed.
        name: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },
}

/// Shorthand `Result` type used throughout colombian-holidays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Early-return with the given error when a condition does not hold.
///
/// # Example
/// ```
/// use co_core::{ensure, errors::Error};
/// fn supported(year: u16) -> co_core::errors::Result<u16> {
///     ensure!(year >= 1583, Error::InvalidYear(year));
///     Ok(year)
/// }
/// assert!(supported(2024).is_ok());
/// assert!(supported(1580).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
