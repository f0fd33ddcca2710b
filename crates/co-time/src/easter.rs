//! Gregorian Easter Sunday computation.
//!
//! Gauss's closed-form ecclesiastical computation: two century-dependent
//! correction constants locate the paschal full moon via the year's position
//! in the 19-year lunar cycle, and a weekday correction pushes the result to
//! the following Sunday slot.  Valid from 1583, the first full year of the
//! Gregorian calendar; the constant table covers the centuries up to 2299
//! and falls back to the 1900–2099 constants outside of it.

use co_core::errors::{Error, Result};
use co_core::{ensure, Year};

use crate::date::{Date, MAX_YEAR, MIN_YEAR};

/// Compute the date of Easter Sunday for `year`.
///
/// # Errors
/// Fails with an invalid-year error for years outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`].
///
/// # Example
/// ```
/// use co_time::{easter_sunday, Date};
/// let easter = easter_sunday(2024).unwrap();
/// assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Result<Date> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        Error::InvalidYear(year)
    );

    let (m, n) = epact_constants(year);
    let y = year as i32;
    let a = y % 19;
    let b = y % 4;
    let c = y % 7;
    let d = (19 * a + m) % 30;
    let e = (2 * b + 4 * c + 6 * d + n) % 7;
    let day = d + e;

    if day < 10 {
        // March
        Date::from_ymd(year, 3, (day + 22) as u8)
    } else {
        // April, with the two edge-case corrections applied to `d + e`
        // before the conversion.
        let day = if day == 26 {
            19
        } else if day == 25 && d == 28 && e == 6 && a > 10 {
            18
        } else {
            day - 9
        };
        Date::from_ymd(year, 4, day as u8)
    }
}

/// Century-bracket correction constants `(m, n)`.
///
/// Years outside all brackets use the 1900–2099 constants.
fn epact_constants(year: Year) -> (i32, i32) {
    match year {
        1583..=1699 => (22, 2),
        1700..=1799 => (23, 3),
        1800..=1899 => (23, 4),
        1900..=2099 => (24, 5),
        2100..=2199 => (24, 6),
        2200..=2299 => (25, 0),
        _ => (24, 5),
    }
}
