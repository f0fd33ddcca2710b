//! `Date` type and nearest-weekday resolution.
//!
//! Dates are represented as a serial number of days since an epoch.  The
//! epoch is **January 1, 1583** (serial = 1), the first full year of the
//! Gregorian calendar and the first year covered by the Easter computation
//! in [`crate::easter`].
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1583 (a Saturday).
//! * The valid date range is 1583-01-01 to 2499-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use co_core::errors::{Error, Result};
use co_core::Year;

/// First supported calendar year.
pub const MIN_YEAR: Year = 1583;

/// Last supported calendar year.
pub const MAX_YEAR: Year = 2499;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2499.
    pub const MAX: Date = Date(334_928);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is zero, negative, or past
    /// [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::InvalidDate(
                "serial number must be positive".into(),
            ));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::InvalidDate(format!(
                "serial {serial} exceeds maximum date"
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–2499).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1583-01-01) is a Saturday, ordinal 6.
        let w = ((self.0 + 4).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::InvalidDate(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    // ── Nearest-weekday resolution ────────────────────────────────────────────

    /// Return the date nearest to `self` that falls on `target`.
    ///
    /// Of the occurrence of `target` in the anchor's Monday-start week and
    /// the occurrence one week to the other side of the anchor, the closer
    /// one wins; the two can never be equidistant.  The result is therefore
    /// at most 3 days from the anchor.
    ///
    /// # Errors
    /// Only when the resolved date would leave the valid range, which can
    /// happen solely within 3 days of [`Date::MIN`] or [`Date::MAX`].
    pub fn nearest_weekday(self, target: Weekday) -> Result<Self> {
        let delta = target.ordinal() as i32 - self.weekday().ordinal() as i32;
        // Representative of `delta` mod 7 in [-3, 3].
        let shift = (delta + 3).rem_euclid(7) - 3;
        self.add_days(shift)
    }

    /// Return the date nearest to the anchor `year`-`month`-`day` that falls
    /// on `target`.
    ///
    /// Convenience overload of [`Date::nearest_weekday`] that constructs the
    /// anchor first; fails with an invalid-date error on a bad month or day.
    pub fn nearest_weekday_to(year: Year, month: u8, day: u8, target: Weekday) -> Result<Self> {
        Date::from_ymd(year, month, day)?.nearest_weekday(target)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        let month = Month::from_number(m).expect("serial decomposition yields a valid month");
        write!(f, "{d} {} {y}", month.long_name())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Serde support ─────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let (y, m, d) = ymd_from_serial(self.0);
        serializer.collect_str(&format_args!("{y:04}-{m:02}-{d:02}"))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (Gregorian rule).
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1583-01-01.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1583..year, plus leap days in the same span.
    let mut serial = (y - 1583) * 365;
    serial += leap_days(y - 1) - leap_days(1582);
    // Days in months 1..m for the current year.
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Leap days in the years 1..=n.
fn leap_days(n: i32) -> i32 {
    n / 4 - n / 100 + n / 400
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // Estimate year, then adjust until serial falls within it.
    let mut y = (serial / 365 + 1583) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
