//! Holiday date rules.
//!
//! Every Colombian holiday is one of three cases: a fixed calendar date, a
//! date shifted to the nearest occurrence of a weekday (the Ley Emiliani
//! shift), or a date anchored to that year's Easter Sunday.

use co_core::errors::Result;
use co_core::Year;
use co_time::{Date, Month, Weekday};

/// Offset of an Easter-relative holiday from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasterOffset {
    /// A signed number of days from Easter Sunday.
    Days(i32),
    /// The nearest occurrence of `weekday` to Easter Sunday, then a signed
    /// number of days from there.
    NearestWeekday {
        /// Target weekday of the shift.
        weekday: Weekday,
        /// Days added after the shift.
        days: i32,
    },
}

/// How a holiday's date is determined for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Unconditionally on the given month and day.
    Fixed {
        /// Calendar month.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The nearest occurrence of `weekday` to the given month and day.
    NearestWeekday {
        /// Anchor month.
        month: Month,
        /// Anchor day of the month.
        day: u8,
        /// Target weekday of the shift.
        weekday: Weekday,
    },
    /// Anchored to that year's Easter Sunday.
    EasterRelative(EasterOffset),
}

impl HolidayRule {
    /// Resolve the rule into a concrete date.
    ///
    /// `easter` must be the Easter Sunday of `year`; callers resolving many
    /// rules compute it once and pass it to each.
    pub fn resolve(&self, year: Year, easter: Date) -> Result<Date> {
        match *self {
            HolidayRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day),
            HolidayRule::NearestWeekday {
                month,
                day,
                weekday,
            } => Date::nearest_weekday_to(year, month.number(), day, weekday),
            HolidayRule::EasterRelative(EasterOffset::Days(days)) => easter.add_days(days),
            HolidayRule::EasterRelative(EasterOffset::NearestWeekday { weekday, days }) => {
                easter.nearest_weekday(weekday)?.add_days(days)
            }
        }
    }
}
