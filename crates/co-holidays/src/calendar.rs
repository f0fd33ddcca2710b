//! Business-day calendar built on the holiday resolver.

use co_core::errors::{Error, Result};
use co_core::Year;
use co_time::Date;

use crate::config::CatalogConfig;
use crate::resolver::{HolidayResolver, ResolvedHoliday};

/// A calendar that knows which dates are business days.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Colombia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is an observed holiday.  Weekends do not
    /// count as holidays by themselves.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }
}

/// The Colombian calendar: Saturday/Sunday weekends plus the legally
/// observed holidays.
#[derive(Debug, Clone, Default)]
pub struct Colombia {
    resolver: HolidayResolver,
}

impl Colombia {
    /// Create the calendar with the built-in configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the calendar from the given configuration.
    ///
    /// Fails fast when the configuration is not ready, so the calendar's
    /// queries never run against an incomplete catalog.
    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        if !config.is_ready() {
            return Err(Error::Configuration(
                "date format or holiday names missing".into(),
            ));
        }
        Ok(Self {
            resolver: HolidayResolver::with_config(config),
        })
    }

    /// The holidays observed in `year`, chronologically.
    pub fn holidays(&self, year: Year) -> Result<Vec<ResolvedHoliday>> {
        self.resolver.resolve(year)
    }
}

impl Calendar for Colombia {
    fn name(&self) -> &str {
        "Colombia"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    fn is_holiday(&self, date: Date) -> bool {
        // The constructors guarantee a ready configuration, and every
        // representable date's year is resolvable.
        self.resolver
            .resolve(date.year())
            .map(|holidays| holidays.iter().any(|holiday| holiday.date == date))
            .unwrap_or(false)
    }
}
