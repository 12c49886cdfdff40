//! Week navigation: the 7 visible calendar days around a reference date.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::config::Config;

/// Computes the visible week from a reference date.
///
/// Stateless with respect to the rest of the engine; only the reference date
/// and the configured first day of week go into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekNavigator {
    reference: NaiveDate,
    starts_on: Weekday,
}

impl WeekNavigator {
    /// Create a navigator anchored at the given reference date.
    pub fn new(reference: NaiveDate, starts_on: Weekday) -> Self {
        Self {
            reference,
            starts_on,
        }
    }

    /// Create a navigator for the current week using the configured start day.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Local::now().date_naive(), config.week.starts_on.weekday())
    }

    /// The reference date the navigator is anchored at.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Start of the week containing the reference date.
    pub fn week_start(&self) -> NaiveDate {
        let current = self.reference.weekday().num_days_from_monday() as i64;
        let start = self.starts_on.num_days_from_monday() as i64;
        let offset = (current - start).rem_euclid(7);
        self.reference - Duration::days(offset)
    }

    /// The 7 consecutive calendar days of the visible week.
    pub fn days(&self) -> [NaiveDate; 7] {
        let start = self.week_start();
        std::array::from_fn(|i| start + Duration::days(i as i64))
    }

    /// Shift the reference date back one week.
    pub fn previous_week(&mut self) {
        self.reference -= Duration::days(7);
    }

    /// Shift the reference date forward one week.
    pub fn next_week(&mut self) {
        self.reference += Duration::days(7);
    }

    /// Reset the reference date to today.
    pub fn today(&mut self) {
        self.reference = Local::now().date_naive();
    }
}
