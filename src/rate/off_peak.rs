use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::rate::{Rate, Weekday};

impl Rate {
    /// Check whether the hour of day falls into the discounted window, ignoring holidays.
    ///
    /// The end hour is exclusive. An empty window is represented by equal bounds.
    #[must_use]
    pub const fn is_off_peak_hour(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            self.start_hour <= hour && hour < self.end_hour
        } else {
            // Wraps past midnight:
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    #[must_use]
    pub fn is_holiday(&self, weekday: impl Into<Weekday>) -> bool {
        self.holidays.contains(weekday.into())
    }

    #[must_use]
    pub fn is_off_peak_at<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        self.is_holiday(timestamp.weekday()) || self.is_off_peak_hour(timestamp.hour())
    }

    /// Discounted hours of a regular (non-holiday) day.
    pub fn off_peak_hours(&self) -> impl Iterator<Item = u32> {
        (0..24).filter(|hour| self.is_off_peak_hour(*hour))
    }
}
