//! Fixed-offset local calendar handling.
//!
//! Panchang queries are phrased in the observer's civil frame: a calendar
//! date plus a fixed UTC offset in decimal hours. IANA zone names and DST
//! rules are out of scope; callers resolve those before reaching this
//! crate.

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
use crate::utc_time::UtcTime;

/// A calendar date in the observer's local reckoning (no time of day).
///
/// Ordering is chronological: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LocalDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A fixed UTC offset in decimal hours, east positive (IST = +5.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcOffset {
    pub hours: f64,
}

impl UtcOffset {
    pub const fn new(hours: f64) -> Self {
        Self { hours }
    }

    /// Offset as a fraction of a day, for Julian Day arithmetic.
    pub fn as_days(&self) -> f64 {
        self.hours / 24.0
    }
}

/// A wall-clock moment in the fixed-offset local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub date: LocalDate,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalMoment {
    /// Local wall-clock form of a UT instant.
    pub fn from_jd_ut(jd_ut: f64, offset: UtcOffset) -> Self {
        let t = UtcTime::from_jd_ut(jd_ut + offset.as_days());
        Self {
            date: LocalDate::new(t.year, t.month, t.day),
            hour: t.hour,
            minute: t.minute,
            second: t.second,
        }
    }
}

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second as u32
        )
    }
}

/// JD UT of local midnight at the start of `date`.
pub fn local_midnight_jd_ut(date: LocalDate, offset: UtcOffset) -> f64 {
    calendar_to_jd(date.year, date.month, date.day as f64) - offset.as_days()
}

/// JD UT of a wall-clock time on `date`.
pub fn local_time_jd_ut(
    date: LocalDate,
    hour: u32,
    minute: u32,
    second: f64,
    offset: UtcOffset,
) -> f64 {
    let day_frac = date.day as f64
        + hour as f64 / 24.0
        + minute as f64 / 1440.0
        + second / SECONDS_PER_DAY;
    calendar_to_jd(date.year, date.month, day_frac) - offset.as_days()
}

/// The local calendar date containing the UT instant.
pub fn local_date_of_jd_ut(jd_ut: f64, offset: UtcOffset) -> LocalDate {
    let (year, month, day_frac) = jd_to_calendar(jd_ut + offset.as_days());
    LocalDate::new(year, month, day_frac.floor() as u32)
}
