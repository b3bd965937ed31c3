//! Calendar and time-of-day arithmetic for panchang computation.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - `UtcTime`, the civil UTC representation
//! - Fixed-offset local-date handling (`LocalDate`, `UtcOffset`)
//!
//! Only Universal Time is modeled. Panchang elements move at lunar speed
//! (at most ~1° of elongation per 2 hours), so the sub-minute UT/TT
//! difference at present-day dates is far below element resolution.

pub mod julian;
pub mod local;
pub mod utc_time;

pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use local::{
    LocalDate, LocalMoment, UtcOffset, local_date_of_jd_ut, local_midnight_jd_ut,
    local_time_jd_ut,
};
pub use utc_time::UtcTime;
