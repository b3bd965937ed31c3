//! Result types for the rise/set resolver.

use kaala_core::OracleError;
use kaala_time::UtcTime;

/// Outcome of one horizon-event query.
///
/// An absent event and a failed query are kept distinct: polar day or
/// night is a fact about the sky, a backend failure is a fault. Neither
/// aborts the day's record.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The event occurs at this Julian Day (UT).
    At(f64),
    /// No event inside the search window, even after the one-day retry.
    Absent,
    /// The oracle failed while answering the query.
    Failed(OracleError),
}

impl EventOutcome {
    /// The event instant, if one was found.
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::At(jd) => Some(*jd),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    /// The event instant as civil UTC, if one was found.
    pub fn time(&self) -> Option<UtcTime> {
        self.jd_ut().map(UtcTime::from_jd_ut)
    }

    /// True when an event instant was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

/// The four horizon events for one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEvents {
    pub sunrise: EventOutcome,
    pub sunset: EventOutcome,
    pub moonrise: EventOutcome,
    pub moonset: EventOutcome,
}
