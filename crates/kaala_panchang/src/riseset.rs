//! Rise/set resolution for a local calendar day.
//!
//! The search window opens at the local midnight of the requested date,
//! expressed in UT. Each of the four events is queried once; when the
//! oracle reports no event in its window, the query runs once more with
//! the window advanced by exactly one day, and only then is the event
//! recorded as absent. Sunrise additionally gets a date-lag correction:
//! a backend may hand back a rise instant that falls on the local date
//! before the one asked about, and such a sunrise is advanced by one
//! day so the record stays anchored to the caller's date.

use kaala_core::{Atmosphere, Body, EphemerisOracle, GeoLocation, RiseSetKind};
use kaala_time::{LocalDate, UtcOffset, local_date_of_jd_ut, local_midnight_jd_ut};

use crate::error::PanchangError;
use crate::longitudes::validate_location;
use crate::riseset_types::{DayEvents, EventOutcome};

/// Range check for the civil UTC offset, applied before any oracle call.
pub(crate) fn validate_utc_offset(offset: &UtcOffset) -> Result<(), &'static str> {
    if !offset.hours.is_finite() || offset.hours.abs() > 14.0 {
        return Err("utc offset must be between -14 and 14 hours");
    }
    Ok(())
}

/// One horizon-event query with the single-day retry.
fn resolve_event(
    oracle: &dyn EphemerisOracle,
    window_start_jd: f64,
    body: Body,
    kind: RiseSetKind,
    location: GeoLocation,
    atmosphere: Atmosphere,
) -> EventOutcome {
    match oracle.rise_transit(window_start_jd, body, kind, location, atmosphere) {
        Ok(Some(jd)) => EventOutcome::At(jd),
        Ok(None) => match oracle.rise_transit(window_start_jd + 1.0, body, kind, location, atmosphere)
        {
            Ok(Some(jd)) => EventOutcome::At(jd),
            Ok(None) => EventOutcome::Absent,
            Err(err) => EventOutcome::Failed(err),
        },
        Err(err) => EventOutcome::Failed(err),
    }
}

/// Resolve sunrise, sunset, moonrise and moonset for `date` at `location`.
///
/// Failures are confined to their event: a moonset query that errors
/// leaves the other three outcomes intact. Only invalid inputs produce
/// an `Err`.
pub fn rise_set(
    oracle: &dyn EphemerisOracle,
    date: LocalDate,
    offset: UtcOffset,
    location: GeoLocation,
    atmosphere: Atmosphere,
) -> Result<DayEvents, PanchangError> {
    validate_location(&location).map_err(PanchangError::InvalidLocation)?;
    validate_utc_offset(&offset).map_err(PanchangError::InvalidConfig)?;

    let window_start = local_midnight_jd_ut(date, offset);

    let mut sunrise = resolve_event(
        oracle,
        window_start,
        Body::Sun,
        RiseSetKind::Rise,
        location,
        atmosphere,
    );
    // Date-lag correction, sunrise only. Sunset, moonrise and moonset
    // are reported as the backend returned them.
    if let Some(jd) = sunrise.jd_ut()
        && local_date_of_jd_ut(jd, offset) < date
    {
        sunrise = EventOutcome::At(jd + 1.0);
    }

    let sunset = resolve_event(
        oracle,
        window_start,
        Body::Sun,
        RiseSetKind::Set,
        location,
        atmosphere,
    );
    let moonrise = resolve_event(
        oracle,
        window_start,
        Body::Moon,
        RiseSetKind::Rise,
        location,
        atmosphere,
    );
    let moonset = resolve_event(
        oracle,
        window_start,
        Body::Moon,
        RiseSetKind::Set,
        location,
        atmosphere,
    );

    Ok(DayEvents {
        sunrise,
        sunset,
        moonrise,
        moonset,
    })
}
