//! Longitude service: the one place Sun and Moon positions are read.
//!
//! Every element index in this crate — tithi, nakshatra, yoga, karana —
//! is derived from a [`LongitudePair`] produced here, so a record can
//! never mix longitudes from two differently-configured queries. The
//! frame is always sidereal (Lahiri) and topocentric for the observer.

use kaala_core::{Body, EphemerisOracle, GeoLocation, LongitudeFrame, OracleError};
use kaala_vedic::{elongation_deg, normalize_360};

use crate::error::PanchangError;

/// Sun and Moon ecliptic longitudes at one instant, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudePair {
    /// Sidereal longitude of the Sun.
    pub sun_deg: f64,
    /// Sidereal longitude of the Moon.
    pub moon_deg: f64,
}

impl LongitudePair {
    /// Moon-minus-Sun elongation in [0, 360). Drives tithi and karana.
    pub fn elongation_deg(&self) -> f64 {
        elongation_deg(self.sun_deg, self.moon_deg)
    }

    /// Sun-plus-Moon longitude sum in [0, 360). Drives yoga.
    pub fn sum_deg(&self) -> f64 {
        normalize_360(self.sun_deg + self.moon_deg)
    }
}

/// Range checks for observer coordinates, applied before any oracle call.
pub(crate) fn validate_location(location: &GeoLocation) -> Result<(), &'static str> {
    if !location.latitude_deg.is_finite() || location.latitude_deg.abs() > 90.0 {
        return Err("latitude must be between -90 and 90 degrees");
    }
    if !location.longitude_deg.is_finite() || location.longitude_deg.abs() > 180.0 {
        return Err("longitude must be between -180 and 180 degrees");
    }
    if !location.altitude_m.is_finite() {
        return Err("altitude must be finite");
    }
    Ok(())
}

/// Longitude pair with the fine trim applied, no input validation.
///
/// The search loops call this per probe after validating once at entry.
pub(crate) fn longitude_pair(
    oracle: &dyn EphemerisOracle,
    jd_ut: f64,
    location: GeoLocation,
    fine_offset_deg: f64,
) -> Result<LongitudePair, OracleError> {
    let frame = LongitudeFrame::sidereal_topocentric(location);
    let sun = oracle.ecliptic_longitude(jd_ut, Body::Sun, frame)?;
    let moon = oracle.ecliptic_longitude(jd_ut, Body::Moon, frame)?;
    Ok(LongitudePair {
        sun_deg: normalize_360(sun + fine_offset_deg),
        moon_deg: normalize_360(moon + fine_offset_deg),
    })
}

/// Sidereal topocentric Sun and Moon longitudes at `jd_ut`.
///
/// `fine_offset_deg` is a calibration trim added to both longitudes
/// before normalization, letting output be matched against a reference
/// almanac. It shifts the Sun and Moon equally, so elongation-derived
/// elements (tithi, karana) are unaffected; nakshatra and yoga shift.
///
/// A backend failure on either body is a hard error.
pub fn longitudes_at(
    oracle: &dyn EphemerisOracle,
    jd_ut: f64,
    location: GeoLocation,
    fine_offset_deg: f64,
) -> Result<LongitudePair, PanchangError> {
    validate_location(&location).map_err(PanchangError::InvalidLocation)?;
    Ok(longitude_pair(oracle, jd_ut, location, fine_offset_deg)?)
}
