//! Ephemeris oracle contract for panchang computation.
//!
//! This crate defines the value types and the [`EphemerisOracle`] trait
//! that the computation crates consume. The ephemeris itself — planetary
//! theory, kernel files, nutation — lives behind the trait; everything
//! here is backend-agnostic. An adapter over a concrete ephemeris
//! (Swiss Ephemeris bindings, a JPL kernel reader, a VSOP/ELP series)
//! implements the trait in its own crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Bodies the panchang derivations query.
///
/// Sun and Moon drive every calendar element; Jupiter appears only in the
/// sankalpa rashi line. Backends map these onto their own identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Jupiter,
}

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Jupiter => 599,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            599 => Some(Self::Jupiter),
            _ => None,
        }
    }
}

/// Zodiac reference for longitude queries.
///
/// Panchang elements use the sidereal zodiac with the Lahiri
/// (Chitrapaksha) ayanamsha; the tropical variant exists so backends can
/// expose their raw frame for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Tropical,
    SiderealLahiri,
}

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geographic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Vantage point for a longitude query.
///
/// Topocentric queries apply the observer's parallax; the Moon moves by
/// up to ~1° of longitude between the geocenter and the surface, which is
/// an entire karana step near a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObserverSite {
    Geocentric,
    Topocentric(GeoLocation),
}

/// Complete frame description for one longitude query.
///
/// The frame travels inside every oracle call. Backends must not keep
/// sidereal mode or observer location as ambient state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeFrame {
    pub zodiac: Zodiac,
    pub observer: ObserverSite,
}

impl LongitudeFrame {
    /// The frame panchang computation uses: Lahiri sidereal, topocentric.
    pub const fn sidereal_topocentric(location: GeoLocation) -> Self {
        Self {
            zodiac: Zodiac::SiderealLahiri,
            observer: ObserverSite::Topocentric(location),
        }
    }

    /// Lahiri sidereal from the geocenter (rashi work, sankalpa lines).
    pub const fn sidereal_geocentric() -> Self {
        Self {
            zodiac: Zodiac::SiderealLahiri,
            observer: ObserverSite::Geocentric,
        }
    }
}

/// Horizon event selector for rise/set queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetKind {
    Rise,
    Set,
}

/// Atmospheric conditions for horizon-event refraction.
///
/// The resolver always passes the standard atmosphere; the struct exists
/// so the contract is explicit rather than baked into backends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub pressure_hpa: f64,
    pub temperature_c: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            pressure_hpa: 1013.25,
            temperature_c: 15.0,
        }
    }
}

/// Errors reported by an oracle backend.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// The backend failed to produce a value (message from the backend).
    Backend(String),
    /// The body/frame combination is not supported by this backend.
    Unsupported(&'static str),
    /// The requested epoch is outside the backend's data range.
    EpochOutOfRange { jd_ut: f64 },
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
            Self::Unsupported(msg) => write!(f, "unsupported oracle query: {msg}"),
            Self::EpochOutOfRange { jd_ut } => {
                write!(f, "epoch outside ephemeris range: JD {jd_ut}")
            }
        }
    }
}

impl Error for OracleError {}

/// Backend seam: apparent longitudes and horizon events.
///
/// Implementations must be pure with respect to their arguments — same
/// inputs, same outputs — so searches that evaluate the oracle thousands
/// of times stay deterministic.
pub trait EphemerisOracle: Send + Sync {
    /// Apparent ecliptic longitude of `body` at `jd_ut`, in [0, 360).
    fn ecliptic_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        frame: LongitudeFrame,
    ) -> Result<f64, OracleError>;

    /// First `kind` event for `body` at or after `jd_ut_start`, for the
    /// disc center under the given refraction conditions.
    ///
    /// `Ok(None)` means the event does not occur within the backend's
    /// search horizon (polar day/night), which is distinct from `Err`.
    fn rise_transit(
        &self,
        jd_ut_start: f64,
        body: Body,
        kind: RiseSetKind,
        location: GeoLocation,
        atmosphere: Atmosphere,
    ) -> Result<Option<f64>, OracleError>;
}
