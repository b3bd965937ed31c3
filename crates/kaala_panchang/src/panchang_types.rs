//! Configuration and output types for the panchang assembler.

use kaala_core::Atmosphere;
use kaala_time::{LocalDate, UtcTime};
use kaala_vedic::{Karana, Nakshatra, Paksha, ShivaVaas, Tithi, Vaar, Yoga};

use crate::riseset_types::DayEvents;

/// Largest fine-trim magnitude the assembler accepts, degrees.
///
/// The trim exists to reconcile output with a reference almanac; a
/// larger value would mask a real frame or ayanamsha disagreement
/// instead of calibrating one.
pub const MAX_FINE_OFFSET_DEG: f64 = 0.05;

/// Assembler tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    /// Calibration trim added to both longitudes, degrees.
    pub fine_offset_deg: f64,
    /// Minutes past the anchor at which the elements are evaluated.
    pub evaluation_offset_minutes: f64,
    /// Refraction conditions passed to every rise/set query.
    pub atmosphere: Atmosphere,
}

impl Default for PanchangConfig {
    /// No trim, evaluation 15 minutes past sunrise, standard atmosphere.
    fn default() -> Self {
        Self {
            fine_offset_deg: 0.0,
            evaluation_offset_minutes: 15.0,
            atmosphere: Atmosphere::default(),
        }
    }
}

impl PanchangConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.fine_offset_deg.is_finite() || self.fine_offset_deg.abs() > MAX_FINE_OFFSET_DEG {
            return Err("fine_offset_deg must be within 0.05 degrees of zero");
        }
        if !self.evaluation_offset_minutes.is_finite() || self.evaluation_offset_minutes < 0.0 {
            return Err("evaluation_offset_minutes must be non-negative");
        }
        Ok(())
    }
}

/// Tithi state at the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// The tithi in effect.
    pub tithi: Tithi,
    /// Index in the 30-tithi month, 0-based.
    pub tithi_index: u8,
    /// Waxing or waning fortnight.
    pub paksha: Paksha,
    /// Position within the paksha, 1 through 15.
    pub tithi_in_paksha: u8,
    /// When this tithi yields to the next, if found within the search
    /// horizon.
    pub ends_at: Option<UtcTime>,
}

/// Nakshatra state at the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra the Moon occupies.
    pub nakshatra: Nakshatra,
    /// Index in the 27-nakshatra cycle, 0-based.
    pub nakshatra_index: u8,
    /// Quarter of the nakshatra, 1 through 4.
    pub pada: u8,
    /// When the Moon leaves this nakshatra, if found within the search
    /// horizon.
    pub ends_at: Option<UtcTime>,
}

/// Yoga state at the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// The yoga in effect.
    pub yoga: Yoga,
    /// Index in the 27-yoga cycle, 0-based.
    pub yoga_index: u8,
    /// When this yoga yields to the next, if found within the search
    /// horizon.
    pub ends_at: Option<UtcTime>,
}

/// Karana state at the evaluation instant. Karanas are reported as-of
/// the instant only; no end search is run for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// The karana in effect.
    pub karana: Karana,
    /// Half-tithi index in the 60-slot month, 0-based.
    pub half_index: u8,
}

/// Rahu Kaal window in civil UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RahuKaalInfo {
    pub starts_at: UtcTime,
    pub ends_at: UtcTime,
}

/// Full panchang for one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangRecord {
    /// The local date the record describes.
    pub date: LocalDate,
    /// Horizon events for the day.
    pub events: DayEvents,
    /// Instant the elements were evaluated at: sunrise plus the
    /// configured offset, or the 06:00-local fallback anchor when
    /// sunrise is absent or failed.
    pub evaluated_at: UtcTime,
    /// Sidereal longitude of the Sun at the evaluation instant, degrees.
    pub sun_longitude_deg: f64,
    /// Sidereal longitude of the Moon at the evaluation instant, degrees.
    pub moon_longitude_deg: f64,
    /// Moon-minus-Sun elongation at the evaluation instant, degrees.
    pub elongation_deg: f64,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    /// Weekday of the civil date.
    pub vaar: Vaar,
    /// Rahu Kaal, present when both sunrise and sunset resolved.
    pub rahu_kaal: Option<RahuKaalInfo>,
    /// Shiva's abode for the day's tithi.
    pub shiva_vaas: Option<ShivaVaas>,
    /// Tithi index two hours before sunrise, when sunrise resolved.
    /// Recorded for day-boundary audits; the record's tithi is never
    /// adjusted from it.
    pub dawn_window_tithi_index: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PanchangConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fine_offset_deg, 0.0);
        assert_eq!(config.evaluation_offset_minutes, 15.0);
    }

    #[test]
    fn rejects_oversized_fine_offset() {
        let config = PanchangConfig { fine_offset_deg: 0.06, ..Default::default() };
        assert!(config.validate().is_err());
        let config = PanchangConfig { fine_offset_deg: -0.06, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_fine_offset_at_the_bound() {
        let config = PanchangConfig { fine_offset_deg: 0.05, ..Default::default() };
        assert!(config.validate().is_ok());
        let config = PanchangConfig { fine_offset_deg: -0.05, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_evaluation_offset() {
        let config = PanchangConfig { evaluation_offset_minutes: -1.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_parameters() {
        let config = PanchangConfig { fine_offset_deg: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
        let config = PanchangConfig { evaluation_offset_minutes: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
