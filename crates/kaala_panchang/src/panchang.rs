//! Panchang assembly for one local calendar day.
//!
//! Pipeline: resolve the day's horizon events, pick the evaluation
//! instant (sunrise plus a configurable offset, or 06:00 local when
//! sunrise is unavailable), read the longitude pair once, derive every
//! element index from that single pair, then search forward for the
//! tithi, nakshatra and yoga end instants. Karana is reported as-of the
//! evaluation instant with no end search.

use kaala_core::{EphemerisOracle, GeoLocation};
use kaala_time::{LocalDate, UtcOffset, UtcTime, calendar_to_jd, local_time_jd_ut};
use kaala_vedic::{
    karana_from_elongation, nakshatra_from_longitude, rahu_kaal, shiva_vaas,
    tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};

use crate::error::PanchangError;
use crate::longitudes::{longitudes_at, validate_location};
use crate::panchang_types::{
    KaranaInfo, NakshatraInfo, PanchangConfig, PanchangRecord, RahuKaalInfo, TithiInfo, YogaInfo,
};
use crate::riseset::{rise_set, validate_utc_offset};
use crate::transition::{MINUTES_PER_DAY, next_change};
use crate::transition_types::{TransitionConfig, TransitionKind};

/// Hour of the local-time anchor used when sunrise is unavailable.
const FALLBACK_ANCHOR_HOUR: u32 = 6;

/// Hours before sunrise at which the audit tithi is sampled.
const DAWN_CHECK_OFFSET_HOURS: f64 = 2.0;

/// End instant for one element, as civil UTC.
fn end_instant(
    oracle: &dyn EphemerisOracle,
    eval_jd: f64,
    location: GeoLocation,
    kind: TransitionKind,
    current_index: u8,
    config: &PanchangConfig,
    transition_config: &TransitionConfig,
) -> Result<Option<UtcTime>, PanchangError> {
    let event = next_change(
        oracle,
        eval_jd,
        location,
        kind,
        current_index,
        config.fine_offset_deg,
        transition_config,
    )?;
    Ok(event.map(|e| UtcTime::from_jd_ut(e.jd_ut)))
}

/// Compute the full panchang for `date` as observed from `location`.
///
/// Inputs are validated before the oracle is consulted. Rise/set
/// failures degrade their own fields only; a longitude failure at any
/// point aborts the whole record with [`PanchangError::Oracle`], since a
/// record mixing longitudes from partial evaluations would be worse
/// than no record.
pub fn compute_panchang(
    oracle: &dyn EphemerisOracle,
    date: LocalDate,
    offset: UtcOffset,
    location: GeoLocation,
    config: &PanchangConfig,
    transition_config: &TransitionConfig,
) -> Result<PanchangRecord, PanchangError> {
    config.validate().map_err(PanchangError::InvalidConfig)?;
    transition_config.validate().map_err(PanchangError::InvalidConfig)?;
    validate_location(&location).map_err(PanchangError::InvalidLocation)?;
    validate_utc_offset(&offset).map_err(PanchangError::InvalidConfig)?;

    let events = rise_set(oracle, date, offset, location, config.atmosphere)?;

    // Evaluation anchor: sunrise when it resolved, else 06:00 local.
    let anchor_jd = match events.sunrise.jd_ut() {
        Some(jd) => jd,
        None => local_time_jd_ut(date, FALLBACK_ANCHOR_HOUR, 0, 0.0, offset),
    };
    let eval_jd = anchor_jd + config.evaluation_offset_minutes / MINUTES_PER_DAY;

    let pair = longitudes_at(oracle, eval_jd, location, config.fine_offset_deg)?;
    let elongation = pair.elongation_deg();
    let tithi_pos = tithi_from_elongation(elongation);
    let nakshatra_pos = nakshatra_from_longitude(pair.moon_deg);
    let yoga_pos = yoga_from_sum(pair.sum_deg());
    let karana_pos = karana_from_elongation(elongation);

    // End searches. A search that finds no change inside its horizon
    // leaves the end empty rather than inventing one.
    let tithi_ends_at = end_instant(
        oracle,
        eval_jd,
        location,
        TransitionKind::Tithi,
        tithi_pos.tithi_index,
        config,
        transition_config,
    )?;
    let nakshatra_ends_at = end_instant(
        oracle,
        eval_jd,
        location,
        TransitionKind::Nakshatra,
        nakshatra_pos.nakshatra_index,
        config,
        transition_config,
    )?;
    let yoga_ends_at = end_instant(
        oracle,
        eval_jd,
        location,
        TransitionKind::Yoga,
        yoga_pos.yoga_index,
        config,
        transition_config,
    )?;

    // Audit sample taken shortly before dawn. The classical day-boundary
    // rule would compare this against the sunrise tithi; the record keeps
    // the sunrise-anchored tithi regardless.
    let dawn_window_tithi_index = match events.sunrise.jd_ut() {
        Some(sunrise_jd) => {
            let probe_jd = sunrise_jd - DAWN_CHECK_OFFSET_HOURS / 24.0;
            let dawn_pair = longitudes_at(oracle, probe_jd, location, config.fine_offset_deg)?;
            Some(tithi_from_elongation(dawn_pair.elongation_deg()).tithi_index)
        }
        None => None,
    };

    // Weekday of the civil date itself, not of the evaluation instant.
    let vaar = vaar_from_jd(calendar_to_jd(date.year, date.month, f64::from(date.day)));

    let rahu_kaal = match (events.sunrise.jd_ut(), events.sunset.jd_ut()) {
        (Some(sunrise_jd), Some(sunset_jd)) => {
            rahu_kaal(sunrise_jd, sunset_jd, vaar).map(|window| RahuKaalInfo {
                starts_at: UtcTime::from_jd_ut(window.start_jd),
                ends_at: UtcTime::from_jd_ut(window.end_jd),
            })
        }
        _ => None,
    };

    let shiva_vaas = shiva_vaas(tithi_pos.paksha, tithi_pos.tithi_in_paksha);

    Ok(PanchangRecord {
        date,
        events,
        evaluated_at: UtcTime::from_jd_ut(eval_jd),
        sun_longitude_deg: pair.sun_deg,
        moon_longitude_deg: pair.moon_deg,
        elongation_deg: elongation,
        tithi: TithiInfo {
            tithi: tithi_pos.tithi,
            tithi_index: tithi_pos.tithi_index,
            paksha: tithi_pos.paksha,
            tithi_in_paksha: tithi_pos.tithi_in_paksha,
            ends_at: tithi_ends_at,
        },
        nakshatra: NakshatraInfo {
            nakshatra: nakshatra_pos.nakshatra,
            nakshatra_index: nakshatra_pos.nakshatra_index,
            pada: nakshatra_pos.pada,
            ends_at: nakshatra_ends_at,
        },
        yoga: YogaInfo {
            yoga: yoga_pos.yoga,
            yoga_index: yoga_pos.yoga_index,
            ends_at: yoga_ends_at,
        },
        karana: KaranaInfo {
            karana: karana_pos.karana,
            half_index: karana_pos.half_index,
        },
        vaar,
        rahu_kaal,
        shiva_vaas,
        dawn_window_tithi_index,
    })
}
