//! Forward search for the instant a calendar element changes index.
//!
//! A coarse fixed-step scan walks forward from the start instant until a
//! probe reports an index different from the starting one, then bisection
//! narrows the bracket to the boundary. Probes derive their index through
//! the same longitude service and index functions the assembler uses, so
//! the search agrees with the record it refines. Wrap-around changes
//! (tithi 29 to 0, yoga 26 to 0) are ordinary index differences here and
//! need no special casing.

use kaala_core::{EphemerisOracle, GeoLocation, OracleError};
use kaala_vedic::{
    karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation, yoga_from_sum,
};

use crate::error::PanchangError;
use crate::longitudes::{longitude_pair, validate_location};
use crate::transition_types::{TransitionConfig, TransitionEvent, TransitionKind};

pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;

/// Element index at `jd_ut`, derived exactly as the assembler derives it.
fn index_at(
    oracle: &dyn EphemerisOracle,
    jd_ut: f64,
    location: GeoLocation,
    kind: TransitionKind,
    fine_offset_deg: f64,
) -> Result<u8, OracleError> {
    let pair = longitude_pair(oracle, jd_ut, location, fine_offset_deg)?;
    Ok(match kind {
        TransitionKind::Tithi => tithi_from_elongation(pair.elongation_deg()).tithi_index,
        TransitionKind::Nakshatra => nakshatra_from_longitude(pair.moon_deg).nakshatra_index,
        TransitionKind::Yoga => yoga_from_sum(pair.sum_deg()).yoga_index,
        TransitionKind::Karana => karana_from_elongation(pair.elongation_deg()).half_index,
    })
}

/// Find the next instant after `jd_ut_start` at which `kind` leaves
/// `current_index`.
///
/// `current_index` must be the index in effect at `jd_ut_start`; pass the
/// value just computed from the same oracle, location and fine offset.
/// Returns `Ok(None)` when no change occurs within
/// `config.max_search_hours` — the caller reports the end as unknown
/// rather than inventing one. The returned instant is strictly after the
/// start and is the first probe-resolved instant at which the new index
/// holds.
pub fn next_change(
    oracle: &dyn EphemerisOracle,
    jd_ut_start: f64,
    location: GeoLocation,
    kind: TransitionKind,
    current_index: u8,
    fine_offset_deg: f64,
    config: &TransitionConfig,
) -> Result<Option<TransitionEvent>, PanchangError> {
    config.validate().map_err(PanchangError::InvalidConfig)?;
    validate_location(&location).map_err(PanchangError::InvalidLocation)?;

    let step_days = config.coarse_step_minutes / MINUTES_PER_DAY;
    let horizon_days = config.max_search_hours / 24.0;
    let max_steps = (horizon_days / step_days).ceil() as usize;

    // Coarse scan: first stepped probe whose index differs.
    let mut t_lo = jd_ut_start;
    let mut bracket = None;
    for step in 1..=max_steps {
        let t_curr = jd_ut_start + step as f64 * step_days;
        let idx = index_at(oracle, t_curr, location, kind, fine_offset_deg)?;
        if idx != current_index {
            bracket = Some((t_curr, idx));
            break;
        }
        t_lo = t_curr;
    }
    let Some((mut t_hi, mut idx_hi)) = bracket else {
        return Ok(None);
    };

    // Bisection: shrink [last instant at current_index, first instant past it].
    for _ in 0..config.bisection_iterations {
        let t_mid = 0.5 * (t_lo + t_hi);
        let idx_mid = index_at(oracle, t_mid, location, kind, fine_offset_deg)?;
        if idx_mid == current_index {
            t_lo = t_mid;
        } else {
            t_hi = t_mid;
            idx_hi = idx_mid;
        }
    }

    Ok(Some(TransitionEvent {
        jd_ut: t_hi,
        from_index: current_index,
        to_index: idx_hi,
    }))
}
