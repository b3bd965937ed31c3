//! Full-record assembly against a deterministic mock sky.
//!
//! Longitudes move linearly and horizon events recur at fixed UT times,
//! so every field of the record has a closed-form expected value.

use kaala_core::{
    Atmosphere, Body, EphemerisOracle, GeoLocation, LongitudeFrame, OracleError, RiseSetKind,
};
use kaala_panchang::{
    EventOutcome, PanchangConfig, PanchangError, PanchangRecord, TransitionConfig,
    compute_panchang,
};
use kaala_time::{LocalDate, UtcOffset, UtcTime};
use kaala_vedic::{Karana, Nakshatra, Paksha, ShivaVaas, Tithi, Vaar, Yoga};

use approx::assert_abs_diff_eq;

/// 2024-03-20 00:00 UT.
const EPOCH: f64 = 2_460_389.5;

const IST: UtcOffset = UtcOffset::new(5.5);

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090, 216.0)
}

fn march_20() -> LocalDate {
    LocalDate::new(2024, 3, 20)
}

/// Linear longitudes plus a fixed daily rise/set schedule.
struct MockSky {
    sun_at_epoch: f64,
    moon_at_epoch: f64,
    sun_rate_deg_day: f64,
    moon_rate_deg_day: f64,
    sun_rise_utc_hours: Option<f64>,
    sun_set_utc_hours: Option<f64>,
    moon_rise_utc_hours: Option<f64>,
    moon_set_utc_hours: Option<f64>,
    fail_sun_rise: bool,
}

impl MockSky {
    fn delhi_march() -> Self {
        Self {
            sun_at_epoch: 355.8,
            moon_at_epoch: 0.0,
            sun_rate_deg_day: 1.0,
            moon_rate_deg_day: 13.0,
            sun_rise_utc_hours: Some(1.0),
            sun_set_utc_hours: Some(12.75),
            moon_rise_utc_hours: Some(15.0),
            moon_set_utc_hours: Some(3.5),
            fail_sun_rise: false,
        }
    }
}

impl EphemerisOracle for MockSky {
    fn ecliptic_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        _frame: LongitudeFrame,
    ) -> Result<f64, OracleError> {
        let dt = jd_ut - EPOCH;
        let lon = match body {
            Body::Sun => self.sun_at_epoch + self.sun_rate_deg_day * dt,
            Body::Moon => self.moon_at_epoch + self.moon_rate_deg_day * dt,
            Body::Jupiter => return Err(OracleError::Unsupported("jupiter longitude")),
        };
        Ok(lon.rem_euclid(360.0))
    }

    fn rise_transit(
        &self,
        jd_ut_start: f64,
        body: Body,
        kind: RiseSetKind,
        _location: GeoLocation,
        _atmosphere: Atmosphere,
    ) -> Result<Option<f64>, OracleError> {
        if self.fail_sun_rise && body == Body::Sun && kind == RiseSetKind::Rise {
            return Err(OracleError::Backend("horizon solver diverged".to_string()));
        }
        let hours = match (body, kind) {
            (Body::Sun, RiseSetKind::Rise) => self.sun_rise_utc_hours,
            (Body::Sun, RiseSetKind::Set) => self.sun_set_utc_hours,
            (Body::Moon, RiseSetKind::Rise) => self.moon_rise_utc_hours,
            (Body::Moon, RiseSetKind::Set) => self.moon_set_utc_hours,
            (Body::Jupiter, _) => None,
        };
        Ok(hours.map(|h| {
            let midnight = (jd_ut_start - 0.5).floor() + 0.5;
            let mut jd = midnight + h / 24.0;
            if jd < jd_ut_start {
                jd += 1.0;
            }
            jd
        }))
    }
}

/// Instants go through float chains, so compare as Julian Days with a
/// half-second tolerance instead of asserting decomposed fields.
fn assert_close_utc(actual: UtcTime, year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) {
    let expected = UtcTime::new(year, month, day, hour, minute, second).to_jd_ut();
    let got = actual.to_jd_ut();
    assert!(
        (got - expected).abs() < 0.5 / 86_400.0,
        "expected {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:04.1} UT, got {actual}"
    );
}

fn golden_record() -> PanchangRecord {
    compute_panchang(
        &MockSky::delhi_march(),
        march_20(),
        IST,
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap()
}

#[test]
fn golden_day_core_elements() {
    let record = golden_record();

    assert_eq!(record.date, march_20());
    assert_eq!(record.vaar, Vaar::Budhavara);

    // Evaluation at sunrise (01:00 UT) plus the default 15 minutes.
    assert_close_utc(record.evaluated_at, 2024, 3, 20, 1, 15, 0.0);

    // Longitudes at the evaluation instant: epoch values plus 75 minutes
    // of linear motion.
    assert_abs_diff_eq!(record.sun_longitude_deg, 355.852_083_333, epsilon = 1e-6);
    assert_abs_diff_eq!(record.moon_longitude_deg, 0.677_083_333, epsilon = 1e-6);
    assert_abs_diff_eq!(record.elongation_deg, 4.825, epsilon = 1e-6);

    assert_eq!(record.tithi.tithi, Tithi::ShuklaPratipada);
    assert_eq!(record.tithi.tithi_index, 0);
    assert_eq!(record.tithi.paksha, Paksha::Shukla);
    assert_eq!(record.tithi.tithi_in_paksha, 1);

    assert_eq!(record.nakshatra.nakshatra, Nakshatra::Ashwini);
    assert_eq!(record.nakshatra.nakshatra_index, 0);
    assert_eq!(record.nakshatra.pada, 1);

    assert_eq!(record.yoga.yoga, Yoga::Vaidhriti);
    assert_eq!(record.yoga.yoga_index, 26);

    assert_eq!(record.karana.karana, Karana::Kimstughna);
    assert_eq!(record.karana.half_index, 0);
}

#[test]
fn golden_day_end_instants() {
    let record = golden_record();

    // Elongation hits 12 deg at epoch + 0.65 days.
    assert_close_utc(record.tithi.ends_at.unwrap(), 2024, 3, 20, 15, 36, 0.0);
    // Moon leaves Ashwini at 13.333 deg, 1.02564 days past the epoch.
    assert_close_utc(record.nakshatra.ends_at.unwrap(), 2024, 3, 21, 0, 36, 55.4);
    // The Sun+Moon sum wraps 360 deg at epoch + 0.3 days.
    assert_close_utc(record.yoga.ends_at.unwrap(), 2024, 3, 20, 7, 12, 0.0);
}

#[test]
fn golden_day_events_and_observances() {
    let record = golden_record();

    assert!(record.events.sunrise.is_found());
    assert!(record.events.sunset.is_found());
    assert!(record.events.moonrise.is_found());
    assert!(record.events.moonset.is_found());

    // Wednesday puts Rahu Kaal in the fifth of eight daylight segments:
    // 11.75 h of daylight from 01:00 UT puts it at 06:52:30 - 08:20:37.5.
    let rahu = record.rahu_kaal.expect("sunrise and sunset both resolved");
    assert_close_utc(rahu.starts_at, 2024, 3, 20, 6, 52, 30.0);
    assert_close_utc(rahu.ends_at, 2024, 3, 20, 8, 20, 37.5);

    // Shukla Pratipada puts Shiva in the cremation ground.
    assert_eq!(record.shiva_vaas, Some(ShivaVaas::Shmashana));

    // Two hours before sunrise the elongation was 3.7 deg: same tithi.
    assert_eq!(record.dawn_window_tithi_index, Some(0));
}

#[test]
fn ends_follow_the_evaluation_instant() {
    let record = golden_record();
    let eval_jd = record.evaluated_at.to_jd_ut();
    assert!(record.tithi.ends_at.unwrap().to_jd_ut() > eval_jd);
    assert!(record.nakshatra.ends_at.unwrap().to_jd_ut() > eval_jd);
    assert!(record.yoga.ends_at.unwrap().to_jd_ut() > eval_jd);
}

#[test]
fn record_is_deterministic() {
    let first = golden_record();
    let second = golden_record();
    assert_eq!(first, second);
}

#[test]
fn absent_sunrise_falls_back_to_six_local() {
    let sky = MockSky {
        sun_rise_utc_hours: None,
        ..MockSky::delhi_march()
    };
    let record = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap();

    assert_eq!(record.events.sunrise, EventOutcome::Absent);
    // Anchor 06:00 IST = 00:30 UT, evaluation 15 minutes later.
    assert_close_utc(record.evaluated_at, 2024, 3, 20, 0, 45, 0.0);
    // Rahu Kaal and the dawn audit both need a real sunrise.
    assert_eq!(record.rahu_kaal, None);
    assert_eq!(record.dawn_window_tithi_index, None);
    // Elements still come out of the longitude service.
    assert_eq!(record.tithi.tithi_index, 0);
}

#[test]
fn failed_sunrise_also_falls_back() {
    let sky = MockSky {
        fail_sun_rise: true,
        ..MockSky::delhi_march()
    };
    let record = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap();

    assert!(matches!(record.events.sunrise, EventOutcome::Failed(_)));
    assert_close_utc(record.evaluated_at, 2024, 3, 20, 0, 45, 0.0);
    assert_eq!(record.rahu_kaal, None);
}

#[test]
fn fine_offset_trims_longitudes_but_not_elongation() {
    let sky = MockSky::delhi_march();
    let plain = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap();
    let trimmed = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig { fine_offset_deg: 0.04, ..Default::default() },
        &TransitionConfig::default(),
    )
    .unwrap();

    assert_abs_diff_eq!(
        trimmed.sun_longitude_deg - plain.sun_longitude_deg,
        0.04,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(trimmed.elongation_deg, plain.elongation_deg, epsilon = 1e-9);
    assert_eq!(trimmed.tithi.tithi_index, plain.tithi.tithi_index);
}

#[test]
fn rejects_bad_inputs_before_consulting_the_sky() {
    let sky = MockSky::delhi_march();

    let err = compute_panchang(
        &sky,
        march_20(),
        IST,
        GeoLocation::new(95.0, 77.0, 0.0),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PanchangError::InvalidLocation(_)));

    let err = compute_panchang(
        &sky,
        march_20(),
        UtcOffset::new(15.0),
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PanchangError::InvalidConfig(_)));

    let err = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig { fine_offset_deg: 0.06, ..Default::default() },
        &TransitionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PanchangError::InvalidConfig(_)));

    let err = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig { evaluation_offset_minutes: -5.0, ..Default::default() },
        &TransitionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PanchangError::InvalidConfig(_)));
}

#[test]
fn longitude_failure_aborts_the_record() {
    struct BrokenLongitudes {
        inner: MockSky,
    }

    impl EphemerisOracle for BrokenLongitudes {
        fn ecliptic_longitude(
            &self,
            _jd_ut: f64,
            _body: Body,
            _frame: LongitudeFrame,
        ) -> Result<f64, OracleError> {
            Err(OracleError::Backend("kernel gap".to_string()))
        }

        fn rise_transit(
            &self,
            jd_ut_start: f64,
            body: Body,
            kind: RiseSetKind,
            location: GeoLocation,
            atmosphere: Atmosphere,
        ) -> Result<Option<f64>, OracleError> {
            self.inner.rise_transit(jd_ut_start, body, kind, location, atmosphere)
        }
    }

    let sky = BrokenLongitudes { inner: MockSky::delhi_march() };
    let err = compute_panchang(
        &sky,
        march_20(),
        IST,
        delhi(),
        &PanchangConfig::default(),
        &TransitionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PanchangError::Oracle(_)));
}
