//! Rahu Kaal: the inauspicious daylight segment.
//!
//! Daylight (sunrise to sunset) is divided into eight equal segments;
//! which one belongs to Rahu depends on the weekday. The classical
//! assignment, 0-based: Sunday 7th, Monday 1st, Tuesday 6th, Wednesday
//! 4th, Thursday 5th, Friday 3rd, Saturday 2nd.

use crate::vaar::Vaar;

/// 0-based Rahu segment for each vaar, indexed by `Vaar::index()`.
pub const RAHU_SEGMENT_BY_VAAR: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Rahu's segment of the eight-way daylight split for a weekday.
pub const fn rahu_segment_for_vaar(vaar: Vaar) -> u8 {
    RAHU_SEGMENT_BY_VAAR[vaar.index() as usize]
}

/// A Rahu Kaal window, in the same time frame as the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RahuKaalWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Rahu Kaal for a day bounded by `sunrise_jd` and `sunset_jd`.
///
/// Returns `None` when sunset is not after sunrise (bad inputs, polar
/// conditions).
pub fn rahu_kaal(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Option<RahuKaalWindow> {
    if sunset_jd <= sunrise_jd {
        return None;
    }
    let segment = rahu_segment_for_vaar(vaar) as f64;
    let segment_len = (sunset_jd - sunrise_jd) / 8.0;
    let start_jd = sunrise_jd + segment * segment_len;
    Some(RahuKaalWindow {
        start_jd,
        end_jd: start_jd + segment_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 12-hour day: sunrise 06:00, sunset 18:00, segments of 1.5 h.
    const SUNRISE: f64 = 2_460_389.75;
    const SUNSET: f64 = 2_460_390.25;
    const HOUR: f64 = 1.0 / 24.0;

    #[test]
    fn monday_is_second_segment() {
        let w = rahu_kaal(SUNRISE, SUNSET, Vaar::Somavara).unwrap();
        assert!((w.start_jd - (SUNRISE + 1.5 * HOUR)).abs() < 1e-9);
        assert!((w.end_jd - (SUNRISE + 3.0 * HOUR)).abs() < 1e-9);
    }

    #[test]
    fn sunday_is_last_segment() {
        let w = rahu_kaal(SUNRISE, SUNSET, Vaar::Ravivara).unwrap();
        assert!((w.start_jd - (SUNRISE + 10.5 * HOUR)).abs() < 1e-9);
        assert!((w.end_jd - SUNSET).abs() < 1e-9);
    }

    #[test]
    fn tuesday_is_seventh_segment() {
        let w = rahu_kaal(SUNRISE, SUNSET, Vaar::Mangalavara).unwrap();
        assert!((w.start_jd - (SUNRISE + 9.0 * HOUR)).abs() < 1e-9);
    }

    #[test]
    fn window_always_inside_daylight() {
        for vaar in crate::vaar::ALL_VAARS {
            let w = rahu_kaal(SUNRISE, SUNSET, vaar).unwrap();
            assert!(w.start_jd >= SUNRISE - 1e-12);
            assert!(w.end_jd <= SUNSET + 1e-12);
            assert!(w.end_jd > w.start_jd);
        }
    }

    #[test]
    fn degenerate_day_rejected() {
        assert_eq!(rahu_kaal(SUNSET, SUNRISE, Vaar::Somavara), None);
        assert_eq!(rahu_kaal(SUNRISE, SUNRISE, Vaar::Somavara), None);
    }

    #[test]
    fn segment_table_covers_all_weekdays() {
        let mut seen = [false; 8];
        for vaar in crate::vaar::ALL_VAARS {
            seen[rahu_segment_for_vaar(vaar) as usize] = true;
        }
        // Segment 0 (sunrise itself) belongs to no weekday.
        assert!(!seen[0]);
        assert_eq!(seen.iter().filter(|s| **s).count(), 7);
    }
}
