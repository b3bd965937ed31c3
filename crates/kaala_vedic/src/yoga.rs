//! Yoga computation.
//!
//! The 27 yogas divide the sum of the Sun's and Moon's sidereal
//! longitudes into equal sectors of 13°20′, Vishkambha through Vaidhriti.

use crate::util::{normalize_360, segment_index};

/// Span of one yoga: 360/27 = 13.3333... degrees.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarman,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarman,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// Sanskrit name of the yoga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarman => "Sukarman",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (0 = Vishkambha .. 26 = Vaidhriti).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Yoga resolved from a longitude sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    /// Which yoga.
    pub yoga: Yoga,
    /// 0-based yoga index (0 = Vishkambha).
    pub yoga_index: u8,
    /// Degrees elapsed inside this yoga (0-13.33).
    pub degrees_in_yoga: f64,
}

/// Resolve the yoga for a Sun-plus-Moon sidereal longitude sum in degrees.
///
/// Accepts any angle; normalization to [0, 360) happens here.
pub fn yoga_from_sum(sum: f64) -> YogaPosition {
    let sum = normalize_360(sum);
    let idx = segment_index(sum, YOGA_SPAN_DEG, ALL_YOGAS.len() as u8);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        degrees_in_yoga: sum - idx as f64 * YOGA_SPAN_DEG,
    }
}
