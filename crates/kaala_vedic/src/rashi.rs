//! Rashi (zodiac sign) and ayana computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30° each,
//! starting from Mesha (Aries) at 0°. The ayana — the Sun's half-year
//! course — follows from the Sun's sign: Makara through Mithuna is the
//! northern course, Karka through Dhanu the southern.

use crate::util::{normalize_360, segment_index};

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Resolve the rashi for a sidereal longitude in degrees.
///
/// Accepts any angle; normalization to [0, 360) happens here.
pub fn rashi_from_longitude(sidereal_lon: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon);
    let idx = segment_index(lon, RASHI_SPAN_DEG, ALL_RASHIS.len() as u8);
    ALL_RASHIS[idx as usize]
}

/// The Sun's half-year course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ayana {
    /// Northern course: Sun in Makara through Mithuna.
    Uttarayana,
    /// Southern course: Sun in Karka through Dhanu.
    Dakshinayana,
}

impl Ayana {
    /// IAST locative phrase for sankalpa assembly.
    pub const fn iast_phrase(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarāyane",
            Self::Dakshinayana => "Dakṣiṇāyane",
        }
    }
}

/// Ayana from the Sun's sidereal sign.
pub const fn ayana_for_rashi(sun_rashi: Rashi) -> Ayana {
    match sun_rashi {
        Rashi::Makara
        | Rashi::Kumbha
        | Rashi::Meena
        | Rashi::Mesha
        | Rashi::Vrishabha
        | Rashi::Mithuna => Ayana::Uttarayana,
        _ => Ayana::Dakshinayana,
    }
}
