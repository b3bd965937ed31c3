//! Tithi (lunar day) computation.
//!
//! The synodic cycle is divided into 30 tithis of 12° of Moon-minus-Sun
//! elongation each: 14 bright-fortnight tithis, Purnima, 14 dark-fortnight
//! tithis, Amavasya. The paksha falls out of the index: 0-14 bright
//! (Shukla), 15-29 dark (Krishna).

use crate::util::{normalize_360, segment_index};

/// Span of one tithi: 12° of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) fortnight, tithi indices 0-14.
    Shukla,
    /// Dark (waning) fortnight, tithi indices 15-29.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis from Shukla Pratipada to Amavasya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in elongation order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    /// Conventional name, fortnight prefix included.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Shukla Pratipada",
            Self::ShuklaDwitiya => "Shukla Dwitiya",
            Self::ShuklaTritiya => "Shukla Tritiya",
            Self::ShuklaChaturthi => "Shukla Chaturthi",
            Self::ShuklaPanchami => "Shukla Panchami",
            Self::ShuklaShashthi => "Shukla Shashthi",
            Self::ShuklaSaptami => "Shukla Saptami",
            Self::ShuklaAshtami => "Shukla Ashtami",
            Self::ShuklaNavami => "Shukla Navami",
            Self::ShuklaDashami => "Shukla Dashami",
            Self::ShuklaEkadashi => "Shukla Ekadashi",
            Self::ShuklaDwadashi => "Shukla Dwadashi",
            Self::ShuklaTrayodashi => "Shukla Trayodashi",
            Self::ShuklaChaturdashi => "Shukla Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Krishna Pratipada",
            Self::KrishnaDwitiya => "Krishna Dwitiya",
            Self::KrishnaTritiya => "Krishna Tritiya",
            Self::KrishnaChaturthi => "Krishna Chaturthi",
            Self::KrishnaPanchami => "Krishna Panchami",
            Self::KrishnaShashthi => "Krishna Shashthi",
            Self::KrishnaSaptami => "Krishna Saptami",
            Self::KrishnaAshtami => "Krishna Ashtami",
            Self::KrishnaNavami => "Krishna Navami",
            Self::KrishnaDashami => "Krishna Dashami",
            Self::KrishnaEkadashi => "Krishna Ekadashi",
            Self::KrishnaDwadashi => "Krishna Dwadashi",
            Self::KrishnaTrayodashi => "Krishna Trayodashi",
            Self::KrishnaChaturdashi => "Krishna Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// 0-based index in elongation order (0 = Shukla Pratipada).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fortnight this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }
}

/// Tithi resolved from an elongation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// Which tithi.
    pub tithi: Tithi,
    /// 0-based tithi index (0 = Shukla Pratipada, 29 = Amavasya).
    pub tithi_index: u8,
    /// Fortnight.
    pub paksha: Paksha,
    /// 1-based tithi number within the fortnight (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation elapsed inside this tithi (0-12).
    pub degrees_in_tithi: f64,
}

/// Resolve the tithi for a Moon-minus-Sun elongation in degrees.
///
/// Accepts any angle; normalization to [0, 360) happens here.
pub fn tithi_from_elongation(elongation: f64) -> TithiPosition {
    let elong = normalize_360(elongation);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, ALL_TITHIS.len() as u8);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: idx % 15 + 1,
        degrees_in_tithi: elong - idx as f64 * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pratipada_at_zero() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.tithi, Tithi::ShuklaPratipada);
        assert_eq!(t.tithi_index, 0);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi_in_paksha, 1);
    }

    #[test]
    fn purnima_at_exact_opposition() {
        // 180.0° is the last instant of Purnima, not Krishna Pratipada.
        let t = tithi_from_elongation(180.0);
        assert_eq!(t.tithi, Tithi::Purnima);
        assert_eq!(t.tithi_index, 14);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi_in_paksha, 15);
    }

    #[test]
    fn amavasya_before_wrap() {
        let t = tithi_from_elongation(359.9);
        assert_eq!(t.tithi, Tithi::Amavasya);
        assert_eq!(t.tithi_index, 29);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_in_paksha, 15);
    }

    #[test]
    fn krishna_begins_past_opposition() {
        let t = tithi_from_elongation(180.1);
        assert_eq!(t.tithi, Tithi::KrishnaPratipada);
        assert_eq!(t.tithi_index, 15);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_in_paksha, 1);
    }

    #[test]
    fn negative_elongation_normalizes() {
        // -12° normalizes to 348°, the boundary closing Krishna Chaturdashi.
        let t = tithi_from_elongation(-12.0);
        assert_eq!(t.tithi_index, 28);
    }

    #[test]
    fn full_sweep_hits_every_index_once_in_order() {
        let mut last = None;
        for step in 0..30 {
            let elong = step as f64 * TITHI_SEGMENT_DEG + 6.0;
            let t = tithi_from_elongation(elong);
            assert_eq!(t.tithi_index, step as u8);
            if let Some(prev) = last {
                assert_eq!(t.tithi_index, prev + 1);
            }
            last = Some(t.tithi_index);
        }
    }

    #[test]
    fn degrees_in_tithi_tracks_offset() {
        let t = tithi_from_elongation(30.0);
        assert_eq!(t.tithi_index, 2);
        assert!((t.degrees_in_tithi - 6.0).abs() < 1e-9);
    }

    #[test]
    fn names_match_fortnight() {
        assert_eq!(Tithi::ShuklaEkadashi.name(), "Shukla Ekadashi");
        assert_eq!(Tithi::KrishnaAshtami.name(), "Krishna Ashtami");
        assert_eq!(Tithi::Amavasya.name(), "Amavasya");
        assert_eq!(Paksha::Shukla.name(), "Shukla");
    }

    #[test]
    fn index_matches_table_position() {
        for (i, tithi) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(tithi.index() as usize, i);
        }
    }
}
