//! Karana (half-tithi) computation.
//!
//! A karana is 6° of Moon-minus-Sun elongation, 60 per synodic cycle.
//! The naming cycle is not uniform: half-index 0 is the fixed karana
//! Kimstughna, half-indices 1-56 run eight full cycles of the seven
//! movable karanas, and half-indices 57-59 are the remaining three fixed
//! karanas Shakuni, Chatushpada, and Naga. Indexing a flat repeating
//! seven-name list misnames the start and the end of the cycle.

use crate::util::{normalize_360, segment_index};

/// Span of one karana: 6° of elongation (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names: 7 movable, 4 fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The seven movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana repeats through the cycle (vs. the four that
    /// occur exactly once).
    pub const fn is_movable(self) -> bool {
        matches!(
            self,
            Self::Bava
                | Self::Balava
                | Self::Kaulava
                | Self::Taitila
                | Self::Garaja
                | Self::Vanija
                | Self::Vishti
        )
    }
}

/// Name for a karana half-index in [0, 59].
///
/// Indices past 59 cannot come out of [`karana_from_elongation`]; they
/// fall into the final fixed slot.
pub const fn karana_for_half_index(half_index: u8) -> Karana {
    match half_index {
        0 => Karana::Kimstughna,
        1..=56 => MOVABLE_KARANAS[((half_index - 1) % 7) as usize],
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        _ => Karana::Naga,
    }
}

/// Karana resolved from an elongation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    /// Which karana.
    pub karana: Karana,
    /// Half-tithi index (0-59).
    pub half_index: u8,
    /// Degrees of elongation elapsed inside this karana (0-6).
    pub degrees_in_karana: f64,
}

/// Resolve the karana for a Moon-minus-Sun elongation in degrees.
///
/// Accepts any angle; normalization to [0, 360) happens here.
pub fn karana_from_elongation(elongation: f64) -> KaranaPosition {
    let elong = normalize_360(elongation);
    let half_index = segment_index(elong, KARANA_SEGMENT_DEG, 60);
    KaranaPosition {
        karana: karana_for_half_index(half_index),
        half_index,
        degrees_in_karana: elong - half_index as f64 * KARANA_SEGMENT_DEG,
    }
}
