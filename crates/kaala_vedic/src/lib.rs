//! Pure calendar-element tables and index functions for panchang work.
//!
//! This crate provides:
//! - The five element families: tithi, nakshatra, yoga, karana, vaar
//! - Rashi, masa, and ritu tables with their sankalpa phrases
//! - Rahu Kaal, Shiva Vaas, and sankalpa text assembly
//!
//! Everything here is a total function of its arguments — no ephemeris,
//! no I/O. Angles come in as degrees from whatever oracle the caller
//! uses; index policy (boundary ownership, clamping) lives in `util`.

pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rahu_kaal;
pub mod rashi;
pub mod sankalpa;
pub mod shiva_vaas;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use karana::{
    KARANA_SEGMENT_DEG, Karana, KaranaPosition, MOVABLE_KARANAS, karana_for_half_index,
    karana_from_elongation,
};
pub use masa::{ALL_MASAS, Masa, Ritu, ritu_for_masa};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPosition, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use rahu_kaal::{RAHU_SEGMENT_BY_VAAR, RahuKaalWindow, rahu_kaal, rahu_segment_for_vaar};
pub use rashi::{ALL_RASHIS, Ayana, RASHI_SPAN_DEG, Rashi, ayana_for_rashi, rashi_from_longitude};
pub use sankalpa::{Gender, SankalpaInput, generate_sankalpa, to_devanagari_digits};
pub use shiva_vaas::{ALL_SHIVA_VAAS, ShivaVaas, shiva_vaas};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation,
};
pub use util::{BOUNDARY_EPSILON_DEG, elongation_deg, normalize_360, segment_index};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SPAN_DEG, Yoga, YogaPosition, yoga_from_sum};
