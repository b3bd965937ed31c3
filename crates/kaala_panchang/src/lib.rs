//! Panchang computation over an ephemeris oracle.
//!
//! This crate turns raw ecliptic longitudes and horizon events into the
//! five limbs of the Hindu calendar — tithi, vaar, nakshatra, yoga and
//! karana — plus the derived observances built on them. It owns the
//! orchestration: input validation, the single-read longitude service,
//! the transition search that finds element end instants, the rise/set
//! resolver for the local day, and the assembler that binds them into a
//! [`PanchangRecord`].
//!
//! The astronomy itself lives behind [`kaala_core::EphemerisOracle`];
//! everything here is deterministic given the oracle's answers.

pub mod error;
pub mod longitudes;
pub mod panchang;
pub mod panchang_types;
pub mod riseset;
pub mod riseset_types;
pub mod transition;
pub mod transition_types;

pub use error::PanchangError;
pub use longitudes::{LongitudePair, longitudes_at};
pub use panchang::compute_panchang;
pub use panchang_types::{
    KaranaInfo, MAX_FINE_OFFSET_DEG, NakshatraInfo, PanchangConfig, PanchangRecord, RahuKaalInfo,
    TithiInfo, YogaInfo,
};
pub use riseset::rise_set;
pub use riseset_types::{DayEvents, EventOutcome};
pub use transition::next_change;
pub use transition_types::{TransitionConfig, TransitionEvent, TransitionKind};
