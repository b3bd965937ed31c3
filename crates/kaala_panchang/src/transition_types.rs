//! Configuration and result types for the index-transition search.

/// Which calendar element a transition search tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Tithi index, 30 per lunar month.
    Tithi,
    /// Nakshatra index, 27 per sidereal month.
    Nakshatra,
    /// Yoga index, 27 per Sun+Moon cycle.
    Yoga,
    /// Karana half-tithi index, 60 per lunar month.
    Karana,
}

impl TransitionKind {
    /// Length of the element's index cycle.
    pub const fn cycle_len(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra => 27,
            Self::Yoga => 27,
            Self::Karana => 60,
        }
    }

    /// Lowercase element name for messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }
}

/// Tuning for the coarse-scan-plus-bisection transition search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Coarse scan step in minutes.
    pub coarse_step_minutes: f64,
    /// Bisection iterations once the coarse scan brackets a change.
    pub bisection_iterations: u32,
    /// Give up after scanning this many hours without an index change.
    pub max_search_hours: f64,
}

impl Default for TransitionConfig {
    /// 15-minute coarse scan, 30 bisections, 48-hour horizon.
    ///
    /// The slowest element (tithi near apogee) still changes well inside
    /// 48 hours, and 30 halvings of a 15-minute bracket resolve the
    /// boundary to under a millisecond.
    fn default() -> Self {
        Self {
            coarse_step_minutes: 15.0,
            bisection_iterations: 30,
            max_search_hours: 48.0,
        }
    }
}

impl TransitionConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.coarse_step_minutes.is_finite() || self.coarse_step_minutes <= 0.0 {
            return Err("coarse_step_minutes must be positive");
        }
        if self.bisection_iterations == 0 {
            return Err("bisection_iterations must be greater than zero");
        }
        if !self.max_search_hours.is_finite() || self.max_search_hours <= 0.0 {
            return Err("max_search_hours must be positive");
        }
        if self.max_search_hours * 60.0 < self.coarse_step_minutes {
            return Err("max_search_hours must cover at least one coarse step");
        }
        Ok(())
    }

    /// Hard ceiling on oracle probes for one search: every coarse step
    /// plus every bisection iteration.
    pub fn max_evaluations(&self) -> u32 {
        let steps = (self.max_search_hours * 60.0 / self.coarse_step_minutes).ceil() as u32;
        steps + self.bisection_iterations
    }
}

/// A found index transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEvent {
    /// First instant, to bisection precision, at which the new index holds.
    pub jd_ut: f64,
    /// Index in effect at the search start.
    pub from_index: u8,
    /// Index in effect at and after `jd_ut`.
    pub to_index: u8,
}
