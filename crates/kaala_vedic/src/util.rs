//! Shared angle utilities for calendar-element computation.

/// Guard subtracted from an angle before flooring into a segment index.
///
/// An angle sitting exactly on a segment boundary belongs to the segment
/// that ends there: elongation 180.0° is Purnima (index 14), not the
/// first instant of index 15. The guard plus the clamp in
/// [`segment_index`] also keeps float noise at 0°/360° from producing an
/// out-of-range index.
pub const BOUNDARY_EPSILON_DEG: f64 = 1e-9;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Moon-minus-Sun elongation, normalized to [0, 360).
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_360(moon_deg - sun_deg)
}

/// Map an angle in [0, 360) to a segment index in [0, count).
///
/// The single place the boundary policy lives: subtract
/// [`BOUNDARY_EPSILON_DEG`], floor, clamp. Every index function routes
/// through here.
pub fn segment_index(angle_deg: f64, span_deg: f64, count: u8) -> u8 {
    let idx = ((angle_deg - BOUNDARY_EPSILON_DEG) / span_deg).floor();
    if idx < 0.0 {
        return 0;
    }
    (idx as u8).min(count - 1)
}
