//! Board internal units.
//!
//! Positions, tolerances and track widths are compared in integer internal
//! units; one millimeter is one million units. Millimeter values coming
//! from configuration or board files are converted once, up front.

/// Internal units per millimeter.
pub const IU_PER_MM: i64 = 1_000_000;

/// Width of every synthesized track, in millimeters.
pub const DEFAULT_TRACK_WIDTH_MM: f64 = 0.25;

/// Rounds to the nearest unit so millimeter text written by the board
/// writer re-reads to identical internal units.
pub fn mm_to_iu(mm: f64) -> i64 {
    (mm * IU_PER_MM as f64).round() as i64
}

pub fn iu_to_mm(iu: i64) -> f64 {
    iu as f64 / IU_PER_MM as f64
}
