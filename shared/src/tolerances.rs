use serde::{Deserialize, Serialize};

use crate::units::mm_to_iu;

/// Proximity windows in millimeters, as written at the call site.
///
/// The two windows are deliberately asymmetric: a tall narrow box for
/// pads stacked vertically and a wide short box for pads sitting side by
/// side, which is the geometry of two-pad passives and LEDs. The two
/// diagonal fields are reserved for a diagonal linking mode that is not
/// implemented; nothing reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceConfig {
    pub x_vertical_tolerance_mm: f64,
    pub y_vertical_range_mm: f64,
    pub x_horizontal_range_mm: f64,
    pub y_horizontal_tolerance_mm: f64,
    pub diagonal_x_tolerance_mm: f64,
    pub diagonal_y_tolerance_mm: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            x_vertical_tolerance_mm: 0.1,
            y_vertical_range_mm: 2.5,
            x_horizontal_range_mm: 2.5,
            y_horizontal_tolerance_mm: 0.1,
            diagonal_x_tolerance_mm: 3.0,
            diagonal_y_tolerance_mm: 2.0,
        }
    }
}

impl ToleranceConfig {
    /// Convert once to internal units; the router only ever compares
    /// integer distances.
    pub fn to_windows(&self) -> ToleranceWindows {
        ToleranceWindows {
            x_vertical: mm_to_iu(self.x_vertical_tolerance_mm),
            y_vertical: mm_to_iu(self.y_vertical_range_mm),
            x_horizontal: mm_to_iu(self.x_horizontal_range_mm),
            y_horizontal: mm_to_iu(self.y_horizontal_tolerance_mm),
            diagonal_x: mm_to_iu(self.diagonal_x_tolerance_mm),
            diagonal_y: mm_to_iu(self.diagonal_y_tolerance_mm),
        }
    }
}

/// [`ToleranceConfig`] pre-converted to internal units.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceWindows {
    pub x_vertical: i64,
    pub y_vertical: i64,
    pub x_horizontal: i64,
    pub y_horizontal: i64,
    pub diagonal_x: i64,
    pub diagonal_y: i64,
}
