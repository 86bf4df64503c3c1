use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::units::{iu_to_mm, mm_to_iu};

/// A point or offset in board internal units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntVec2 {
    pub x: i64,
    pub y: i64,
}

impl IntVec2 {
    pub fn new(x: i64, y: i64) -> Self {
        IntVec2 { x, y }
    }
    pub fn from_mm(x_mm: f64, y_mm: f64) -> Self {
        IntVec2 {
            x: mm_to_iu(x_mm),
            y: mm_to_iu(y_mm),
        }
    }
    pub fn to_float(&self) -> FloatVec2 {
        FloatVec2 {
            x: iu_to_mm(self.x),
            y: iu_to_mm(self.y),
        }
    }
    /// Component-wise absolute distance to another point.
    pub fn abs_delta(&self, other: IntVec2) -> IntVec2 {
        IntVec2 {
            x: (self.x - other.x).abs(),
            y: (self.y - other.y).abs(),
        }
    }
}

impl Add for IntVec2 {
    type Output = IntVec2;

    fn add(self, other: IntVec2) -> IntVec2 {
        IntVec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
impl Sub for IntVec2 {
    type Output = IntVec2;

    fn sub(self, other: IntVec2) -> IntVec2 {
        IntVec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
impl Neg for IntVec2 {
    type Output = IntVec2;

    fn neg(self) -> IntVec2 {
        IntVec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A point in millimeters, used at the file and configuration boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FloatVec2 {
    pub x: f64,
    pub y: f64,
}

impl FloatVec2 {
    pub fn new(x: f64, y: f64) -> Self {
        FloatVec2 { x, y }
    }
    pub fn to_internal(&self) -> IntVec2 {
        IntVec2 {
            x: mm_to_iu(self.x),
            y: mm_to_iu(self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_delta_is_symmetric() {
        let a = IntVec2::from_mm(0.05, 1.0);
        let b = IntVec2::from_mm(0.0, 0.0);
        assert_eq!(a.abs_delta(b), b.abs_delta(a));
        assert_eq!(a.abs_delta(b), IntVec2::new(50_000, 1_000_000));
    }

    #[test]
    fn mm_constructor_matches_float_conversion() {
        let v = FloatVec2::new(12.5, -30.0);
        assert_eq!(v.to_internal(), IntVec2::from_mm(12.5, -30.0));
    }
}
