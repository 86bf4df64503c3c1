use serde::{Deserialize, Serialize};

/// Copper layer a track lives on. Routing only ever targets the front
/// layer; the back layer exists so board files carrying manually drawn
/// tracks survive a read/write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopperLayer {
    Front,
    Back,
}

impl CopperLayer {
    const FRONT_STR: &'static str = "F.Cu";
    const BACK_STR: &'static str = "B.Cu";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => Self::FRONT_STR,
            Self::Back => Self::BACK_STR,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::FRONT_STR => Some(Self::Front),
            Self::BACK_STR => Some(Self::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_names_round_trip() {
        for layer in [CopperLayer::Front, CopperLayer::Back] {
            assert_eq!(CopperLayer::from_name(layer.as_str()), Some(layer));
        }
        assert_eq!(CopperLayer::from_name("In1.Cu"), None);
    }
}
