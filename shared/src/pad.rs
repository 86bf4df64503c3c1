use serde::{Deserialize, Serialize};

use crate::vec2::IntVec2;

/// Reference designator of one placed component, e.g. "LED1".
#[derive(Debug, Clone, PartialEq, Hash, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentRef(pub String);

/// Pad number within its component, e.g. "1" or "A3". Unique per
/// component, not per board.
#[derive(Debug, Clone, PartialEq, Hash, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PadNumber(pub String);

/// One pad as seen by the router: where it is and who owns it.
/// Built during indexing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadDescriptor {
    pub position: IntVec2,
    pub component_ref: ComponentRef,
    pub pad_number: PadNumber,
}

impl PadDescriptor {
    /// Board-unique endpoint id, component reference concatenated with
    /// the pad number. Feeds [`crate::connection::ConnectionKey`].
    pub fn endpoint_id(&self) -> String {
        format!("{}{}", self.component_ref.0, self.pad_number.0)
    }
}
