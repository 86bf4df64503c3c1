use crate::net_index::NetName;
use crate::pad::PadDescriptor;

/// Order-independent identifier of one pad pair: the two endpoint ids,
/// sorted. `ConnectionKey::new(a, b) == ConnectionKey::new(b, a)` holds
/// for any two pads, which makes a plain `HashSet<ConnectionKey>` the
/// whole deduplication story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey {
    lo: String,
    hi: String,
}

impl ConnectionKey {
    pub fn new(a: &PadDescriptor, b: &PadDescriptor) -> Self {
        let ka = a.endpoint_id();
        let kb = b.endpoint_id();
        if ka <= kb {
            ConnectionKey { lo: ka, hi: kb }
        } else {
            ConnectionKey { lo: kb, hi: ka }
        }
    }
}

/// One connection the router actually made, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct RoutedConnection {
    pub net_name: NetName,
    pub key: ConnectionKey,
    pub from: PadDescriptor,
    pub to: PadDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::{ComponentRef, PadNumber};
    use crate::vec2::IntVec2;

    fn pad(component: &str, number: &str) -> PadDescriptor {
        PadDescriptor {
            position: IntVec2::default(),
            component_ref: ComponentRef(component.into()),
            pad_number: PadNumber(number.into()),
        }
    }

    #[test]
    fn key_is_order_independent() {
        let a = pad("LED1", "2");
        let b = pad("R4", "1");
        assert_eq!(ConnectionKey::new(&a, &b), ConnectionKey::new(&b, &a));
    }

    #[test]
    fn distinct_pairs_get_distinct_keys() {
        let a = pad("LED1", "1");
        let b = pad("LED1", "2");
        let c = pad("LED2", "1");
        assert_ne!(ConnectionKey::new(&a, &c), ConnectionKey::new(&b, &c));
    }
}
