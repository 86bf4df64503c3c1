use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::pad::PadDescriptor;

/// Name of an electrical net. Always non-empty inside a [`NetIndex`];
/// the indexer drops unnamed nets before this type is ever constructed.
#[derive(Debug, Clone, PartialEq, Hash, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NetName(pub String);

/// Net name to member pads, in net-catalog order. Built once per run by
/// the indexer and read-only afterwards.
///
/// Invariants: every descriptor under a net actually reports that net's
/// name, and no net maps to an empty pad list.
#[derive(Debug, Default)]
pub struct NetIndex {
    pub nets: IndexMap<NetName, Vec<PadDescriptor>>,
}

impl NetIndex {
    pub fn new() -> Self {
        NetIndex {
            nets: IndexMap::new(),
        }
    }

    pub fn pad_count(&self) -> usize {
        self.nets.values().map(|pads| pads.len()).sum()
    }
}
