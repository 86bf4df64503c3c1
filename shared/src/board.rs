//! Capability traits over the host board.
//!
//! The routing code never talks to a concrete CAD object model; it sees
//! a read surface ([`BoardQuery`]) and a write surface ([`TrackSink`]).
//! [`crate::memory_board::MemoryBoard`] implements both for the
//! standalone tool and for tests; a live-host adapter would implement
//! the same pair.

use thiserror::Error;

use crate::layer::CopperLayer;
use crate::pad::{ComponentRef, PadNumber};
use crate::vec2::IntVec2;

/// Board-assigned identity of one track, used to remove it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

/// One pad as the host enumerates it. `net_name` may be empty for pads
/// on no net; the indexer filters those out.
#[derive(Debug, Clone)]
pub struct PadRecord {
    pub component_ref: ComponentRef,
    pub pad_number: PadNumber,
    pub net_name: String,
    pub position: IntVec2,
}

/// One track as the host stores it. Width and coordinates are internal
/// units; width equality is exact integer equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: TrackId,
    pub start: IntVec2,
    pub end: IntVec2,
    pub width: i64,
    pub layer: CopperLayer,
}

/// Read surface of the board.
pub trait BoardQuery {
    /// Net catalog names in catalog order. May contain empty names.
    fn net_names(&self) -> Vec<String>;
    /// Every pad on the board, in component-then-pad enumeration order.
    fn pads(&self) -> Vec<PadRecord>;
    /// Every track currently on the board.
    fn tracks(&self) -> Vec<TrackRecord>;
}

/// Write surface of the board.
pub trait TrackSink {
    /// Add one straight track and hand back its id. No validation of
    /// coincident endpoints and no DRC; the caller owns those concerns.
    fn add_track(&mut self, start: IntVec2, end: IntVec2, width: i64, layer: CopperLayer)
    -> TrackId;
    /// Remove a track by id. Returns false when the id is unknown.
    fn remove_track(&mut self, id: TrackId) -> bool;
    /// Ask the host to redraw. A no-op for boards without a view.
    fn request_refresh(&mut self);
}

#[derive(Debug, Error)]
pub enum BoardError {
    /// The entry point could not obtain a usable board. Raised before
    /// any board state is read or touched.
    #[error("no usable board: {0}")]
    NoActiveBoard(String),
}
