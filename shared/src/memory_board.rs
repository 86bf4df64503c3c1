use crate::board::{BoardQuery, PadRecord, TrackId, TrackRecord, TrackSink};
use crate::layer::CopperLayer;
use crate::pad::{ComponentRef, PadNumber};
use crate::vec2::IntVec2;

/// One pad of an in-memory footprint.
#[derive(Debug, Clone)]
pub struct MemoryPad {
    pub number: PadNumber,
    pub net_name: String,
    pub position: IntVec2,
}

/// One placed component with its pads.
#[derive(Debug, Clone)]
pub struct MemoryFootprint {
    pub reference: ComponentRef,
    pub pads: Vec<MemoryPad>,
}

/// In-memory board implementing both capability surfaces. Backs the
/// standalone binary (filled by the parser crate) and every test that
/// needs a board without a CAD host behind it.
#[derive(Debug, Default)]
pub struct MemoryBoard {
    net_catalog: Vec<String>,
    footprints: Vec<MemoryFootprint>,
    tracks: Vec<TrackRecord>,
    next_track_id: usize,
    refresh_requests: usize,
}

impl MemoryBoard {
    pub fn new() -> Self {
        MemoryBoard::default()
    }

    /// Register a net in the catalog. Catalog order is preserved and
    /// becomes the index iteration order.
    pub fn add_net(&mut self, name: impl Into<String>) {
        self.net_catalog.push(name.into());
    }

    pub fn add_footprint(&mut self, footprint: MemoryFootprint) {
        self.footprints.push(footprint);
    }

    /// Convenience for tests and builders: append one pad to the named
    /// footprint, creating the footprint on first use.
    pub fn place_pad(
        &mut self,
        reference: &str,
        number: &str,
        net_name: &str,
        position: IntVec2,
    ) {
        let pad = MemoryPad {
            number: PadNumber(number.into()),
            net_name: net_name.into(),
            position,
        };
        if let Some(footprint) = self
            .footprints
            .iter_mut()
            .find(|f| f.reference.0 == reference)
        {
            footprint.pads.push(pad);
        } else {
            self.footprints.push(MemoryFootprint {
                reference: ComponentRef(reference.into()),
                pads: vec![pad],
            });
        }
    }

    pub fn footprints(&self) -> &[MemoryFootprint] {
        &self.footprints
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// How many times a view refresh was requested. Only diagnostics
    /// and tests care.
    pub fn refresh_requests(&self) -> usize {
        self.refresh_requests
    }
}

impl BoardQuery for MemoryBoard {
    fn net_names(&self) -> Vec<String> {
        self.net_catalog.clone()
    }

    fn pads(&self) -> Vec<PadRecord> {
        self.footprints
            .iter()
            .flat_map(|footprint| {
                footprint.pads.iter().map(|pad| PadRecord {
                    component_ref: footprint.reference.clone(),
                    pad_number: pad.number.clone(),
                    net_name: pad.net_name.clone(),
                    position: pad.position,
                })
            })
            .collect()
    }

    fn tracks(&self) -> Vec<TrackRecord> {
        self.tracks.clone()
    }
}

impl TrackSink for MemoryBoard {
    fn add_track(
        &mut self,
        start: IntVec2,
        end: IntVec2,
        width: i64,
        layer: CopperLayer,
    ) -> TrackId {
        let id = TrackId(self.next_track_id);
        self.next_track_id += 1;
        self.tracks.push(TrackRecord {
            id,
            start,
            end,
            width,
            layer,
        });
        id
    }

    fn remove_track(&mut self, id: TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|track| track.id != id);
        self.tracks.len() != before
    }

    fn request_refresh(&mut self) {
        self.refresh_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::mm_to_iu;

    #[test]
    fn pads_enumerate_in_component_then_pad_order() {
        let mut board = MemoryBoard::new();
        board.place_pad("LED1", "1", "N1", IntVec2::new(0, 0));
        board.place_pad("R1", "1", "N1", IntVec2::new(5, 0));
        board.place_pad("LED1", "2", "N2", IntVec2::new(0, 9));
        let pads = board.pads();
        let order: Vec<String> = pads.iter().map(|p| p.component_ref.0.clone()).collect();
        assert_eq!(order, ["LED1", "LED1", "R1"]);
    }

    #[test]
    fn removing_a_track_twice_reports_false() {
        let mut board = MemoryBoard::new();
        let id = board.add_track(
            IntVec2::new(0, 0),
            IntVec2::new(0, 100),
            mm_to_iu(0.25),
            CopperLayer::Front,
        );
        assert!(board.remove_track(id));
        assert!(!board.remove_track(id));
        assert_eq!(board.track_count(), 0);
    }

    #[test]
    fn track_ids_stay_unique_after_removal() {
        let mut board = MemoryBoard::new();
        let a = board.add_track(
            IntVec2::new(0, 0),
            IntVec2::new(1, 0),
            100,
            CopperLayer::Front,
        );
        board.remove_track(a);
        let b = board.add_track(
            IntVec2::new(0, 0),
            IntVec2::new(2, 0),
            100,
            CopperLayer::Front,
        );
        assert_ne!(a, b);
    }
}
