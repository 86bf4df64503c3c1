use std::collections::HashSet;

use tracing::{debug, info};

use shared::board::{BoardQuery, TrackSink};
use shared::connection::{ConnectionKey, RoutedConnection};
use shared::layer::CopperLayer;
use shared::net_index::NetIndex;
use shared::tolerances::{ToleranceConfig, ToleranceWindows};
use shared::units::{DEFAULT_TRACK_WIDTH_MM, mm_to_iu};

use crate::net_indexer::build_net_index;

/// What one routing pass did.
#[derive(Debug, Default)]
pub struct RouteReport {
    pub nets_processed: usize,
    pub connections: Vec<RoutedConnection>,
}

impl RouteReport {
    /// The run-global applied-connection set, reconstructed from the
    /// connection list.
    pub fn connection_keys(&self) -> HashSet<ConnectionKey> {
        self.connections.iter().map(|c| c.key.clone()).collect()
    }
}

/// Link proximity-qualified pad pairs with straight front-copper tracks.
///
/// Nets are processed independently in index order. Within a net, every
/// unordered pad pair is tested once: same-component pairs are skipped,
/// pairs already connected in this run are skipped, and the rest qualify
/// when they fall in either the tall narrow vertical window or the wide
/// short horizontal window. A qualifying pair gets exactly one track
/// between the two pad centers, at the fixed scripted-track width.
///
/// The connected set lives for one call and is shared across all nets,
/// so a pair connects at most once per run no matter which net reaches
/// it first. Tracks already on the board are deliberately not consulted:
/// running the pass twice duplicates tracks, and the width-based cleanup
/// utility is the sanctioned way to undo a pass.
pub fn route_proximate_pads(
    board: &mut impl TrackSink,
    index: &NetIndex,
    windows: &ToleranceWindows,
) -> RouteReport {
    let track_width = mm_to_iu(DEFAULT_TRACK_WIDTH_MM);
    let mut connected: HashSet<ConnectionKey> = HashSet::new();
    let mut report = RouteReport::default();

    for (net_name, pads) in &index.nets {
        debug!(net = %net_name.0, pads = pads.len(), "processing net");
        report.nets_processed += 1;

        for i in 0..pads.len() {
            for j in (i + 1)..pads.len() {
                let a = &pads[i];
                let b = &pads[j];

                // no links inside one footprint
                if a.component_ref == b.component_ref {
                    continue;
                }
                let key = ConnectionKey::new(a, b);
                if connected.contains(&key) {
                    continue;
                }

                let delta = a.position.abs_delta(b.position);
                let vertical = delta.x <= windows.x_vertical && delta.y <= windows.y_vertical;
                let horizontal = delta.x <= windows.x_horizontal && delta.y <= windows.y_horizontal;
                if !vertical && !horizontal {
                    continue;
                }

                connected.insert(key.clone());
                board.add_track(a.position, b.position, track_width, CopperLayer::Front);
                info!(
                    net = %net_name.0,
                    from = %a.endpoint_id(),
                    to = %b.endpoint_id(),
                    window = if vertical { "vertical" } else { "horizontal" },
                    "connected pads"
                );
                report.connections.push(RoutedConnection {
                    net_name: net_name.clone(),
                    key,
                    from: a.clone(),
                    to: b.clone(),
                });
            }
        }
    }
    report
}

/// Index then route in one call, with tolerances still in millimeters.
/// The routing path of the binary.
pub fn autoroute<B>(board: &mut B, config: &ToleranceConfig) -> RouteReport
where
    B: BoardQuery + TrackSink,
{
    let index = build_net_index(board);
    route_proximate_pads(board, &index, &config.to_windows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_boards::{led_strip_board, pad_at};
    use shared::memory_board::MemoryBoard;
    use shared::net_index::NetName;
    use shared::vec2::IntVec2;

    fn route(board: &mut MemoryBoard) -> RouteReport {
        autoroute(board, &ToleranceConfig::default())
    }

    #[test]
    fn vertical_window_qualifies() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("B1", "1", "N", IntVec2::from_mm(0.05, 1.0));
        let report = route(&mut board);
        assert_eq!(report.connections.len(), 1);
        assert_eq!(board.track_count(), 1);
    }

    #[test]
    fn horizontal_window_qualifies() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("B1", "1", "N", IntVec2::from_mm(2.0, 0.05));
        let report = route(&mut board);
        assert_eq!(report.connections.len(), 1);
    }

    #[test]
    fn pair_outside_both_windows_is_left_alone() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("B1", "1", "N", IntVec2::from_mm(2.0, 2.0));
        let report = route(&mut board);
        assert!(report.connections.is_empty());
        assert_eq!(board.track_count(), 0);
    }

    #[test]
    fn window_edges_are_inclusive() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("B1", "1", "N", IntVec2::from_mm(0.1, 2.5));
        let report = route(&mut board);
        assert_eq!(report.connections.len(), 1);
    }

    #[test]
    fn same_component_pads_never_link() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("A1", "2", "N", IntVec2::from_mm(0.0, 1.0));
        let report = route(&mut board);
        assert!(report.connections.is_empty());
    }

    #[test]
    fn pair_shared_by_two_nets_connects_once() {
        // defensive: one connected set spans all nets in a run
        let a = pad_at("A1", "1", 0.0, 0.0);
        let b = pad_at("B1", "1", 0.0, 1.0);
        let mut index = NetIndex::new();
        index
            .nets
            .insert(NetName("N1".into()), vec![a.clone(), b.clone()]);
        index.nets.insert(NetName("N2".into()), vec![a, b]);

        let mut board = MemoryBoard::new();
        let windows = ToleranceConfig::default().to_windows();
        let report = route_proximate_pads(&mut board, &index, &windows);
        assert_eq!(report.nets_processed, 2);
        assert_eq!(report.connections.len(), 1);
        assert_eq!(board.track_count(), 1);
    }

    #[test]
    fn rerunning_duplicates_tracks() {
        // documented non-idempotence: existing tracks are not consulted
        let mut board = led_strip_board();
        route(&mut board);
        let first = board.track_count();
        assert!(first > 0);
        route(&mut board);
        assert_eq!(board.track_count(), first * 2);
    }

    #[test]
    fn synthesized_tracks_use_fixed_width_and_layer() {
        let mut board = MemoryBoard::new();
        board.add_net("N");
        board.place_pad("A1", "1", "N", IntVec2::from_mm(0.0, 0.0));
        board.place_pad("B1", "1", "N", IntVec2::from_mm(0.0, 2.0));
        route(&mut board);
        let tracks = board.tracks();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].width, 250_000);
        assert_eq!(tracks[0].layer, CopperLayer::Front);
        assert_eq!(tracks[0].start, IntVec2::from_mm(0.0, 0.0));
        assert_eq!(tracks[0].end, IntVec2::from_mm(0.0, 2.0));
    }
}
