use tracing::info;

use shared::board::{BoardQuery, TrackId, TrackSink};
use shared::units::mm_to_iu;

/// Remove every track whose width exactly matches `width_mm`.
///
/// Width is the sole filter, which is intentionally coarse: scripted
/// tracks all share one distinguishing width, so this is the undo path
/// for a routing pass. Triggers a view refresh and returns the number
/// of tracks removed. Not part of the routing flow.
pub fn remove_tracks_by_width<B>(board: &mut B, width_mm: f64) -> usize
where
    B: BoardQuery + TrackSink,
{
    let width_iu = mm_to_iu(width_mm);
    let doomed: Vec<TrackId> = board
        .tracks()
        .into_iter()
        .filter(|track| track.width == width_iu)
        .map(|track| track.id)
        .collect();
    for id in &doomed {
        board.remove_track(*id);
    }
    board.request_refresh();
    info!(count = doomed.len(), width_mm, "removed tracks by width");
    doomed.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::layer::CopperLayer;
    use shared::memory_board::MemoryBoard;
    use shared::vec2::IntVec2;

    fn board_with_widths(widths_mm: &[f64]) -> MemoryBoard {
        let mut board = MemoryBoard::new();
        for (i, w) in widths_mm.iter().enumerate() {
            board.add_track(
                IntVec2::new(0, i as i64),
                IntVec2::new(1000, i as i64),
                mm_to_iu(*w),
                CopperLayer::Front,
            );
        }
        board
    }

    #[test]
    fn removes_exactly_the_matching_width() {
        let mut board = board_with_widths(&[0.25, 0.5, 0.25, 0.3]);
        let removed = remove_tracks_by_width(&mut board, 0.25);
        assert_eq!(removed, 2);
        assert_eq!(board.track_count(), 2);
        assert!(board.tracks().iter().all(|t| t.width != mm_to_iu(0.25)));
    }

    #[test]
    fn zero_matches_removes_nothing() {
        let mut board = board_with_widths(&[0.5, 0.3]);
        let removed = remove_tracks_by_width(&mut board, 0.25);
        assert_eq!(removed, 0);
        assert_eq!(board.track_count(), 2);
        assert_eq!(board.refresh_requests(), 1);
    }
}
