//! Board description writer, the inverse of [`crate::board_file`].

use std::fmt::Write;

use shared::board::BoardQuery;
use shared::memory_board::MemoryBoard;
use shared::units::iu_to_mm;
use shared::vec2::IntVec2;

fn mm(iu: i64) -> String {
    format!("{:.6}", iu_to_mm(iu))
}

fn point(p: IntVec2) -> String {
    format!("{} {}", mm(p.x), mm(p.y))
}

/// Render the board back to its file form, synthesized tracks included.
pub fn write_board(board: &MemoryBoard) -> String {
    let mut out = String::new();
    writeln!(out, "(board").unwrap();
    for net in board.net_names() {
        writeln!(out, "  (net \"{net}\")").unwrap();
    }
    for footprint in board.footprints() {
        writeln!(out, "  (footprint \"{}\"", footprint.reference.0).unwrap();
        for pad in &footprint.pads {
            writeln!(
                out,
                "    (pad \"{}\" (net \"{}\") (at {}))",
                pad.number.0,
                pad.net_name,
                point(pad.position)
            )
            .unwrap();
        }
        writeln!(out, "  )").unwrap();
    }
    for track in board.tracks() {
        writeln!(
            out,
            "  (track (start {}) (end {}) (width {}) (layer {}))",
            point(track.start),
            point(track.end),
            mm(track.width),
            track.layer.as_str()
        )
        .unwrap();
    }
    writeln!(out, ")").unwrap();
    out
}
