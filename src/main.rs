//! Standalone entry point: load a board file, link proximity-qualified
//! pads with straight tracks (or clear a previous pass by width), and
//! write the board back.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parser::{parse_board, write_board};
use router::{autoroute, remove_tracks_by_width};
use shared::board::BoardError;
use shared::memory_board::MemoryBoard;
use shared::tolerances::ToleranceConfig;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    /// Board description file, rewritten in place.
    board_file: PathBuf,
    /// Remove every track with this width instead of routing.
    #[arg(long, value_name = "MM")]
    clear_width: Option<f64>,
}

/// The "no active board" precondition: anything that keeps us from a
/// parsed board aborts here, before any board state is touched.
fn load_board(path: &Path) -> Result<MemoryBoard, BoardError> {
    let text = fs::read_to_string(path).map_err(|e| {
        BoardError::NoActiveBoard(format!("cannot read '{}': {e}", path.display()))
    })?;
    parse_board(&text).map_err(|e| {
        BoardError::NoActiveBoard(format!("'{}' is not a usable board: {e}", path.display()))
    })
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut board = load_board(&cli.board_file)?;
    match cli.clear_width {
        Some(width_mm) => {
            let removed = remove_tracks_by_width(&mut board, width_mm);
            info!(removed, width_mm, "cleanup complete");
        }
        None => {
            let report = autoroute(&mut board, &ToleranceConfig::default());
            info!(
                nets = report.nets_processed,
                connections = report.connections.len(),
                "routing pass complete"
            );
        }
    }
    fs::write(&cli.board_file, write_board(&board))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
