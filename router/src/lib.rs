pub mod cleanup;
pub mod net_indexer;
pub mod proximity;
pub mod sample_boards;

pub use cleanup::remove_tracks_by_width;
pub use net_indexer::build_net_index;
pub use proximity::{RouteReport, autoroute, route_proximate_pads};
