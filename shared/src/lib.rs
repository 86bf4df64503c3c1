pub mod board;
pub mod connection;
pub mod layer;
pub mod memory_board;
pub mod net_index;
pub mod pad;
pub mod tolerances;
pub mod units;
pub mod vec2;
