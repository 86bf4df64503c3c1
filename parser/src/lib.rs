pub mod board_file;
pub mod s_expr;
pub mod write_board;

pub use board_file::{ParseError, parse_board};
pub use write_board::write_board;
