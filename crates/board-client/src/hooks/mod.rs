//! Custom hooks.

mod use_board_state;

pub use use_board_state::{BoardStateHandle, use_board_state};
