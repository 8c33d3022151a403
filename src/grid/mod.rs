//! Binary occupancy grid implementation.
//!
//! - [`GridStorage`]: row-major cell storage with coordinate conversion
//! - [`CellState`]: free/occupied cell state

mod storage;

pub use storage::{CellState, GridStorage};
