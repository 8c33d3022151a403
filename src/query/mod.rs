//! Robot-clearance queries against the obstacle grid.
//!
//! - [`ClearanceField`]: precomputed distance-to-obstacle field,
//!   giving the planner O(1) collision checks
//! - [`ClearanceChecker`]: exact per-query disc footprint checks

mod checker;
mod clearance;

pub use checker::ClearanceChecker;
pub use clearance::{ClearanceField, OCTILE_RATIO};
