//! Stats module for the caller side of text measurement
//!
//! Holds the currently displayed statistics, decides when they are
//! recomputed (live or manual counting, optional debounce), and renders the
//! stats grid.

mod debouncer;
mod stats_render;
mod stats_state;

pub use debouncer::Debouncer;
pub use stats_render::{GRID_HEIGHT, render_grid};
pub use stats_state::{StatsState, update_stats_from_app};
