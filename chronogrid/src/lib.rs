// lib.rs - Stopwatch core with a 25x25 activation grid
//
// Pure state-transition logic, no UI dependencies. The display crate
// observes this state and paints it.

pub mod controller;
pub mod grid;
pub mod timer;
pub mod tuning;

pub use controller::TimerGridController;
pub use grid::{CellState, Grid};
pub use timer::{RunState, TimeParts};
