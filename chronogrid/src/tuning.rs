// tuning.rs - Compile-time configuration

pub const GRID_ROWS: usize = 25;                      // Grid height in cells
pub const GRID_COLS: usize = 25;                      // Grid width in cells
pub const GRID_SIZE: usize = GRID_ROWS * GRID_COLS;   // 625 cells total

pub const TICK_MS: u64 = 10;                          // Timer cadence
pub const TRIGGER_INTERVAL_MS: u64 = 10_000;          // 10 seconds per activation pass
pub const ACTIVATION_CHANCE: f64 = 0.05;              // 5% chance per Base cell per pass
