// controller.rs - Timer + grid state machine

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid::Grid;
use crate::timer::{RunState, TimeParts};
use crate::tuning::{TICK_MS, TRIGGER_INTERVAL_MS};

/// Owns the whole stopwatch state: elapsed time, run state, the boundary
/// counter, the cell grid, and the RNG driving activation passes.
///
/// All operations are total. Invalid transitions (ticking while stopped,
/// resetting twice) are silent no-ops rather than errors.
pub struct TimerGridController {
    elapsed_ms: u64,
    run_state: RunState,
    trigger_counter: u64,
    grid: Grid,
    rng: StdRng,
}

impl TimerGridController {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic activation stream for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            elapsed_ms: 0,
            run_state: RunState::Stopped,
            trigger_counter: 0,
            grid: Grid::new(),
            rng,
        }
    }

    /// One step of the 10ms cadence.
    pub fn tick(&mut self) {
        self.advance(TICK_MS);
    }

    /// Generalised tick for drivers that accumulate real elapsed time
    /// between frames. No-op while stopped.
    pub fn advance(&mut self, delta_ms: u64) {
        if !self.run_state.is_running() {
            return;
        }
        self.elapsed_ms += delta_ms;
        self.check_interval_boundary();
    }

    // At most one activation pass per call: when a jump crosses several
    // boundaries at once, only the newest one fires and the intermediate
    // boundaries are skipped, never replayed.
    fn check_interval_boundary(&mut self) {
        let current_interval = self.elapsed_ms / TRIGGER_INTERVAL_MS;
        if current_interval > self.trigger_counter {
            self.trigger_counter = current_interval;
            let activated = self.grid.activation_pass(&mut self.rng);
            log::debug!("boundary {current_interval}: {activated} cells newly activated");
        }
    }

    /// Start if stopped, pause if running. Pausing touches neither the
    /// elapsed time nor the grid.
    pub fn toggle_run_state(&mut self) {
        self.run_state = self.run_state.toggled();
        log::info!("run state -> {:?}", self.run_state);
    }

    /// Stop and return every field to its initial value.
    pub fn reset(&mut self) {
        self.run_state = RunState::Stopped;
        self.elapsed_ms = 0;
        self.trigger_counter = 0;
        self.grid.clear();
        log::info!("reset");
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn time_parts(&self) -> TimeParts {
        TimeParts::from_millis(self.elapsed_ms)
    }

    pub fn trigger_counter(&self) -> u64 {
        self.trigger_counter
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Default for TimerGridController {
    fn default() -> Self {
        Self::new()
    }
}
