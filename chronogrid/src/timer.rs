// timer.rs - Run state and elapsed-time decomposition

use std::fmt;

/// Whether the stopwatch is accumulating time. Transitions only through
/// the start/pause toggle and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn toggled(self) -> Self {
        match self {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        }
    }
}

/// Elapsed milliseconds decomposed into the three displayed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub minutes: u64,
    pub seconds: u64,
    pub centiseconds: u64,
}

impl TimeParts {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            minutes: ms / 60_000,
            seconds: (ms % 60_000) / 1_000,
            centiseconds: (ms % 1_000) / 10,
        }
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:02}",
            self.minutes, self.seconds, self.centiseconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposition_brackets_the_input() {
        // minutes*60000 + seconds*1000 + centiseconds*10 <= ms < ... + 10
        let samples = [
            0, 1, 9, 10, 11, 999, 1_000, 1_009, 59_999, 60_000, 61_230, 599_990, 3_599_999,
            3_600_000, 7_265_430,
        ];
        for ms in samples {
            let parts = TimeParts::from_millis(ms);
            let floor = parts.minutes * 60_000 + parts.seconds * 1_000 + parts.centiseconds * 10;
            assert!(floor <= ms && ms < floor + 10, "ms={ms} parts={parts:?}");
            assert!(parts.seconds < 60);
            assert!(parts.centiseconds < 100);
        }
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeParts::from_millis(0).to_string(), "00:00.00");
        assert_eq!(TimeParts::from_millis(10).to_string(), "00:00.01");
        assert_eq!(TimeParts::from_millis(9_990).to_string(), "00:09.99");
        assert_eq!(TimeParts::from_millis(61_230).to_string(), "01:01.23");
        assert_eq!(TimeParts::from_millis(3_599_990).to_string(), "59:59.99");
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(RunState::Stopped.toggled(), RunState::Running);
        assert_eq!(RunState::Running.toggled(), RunState::Stopped);
        assert!(RunState::Running.is_running());
        assert!(!RunState::Stopped.is_running());
    }
}
