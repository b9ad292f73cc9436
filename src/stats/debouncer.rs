use std::time::{Duration, Instant};

/// Delays live recounts until typing pauses
///
/// A zero delay disables debouncing: callers recount synchronously and never
/// schedule anything.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last edit that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether a recount is waiting for the delay to expire
    pending_execution: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input_time: None,
            pending_execution: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    pub fn schedule_execution(&mut self) {
        self.schedule_execution_at(Instant::now());
    }

    pub fn should_execute(&self) -> bool {
        self.should_execute_at(Instant::now())
    }

    fn schedule_execution_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending_execution = true;
    }

    fn should_execute_at(&self, now: Instant) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.delay,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
