//! Fixed-period animation clock.
//!
//! egui has no timers, so the periodic tick is modelled as a recurring task
//! that is polled from `show`: the driver remembers when it last ticked and
//! converts elapsed host time into a whole number of due ticks. Stopping is
//! synchronous and leaves nothing scheduled.

use std::time::Duration;

/// Upper bound on ticks replayed after a stalled frame.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Cancellable recurring tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    running: bool,
    /// Tick period in seconds
    interval: f64,
    /// Host time of the last accounted tick; `None` until the first poll
    last_tick: Option<f64>,
}

impl AnimationDriver {
    /// Creates a stopped driver with the given tick period.
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval: interval.as_secs_f64().max(f64::EPSILON),
            last_tick: None,
        }
    }

    /// Returns true while ticks are being scheduled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts ticking. No-op if already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_tick = None;
        }
    }

    /// Stops ticking. No-op if already stopped.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.last_tick = None;
        }
    }

    /// Number of ticks that became due by host time `now` (seconds).
    ///
    /// The first poll after `start` only records the baseline. At most
    /// [`MAX_CATCH_UP_TICKS`] are returned; beyond that the baseline jumps
    /// to `now`.
    pub fn due_ticks(&mut self, now: f64) -> u32 {
        if !self.running {
            return 0;
        }

        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return 0;
        };

        let elapsed = (now - last).max(0.0);
        let due = (elapsed / self.interval).floor();
        if due >= f64::from(MAX_CATCH_UP_TICKS) {
            self.last_tick = Some(now);
            return MAX_CATCH_UP_TICKS;
        }

        let due = due as u32;
        self.last_tick = Some(last + f64::from(due) * self.interval);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(Duration::from_millis(16))
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut driver = driver();
        driver.stop();
        assert!(!driver.is_running());

        driver.start();
        driver.due_ticks(1.0);
        driver.start();
        assert!(driver.is_running());
        // A second start must not reset the baseline.
        assert_eq!(driver.due_ticks(1.05), 3);

        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn test_stopped_driver_has_no_ticks() {
        let mut driver = driver();
        assert_eq!(driver.due_ticks(5.0), 0);
        driver.start();
        driver.stop();
        assert_eq!(driver.due_ticks(10.0), 0);
    }

    #[test]
    fn test_first_poll_sets_baseline() {
        let mut driver = driver();
        driver.start();
        assert_eq!(driver.due_ticks(2.0), 0);
        assert_eq!(driver.due_ticks(2.01), 0);
        assert_eq!(driver.due_ticks(2.02), 1);
    }

    #[test]
    fn test_fractional_time_carries_over() {
        let mut driver = driver();
        driver.start();
        driver.due_ticks(1.0);
        assert_eq!(driver.due_ticks(1.05), 3);
        assert_eq!(driver.due_ticks(1.06), 0);
        assert_eq!(driver.due_ticks(1.066), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut driver = driver();
        driver.start();
        driver.due_ticks(0.0);
        assert_eq!(driver.due_ticks(10.0), MAX_CATCH_UP_TICKS);
        assert_eq!(driver.due_ticks(10.001), 0);
    }

    #[test]
    fn test_restart_resets_baseline() {
        let mut driver = driver();
        driver.start();
        driver.due_ticks(0.0);
        driver.stop();
        driver.start();
        assert_eq!(driver.due_ticks(3.0), 0);
    }
}
