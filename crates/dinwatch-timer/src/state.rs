use dinwatch_foundation::SharedClock;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Expired,
    Terminated,
}

/// Countdown timer state machine.
///
/// `end >= start` always holds. `remaining` is derived from the clock and
/// never mutates the endpoints; `trigger` is the only operation that moves
/// `end`, and re-triggering never stacks beyond one original duration.
pub struct Countdown {
    clock: SharedClock,
    original: Duration,
    start: Instant,
    end: Instant,
    state: CountdownState,
}

impl Countdown {
    /// Start a countdown of `original` length at the clock's current time.
    pub fn start(clock: SharedClock, original: Duration) -> Self {
        let start = clock.now();
        Self {
            clock,
            original,
            start,
            end: start + original,
            state: CountdownState::Running,
        }
    }

    /// Time left until expiry; zero once the end time has passed.
    pub fn remaining(&self) -> Duration {
        self.end.saturating_duration_since(self.clock.now())
    }

    /// Recompute remaining time, advancing to `Expired` when it hits zero.
    pub fn tick(&mut self) -> CountdownState {
        if self.state == CountdownState::Running && self.remaining() == Duration::ZERO {
            tracing::info!(
                "Countdown expired after {:?}",
                self.clock.now().duration_since(self.start)
            );
            self.state = CountdownState::Expired;
        }
        self.state
    }

    /// Extend the end time to a full original duration from now.
    /// No-op outside `Running`.
    pub fn trigger(&mut self) {
        if self.state != CountdownState::Running {
            return;
        }
        self.end = self.clock.now() + self.original;
        tracing::debug!("Countdown reset to {:?}", self.original);
    }

    /// External quit request; terminal regardless of remaining time.
    pub fn quit(&mut self) {
        if self.state == CountdownState::Running {
            tracing::info!("Countdown terminated by quit request");
            self.state = CountdownState::Terminated;
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != CountdownState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinwatch_foundation::TestClock;
    use std::sync::Arc;

    fn countdown_at(original_secs: u64) -> (Arc<TestClock>, Countdown) {
        let clock = Arc::new(TestClock::new());
        let countdown = Countdown::start(clock.clone(), Duration::from_secs(original_secs));
        (clock, countdown)
    }

    #[test]
    fn test_initial_state() {
        let (_clock, countdown) = countdown_at(5);
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.remaining(), Duration::from_secs(5));
        assert!(!countdown.is_finished());
    }

    #[test]
    fn test_tick_keeps_running_before_expiry() {
        let (clock, mut countdown) = countdown_at(5);

        clock.advance(Duration::from_millis(4_999));
        assert_eq!(countdown.tick(), CountdownState::Running);
        assert_eq!(countdown.remaining(), Duration::from_millis(1));
    }

    #[test]
    fn test_expires_exactly_when_duration_elapses() {
        let (clock, mut countdown) = countdown_at(5);

        clock.advance(Duration::from_secs(5));
        assert_eq!(countdown.tick(), CountdownState::Expired);
        assert_eq!(countdown.remaining(), Duration::ZERO);
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_trigger_restores_full_duration() {
        let (clock, mut countdown) = countdown_at(10);

        clock.advance(Duration::from_secs(8));
        assert_eq!(countdown.remaining(), Duration::from_secs(2));

        countdown.trigger();
        assert_eq!(countdown.remaining(), Duration::from_secs(10));
    }

    #[test]
    fn test_trigger_at_8s_expires_at_18s() {
        let (clock, mut countdown) = countdown_at(10);

        clock.advance(Duration::from_secs(8));
        countdown.trigger();

        clock.advance(Duration::from_millis(9_999));
        assert_eq!(countdown.tick(), CountdownState::Running);

        clock.advance(Duration::from_millis(1));
        assert_eq!(countdown.tick(), CountdownState::Expired);
    }

    #[test]
    fn test_retrigger_does_not_stack() {
        let (clock, mut countdown) = countdown_at(10);

        clock.advance(Duration::from_secs(1));
        countdown.trigger();
        countdown.trigger();
        assert_eq!(countdown.remaining(), Duration::from_secs(10));
    }

    #[test]
    fn test_trigger_after_expiry_is_a_no_op() {
        let (clock, mut countdown) = countdown_at(3);

        clock.advance(Duration::from_secs(3));
        assert_eq!(countdown.tick(), CountdownState::Expired);

        countdown.trigger();
        assert_eq!(countdown.state(), CountdownState::Expired);
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_quit_terminates_regardless_of_remaining() {
        let (clock, mut countdown) = countdown_at(60);

        clock.advance(Duration::from_secs(1));
        countdown.quit();
        assert_eq!(countdown.state(), CountdownState::Terminated);
        assert!(countdown.is_finished());

        // Terminal: neither tick nor trigger moves the state.
        countdown.trigger();
        assert_eq!(countdown.tick(), CountdownState::Terminated);
    }
}
