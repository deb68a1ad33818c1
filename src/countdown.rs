use chrono::{DateTime, Duration, Local};

pub const TICK_INTERVAL_MS: i64 = 1000;

/// Copy of the counter handed to the dial each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSnapshot {
    pub total: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counted { remaining: u32 },
    Finished,
}

/// A decrementing counter with one cancellable repeating tick.
/// `next_tick` is the armed timer; `None` means stopped.
#[derive(Debug)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    exercise: Option<usize>,
    next_tick: Option<DateTime<Local>>,
    default_seconds: u32,
}

impl Countdown {
    pub fn new(default_seconds: u32) -> Self {
        Countdown {
            total: 0,
            remaining: 0,
            exercise: None,
            next_tick: None,
            default_seconds,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            total: self.total,
            remaining: self.remaining,
        }
    }

    pub fn active_exercise(&self) -> Option<usize> {
        self.exercise
    }

    pub fn elapsed(&self) -> u32 {
        self.total - self.remaining
    }

    /// Stops and loads a fresh duration.
    pub fn load(&mut self, seconds: u32, exercise: Option<usize>) {
        self.stop();
        self.total = seconds;
        self.remaining = seconds;
        self.exercise = exercise;
    }

    /// Returns false when the tick was already armed.
    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        if self.is_running() {
            return false;
        }
        if self.remaining == 0 {
            self.total = self.default_seconds;
            self.remaining = self.default_seconds;
        }
        self.next_tick = Some(now + interval());
        true
    }

    /// Returns false when nothing was running.
    pub fn stop(&mut self) -> bool {
        self.next_tick.take().is_some()
    }

    pub fn reset(&mut self) {
        self.stop();
        self.total = 0;
        self.remaining = 0;
        self.exercise = None;
    }

    /// Fires at most one tick per call. Missed ticks are dropped and the
    /// next one is armed a full interval after `now`.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<Tick> {
        let due = self.next_tick?;
        if now < due {
            return None;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
            self.next_tick = Some(now + interval());
            Some(Tick::Counted {
                remaining: self.remaining,
            })
        } else {
            self.next_tick = None;
            self.exercise = None;
            Some(Tick::Finished)
        }
    }

    pub fn until_next_tick(&self, now: DateTime<Local>) -> Option<std::time::Duration> {
        let due = self.next_tick?;
        Some((due - now).to_std().unwrap_or(std::time::Duration::ZERO))
    }
}

fn interval() -> Duration {
    Duration::milliseconds(TICK_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: i64) -> Duration {
        Duration::seconds(n)
    }

    #[test]
    fn start_from_zero_seeds_default_duration() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        assert!(countdown.start(now));
        assert!(countdown.is_running());
        assert_eq!(countdown.snapshot(), TimerSnapshot { total: 300, remaining: 300 });
    }

    #[test]
    fn second_start_is_a_noop() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(60, None);
        assert!(countdown.start(now));
        assert!(!countdown.start(now + secs(0)));

        // Only one tick armed: a single poll per interval decrements once.
        assert_eq!(countdown.poll(now + secs(1)), Some(Tick::Counted { remaining: 59 }));
        assert_eq!(countdown.poll(now + secs(1)), None);
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(10, None);
        countdown.start(now);
        assert_eq!(countdown.poll(now + Duration::milliseconds(999)), None);
        assert_eq!(countdown.snapshot().remaining, 10);
        assert!(countdown.until_next_tick(now).is_some());
    }

    #[test]
    fn missed_ticks_are_not_caught_up() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(10, None);
        countdown.start(now);
        assert_eq!(countdown.poll(now + secs(5)), Some(Tick::Counted { remaining: 9 }));
        assert_eq!(countdown.poll(now + secs(5)), None);
        assert_eq!(countdown.poll(now + secs(6)), Some(Tick::Counted { remaining: 8 }));
    }

    #[test]
    fn stop_pauses_and_start_resumes() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(10, None);
        countdown.start(now);
        countdown.poll(now + secs(1));
        countdown.poll(now + secs(2));
        assert!(countdown.stop());
        assert!(!countdown.stop());
        assert_eq!(countdown.poll(now + secs(10)), None);
        assert_eq!(countdown.snapshot(), TimerSnapshot { total: 10, remaining: 8 });
        assert_eq!(countdown.until_next_tick(now), None);

        let later = now + secs(30);
        assert!(countdown.start(later));
        assert_eq!(countdown.snapshot().remaining, 8);
        assert_eq!(countdown.poll(later + secs(1)), Some(Tick::Counted { remaining: 7 }));
    }

    #[test]
    fn reset_clears_everything() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(12, Some(0));
        countdown.start(now);
        countdown.reset();
        assert!(!countdown.is_running());
        assert_eq!(countdown.snapshot(), TimerSnapshot::default());
        assert_eq!(countdown.active_exercise(), None);
        assert!(!countdown.stop());
    }

    #[test]
    fn finishes_on_the_tick_after_reaching_zero() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.load(2, Some(3));
        countdown.start(now);
        assert_eq!(countdown.poll(now + secs(1)), Some(Tick::Counted { remaining: 1 }));
        assert_eq!(countdown.poll(now + secs(2)), Some(Tick::Counted { remaining: 0 }));
        assert_eq!(countdown.active_exercise(), Some(3));
        assert_eq!(countdown.elapsed(), 2);

        assert_eq!(countdown.poll(now + secs(3)), Some(Tick::Finished));
        assert!(!countdown.is_running());
        assert_eq!(countdown.active_exercise(), None);
        assert_eq!(countdown.poll(now + secs(4)), None);
    }

    #[test]
    fn load_stops_a_running_countdown() {
        let now = Local::now();
        let mut countdown = Countdown::new(300);
        countdown.start(now);
        countdown.load(120, None);
        assert!(!countdown.is_running());
        assert_eq!(countdown.snapshot(), TimerSnapshot { total: 120, remaining: 120 });
    }
}
