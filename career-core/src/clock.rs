//! Clock injection for the live "Today" marker.

use std::time::Duration;

use chrono::Local;

use crate::{CalendarDate, ViewState};

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_datelike(&Local::now())
    }
}

/// Clock frozen at one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Periodic refresh of [`ViewState::current_time`].
///
/// The host owns the timer and calls [`ClockSubscription::tick`] on each
/// interval; ticks outside `start`/`stop` are ignored.
#[derive(Debug, Clone)]
pub struct ClockSubscription<C> {
    clock: C,
    interval: Duration,
    running: bool,
}

impl<C: Clock> ClockSubscription<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin refreshing; reads the clock immediately.
    pub fn start(&mut self, view: &mut ViewState) -> bool {
        self.running = true;
        view.set_current_time(self.clock.today())
    }

    pub fn tick(&self, view: &mut ViewState) -> bool {
        if !self.running {
            return false;
        }
        view.set_current_time(self.clock.today())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::TimelineConfig;

    struct SteppingClock {
        day: Cell<u32>,
    }

    impl Clock for SteppingClock {
        fn today(&self) -> CalendarDate {
            let day = self.day.get();
            self.day.set(day + 1);
            CalendarDate::new(2024, 6, day)
        }
    }

    fn view() -> ViewState {
        ViewState::new(&TimelineConfig::default(), CalendarDate::new(2000, 1, 1))
    }

    #[test]
    fn start_reads_clock_immediately() {
        let mut view = view();
        let mut sub = ClockSubscription::new(
            FixedClock(CalendarDate::new(2024, 6, 15)),
            Duration::from_secs(60),
        );
        assert!(sub.start(&mut view));
        assert_eq!(view.current_time, CalendarDate::new(2024, 6, 15));
        assert!(sub.is_running());
    }

    #[test]
    fn ticks_refresh_while_running() {
        let mut view = view();
        let clock = SteppingClock { day: Cell::new(1) };
        let mut sub = ClockSubscription::new(&clock, Duration::from_secs(60));
        sub.start(&mut view);
        assert!(sub.tick(&mut view));
        assert_eq!(view.current_time.day, 2);
    }

    #[test]
    fn ticks_after_stop_are_ignored() {
        let mut view = view();
        let clock = SteppingClock { day: Cell::new(10) };
        let mut sub = ClockSubscription::new(&clock, Duration::from_secs(60));
        sub.start(&mut view);
        sub.stop();
        assert!(!sub.tick(&mut view));
        assert_eq!(view.current_time.day, 10);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let mut view = view();
        let sub = ClockSubscription::new(
            FixedClock(CalendarDate::new(2024, 6, 15)),
            Duration::from_secs(60),
        );
        assert!(!sub.tick(&mut view));
        assert_eq!(view.current_time.year, 2000);
    }

    #[test]
    fn system_clock_returns_a_valid_date() {
        let today = SystemClock.today();
        assert!((1..=12).contains(&today.month));
        assert!((1..=31).contains(&today.day));
    }
}
