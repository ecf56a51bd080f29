//! Refresh planning for the meeting list: when to fetch and which in-flight
//! response is still allowed to render. Pure logic, no timers or network.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Regular poll interval: 5 minutes.
pub const REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1000;

/// Midnight check interval: 1 minute.
pub const MIDNIGHT_CHECK_INTERVAL_MS: u32 = 60 * 1000;

/// Source of local wall-clock time, injectable for tests.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Handle for one issued fetch. Only the latest issued ticket may commit
/// its response, so a stale in-flight request cannot overwrite a newer
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Decides when an extra refresh is due and arbitrates between overlapping
/// fetches. One planner per rendered meeting list.
pub struct RefreshPlanner<C> {
    clock: C,
    issued: u64,
    midnight_fired: Option<NaiveDate>,
}

impl<C: Clock> RefreshPlanner<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            issued: 0,
            midnight_fired: None,
        }
    }

    /// Registers a new fetch and returns its ticket. Issuing a ticket
    /// invalidates all previously issued ones.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether a response holding `ticket` may still replace the rendered
    /// content.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// True at local 00:00, at most once per calendar day. The regular
    /// interval can drift past the day boundary; this forces one refresh
    /// right at it.
    pub fn midnight_due(&mut self) -> bool {
        let now = self.clock.now();
        if now.hour() != 0 || now.minute() != 0 {
            return false;
        }
        if self.midnight_fired == Some(now.date()) {
            return false;
        }
        self.midnight_fired = Some(now.date());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeClock(Rc<Cell<NaiveDateTime>>);

    impl FakeClock {
        fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> Self {
            let now = NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap();
            FakeClock(Rc::new(Cell::new(now)))
        }

        fn set(&self, y: i32, m: u32, d: u32, hour: u32, min: u32) {
            let now = NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap();
            self.0.set(now);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    #[test]
    fn latest_ticket_commits() {
        let mut planner = RefreshPlanner::new(FakeClock::at(2026, 1, 12, 9, 30));
        let ticket = planner.begin();
        assert!(planner.is_current(ticket));
    }

    #[test]
    fn stale_ticket_is_refused_after_newer_fetch() {
        let mut planner = RefreshPlanner::new(FakeClock::at(2026, 1, 12, 9, 30));
        let first = planner.begin();
        let second = planner.begin();
        // first resolves late: it must not overwrite the newer render
        assert!(!planner.is_current(first));
        assert!(planner.is_current(second));
    }

    #[test]
    fn midnight_fires_exactly_once_per_day() {
        let clock = FakeClock::at(2026, 1, 12, 23, 59);
        let mut planner = RefreshPlanner::new(clock.clone());
        assert!(!planner.midnight_due());

        clock.set(2026, 1, 13, 0, 0);
        assert!(planner.midnight_due());
        // a second check landing in the same minute does not fire again
        assert!(!planner.midnight_due());

        clock.set(2026, 1, 13, 0, 1);
        assert!(!planner.midnight_due());

        clock.set(2026, 1, 14, 0, 0);
        assert!(planner.midnight_due());
    }

    #[test]
    fn midnight_ignores_noon() {
        let mut planner = RefreshPlanner::new(FakeClock::at(2026, 1, 12, 12, 0));
        assert!(!planner.midnight_due());
    }
}
