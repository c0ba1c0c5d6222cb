use std::time::{Duration, Instant};

/// Single periodic tick source driven by the frame loop.
///
/// At most one schedule is live at a time: `start` and `reschedule` replace
/// whatever was running, and `stop` cancels it.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    schedule: Option<Schedule>,
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    deadline: Instant,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking every `interval`, cancelling any previous schedule.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            interval,
            deadline: now + interval,
        });
    }

    /// Cancels the live schedule, if any.
    pub fn stop(&mut self) {
        self.schedule = None;
    }

    /// Replaces the live schedule with one at `interval` counted from `now`.
    ///
    /// Does nothing while stopped.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) {
        if self.schedule.is_some() {
            self.start(interval, now);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.schedule.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.schedule.map(|schedule| schedule.interval)
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|schedule| schedule.deadline.saturating_duration_since(now))
    }

    /// Returns true when a tick is due and arms the next one.
    ///
    /// A loop that fell behind by more than one interval fires once and
    /// realigns to `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };

        if now < schedule.deadline {
            return false;
        }

        let next = schedule.deadline + schedule.interval;
        schedule.deadline = if next <= now {
            now + schedule.interval
        } else {
            next
        };
        true
    }
}
