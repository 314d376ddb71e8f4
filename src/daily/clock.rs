//! Time source for day rollover
//!
//! Everything that reads the clock goes through [`Clock`] so tests can pin
//! and advance time explicitly.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Millisecond resolution, matching the persisted timestamps.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.millis.store(instant.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}

/// First instant of the calendar day after `now`, as seen in `tz`
///
/// Always strictly after `now`. Zones whose clocks skip midnight get the
/// first hour that exists on that day.
#[must_use]
pub fn next_midnight<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    now.with_timezone(tz)
        .date_naive()
        .succ_opt()
        .and_then(|tomorrow| {
            (0..24).find_map(|hour| {
                tomorrow
                    .and_hms_opt(hour, 0, 0)?
                    .and_local_timezone(tz.clone())
                    .earliest()
            })
        })
        .map_or_else(|| now + TimeDelta::days(1), |start| start.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, Timelike};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn next_midnight_utc() {
        let now = utc("2024-03-10T15:30:00Z");
        assert_eq!(next_midnight(now, &Utc), utc("2024-03-11T00:00:00Z"));
    }

    #[test]
    fn next_midnight_exactly_at_midnight_moves_a_full_day() {
        let now = utc("2024-03-10T00:00:00Z");
        assert_eq!(next_midnight(now, &Utc), utc("2024-03-11T00:00:00Z"));
    }

    #[test]
    fn next_midnight_respects_offset() {
        // 23:30 UTC is already 01:30 the next day at UTC+2
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = utc("2024-03-10T23:30:00Z");
        assert_eq!(next_midnight(now, &tz), utc("2024-03-11T22:00:00Z"));
    }

    #[test]
    fn next_midnight_local_is_after_now_and_on_the_hour() {
        let now = Utc::now();
        let midnight = next_midnight(now, &Local);
        assert!(midnight > now);
        assert!(midnight - now <= TimeDelta::hours(25));
        assert_eq!(midnight.with_timezone(&Local).minute(), 0);
    }

    #[test]
    fn manual_clock_advances() {
        let start = utc("2024-03-10T12:00:00Z");
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(TimeDelta::hours(13));
        assert_eq!(clock.now(), utc("2024-03-11T01:00:00Z"));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
