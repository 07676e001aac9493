//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of whole simulated minutes since
//! the simulation epoch (day 0, 00:00, a Monday).  Minute resolution keeps
//! schedule arithmetic exact enough for daily routines while fitting a `u32`
//! (good for ~8,000 simulated years) and matching the on-disk encoding,
//! which stores minute offsets.
//!
//! `SimTime(0)` doubles as the `UNSET` sentinel — a schedule with an unset
//! fire time is due "as soon as possible".  A freshly zeroed record therefore
//! needs no initialization pass.
//!
//! Fractional hours (`f32`) appear only at the API edge, because the daily
//! routine constants (wake-up at 6.5, shift end at 18.0, …) are naturally
//! expressed as hours-of-day; they are rounded to whole minutes on entry.

use std::fmt;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;
pub const DAYS_PER_WEEK: u32 = 7;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in whole minutes since the epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    /// "Not scheduled" / "as soon as possible" sentinel.
    pub const UNSET: SimTime = SimTime(0);

    /// Build a timestamp from a day number and a fractional hour-of-day.
    #[inline]
    pub fn at(day: u32, hour: f32) -> SimTime {
        SimTime(day * MINUTES_PER_DAY).with_hour_of_day(hour)
    }

    #[inline(always)]
    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }

    /// Days elapsed since the epoch.
    #[inline]
    pub fn day(self) -> u32 {
        self.0 / MINUTES_PER_DAY
    }

    /// Minute within the current day, `0..1440`.
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        self.0 % MINUTES_PER_DAY
    }

    /// Fractional hour within the current day, `[0, 24)`.
    #[inline]
    pub fn hour_of_day(self) -> f32 {
        self.minute_of_day() as f32 / MINUTES_PER_HOUR as f32
    }

    /// Day of week, `0` = Monday … `6` = Sunday.
    #[inline]
    pub fn weekday(self) -> u32 {
        self.day() % DAYS_PER_WEEK
    }

    /// `true` on Saturday and Sunday.
    #[inline]
    pub fn is_weekend(self) -> bool {
        self.weekday() >= 5
    }

    /// Midnight at the start of the current day.
    #[inline]
    pub fn day_start(self) -> SimTime {
        SimTime(self.day() * MINUTES_PER_DAY)
    }

    /// Midnight at the start of the next day.
    #[inline]
    pub fn next_day_start(self) -> SimTime {
        SimTime((self.day() + 1) * MINUTES_PER_DAY)
    }

    /// The timestamp on the *same day* at the given fractional hour.
    ///
    /// `hour` is clamped to `[0, 24)` and rounded to the nearest minute.
    pub fn with_hour_of_day(self, hour: f32) -> SimTime {
        let minutes = (hour.clamp(0.0, 24.0) * MINUTES_PER_HOUR as f32).round() as u32;
        SimTime(self.day() * MINUTES_PER_DAY + minutes.min(MINUTES_PER_DAY - 1))
    }

    /// Offset by a (possibly negative) number of fractional hours, rounded to
    /// the nearest minute.  Saturates at the epoch.
    pub fn add_hours(self, hours: f32) -> SimTime {
        let delta = (hours * MINUTES_PER_HOUR as f32).round() as i64;
        let total = self.0 as i64 + delta;
        SimTime(total.clamp(0, u32::MAX as i64) as u32)
    }

    #[inline]
    pub fn add_minutes(self, minutes: u32) -> SimTime {
        SimTime(self.0.saturating_add(minutes))
    }

    /// Fractional hours elapsed from `earlier` to `self`; `0.0` if `earlier`
    /// is actually later.
    #[inline]
    pub fn hours_since(self, earlier: SimTime) -> f32 {
        self.0.saturating_sub(earlier.0) as f32 / MINUTES_PER_HOUR as f32
    }
}

impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, minutes: u32) -> SimTime {
        SimTime(self.0 + minutes)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.minute_of_day();
        write!(
            f,
            "day {} {:02}:{:02}",
            self.day(),
            m / MINUTES_PER_HOUR,
            m % MINUTES_PER_HOUR
        )
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// The host-facing simulated clock: current date-time plus the length of one
/// simulation cycle (the interval between successive full-population
/// re-evaluations, in hours).
///
/// `Clock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    now: SimTime,
    cycle_hours: f32,
}

impl Clock {
    /// Create a clock at `now` with the given cycle length in hours.
    pub fn new(now: SimTime, cycle_hours: f32) -> Self {
        debug_assert!(cycle_hours > 0.0, "cycle length must be positive");
        Self { now, cycle_hours }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Current fractional hour-of-day, `[0, 24)`.
    #[inline]
    pub fn hour(&self) -> f32 {
        self.now.hour_of_day()
    }

    /// Length of one simulation cycle in hours.
    #[inline]
    pub fn cycle_hours(&self) -> f32 {
        self.cycle_hours
    }

    /// Advance the clock by `minutes`.
    #[inline]
    pub fn advance_minutes(&mut self, minutes: u32) {
        self.now = self.now.add_minutes(minutes);
    }

    /// Jump to an absolute timestamp (save/load, host resync).
    #[inline]
    pub fn set_now(&mut self, now: SimTime) {
        self.now = now;
    }

    /// Update the cycle length.  Consumers that calibrate against the cycle
    /// (travel speed) must be re-synchronized afterwards.
    #[inline]
    pub fn set_cycle_hours(&mut self, cycle_hours: f32) {
        debug_assert!(cycle_hours > 0.0, "cycle length must be positive");
        self.cycle_hours = cycle_hours;
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cycle {:.2}h)", self.now, self.cycle_hours)
    }
}
