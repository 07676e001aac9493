//! Schedule engine configuration.
//!
//! Every tunable here is a balance constant, not a structural invariant: the
//! behavioral formulas keep their shape for any valid value.  Hours are
//! fractional hours-of-day in `[0, 24)`; quotas are percentages in `[0, 100]`.

use crate::error::{CtError, CtResult};

/// Tunable constants for the whole schedule engine.
///
/// Typically loaded from a TOML/JSON file by the host (with the `serde`
/// feature) and passed to `ResidentAi` at startup.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleConfig {
    /// Master RNG seed.  The same seed always produces identical decisions.
    pub seed: u64,

    // ── Daily rhythm ──────────────────────────────────────────────────────
    /// Hour citizens get up on a regular day.
    pub wake_up_hour: f32,
    /// Hour citizens head to bed.
    pub go_to_sleep_hour: f32,
    /// Earliest hour anyone is willing to get up (early shops, commuters).
    pub earliest_wake_up: f32,

    // ── Work & school ─────────────────────────────────────────────────────
    /// Default first-shift start hour.
    pub work_begin: f32,
    /// Default first-shift end hour.
    pub work_end: f32,
    pub school_begin: f32,
    pub school_end: f32,
    /// Percentage of two/three-shift workers assigned to the second shift.
    pub second_shift_quota: u32,
    /// Percentage of three-shift workers assigned to the night shift.
    pub night_shift_quota: u32,
    /// Random overtime added after the shift end, upper bound in hours.
    pub max_overtime_hours: f32,

    // ── Lunch ─────────────────────────────────────────────────────────────
    pub lunch_begin: f32,
    pub lunch_end: f32,
    /// Percentage of first-shift workers that go out for lunch.
    pub lunch_quota: u32,

    // ── Vacations ─────────────────────────────────────────────────────────
    /// Per-day percentage chance for an employed citizen to start a vacation.
    pub vacation_chance: u32,
    /// Longest vacation, in days.
    pub max_vacation_days: u8,

    // ── Travel ────────────────────────────────────────────────────────────
    /// Smallest commute estimate, hours.  A zero estimate would let agents
    /// depart at the exact shift start and still be "on time".
    pub min_travel_time: f32,
    /// Largest commute estimate, hours.  Also the travel-time clamp bound and
    /// the quantization range of the storage encoding.
    pub max_travel_time: f32,
    /// Metres an average citizen covers during one simulation cycle; divided
    /// by the cycle length it yields the average speed in metres per hour.
    pub distance_per_cycle: f32,
    /// Give up on a ride that has not arrived after this many hours.
    pub abandon_transport_wait: f32,

    // ── Spare time ────────────────────────────────────────────────────────
    /// Relaxing-chance gain per hour awake, percent.
    pub relax_chance_slope: f32,
    /// Multiplier applied to relaxing chances on weekend evenings.
    pub weekend_modifier: u32,
    /// How far ahead a citizen looks for an attendable city event, hours.
    pub event_horizon_hours: f32,

    // ── Shopping ──────────────────────────────────────────────────────────
    /// Radius of a "local" shop search (lunch breaks, night kiosk runs), metres.
    pub local_search_distance: f32,
    /// Goods units bought per shop visit.
    pub shopping_goods: u16,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: 0,

            wake_up_hour: 6.0,
            go_to_sleep_hour: 22.0,
            earliest_wake_up: 5.5,

            work_begin: 9.0,
            work_end: 18.0,
            school_begin: 8.0,
            school_end: 14.0,
            second_shift_quota: 25,
            night_shift_quota: 13,
            max_overtime_hours: 2.0,

            lunch_begin: 12.0,
            lunch_end: 13.0,
            lunch_quota: 42,

            vacation_chance: 2,
            max_vacation_days: 7,

            min_travel_time: 0.1,
            max_travel_time: 4.0,
            distance_per_cycle: 2_500.0,
            abandon_transport_wait: 2.0,

            relax_chance_slope: 3.0,
            weekend_modifier: 11,
            event_horizon_hours: 12.0,

            local_search_distance: 1_000.0,
            shopping_goods: 100,
        }
    }
}

impl ScheduleConfig {
    /// Check value ranges.  Call once at startup; a bad config is a hard
    /// failure, not something to limp along with.
    pub fn validate(&self) -> CtResult<()> {
        let hours = [
            ("wake_up_hour", self.wake_up_hour),
            ("go_to_sleep_hour", self.go_to_sleep_hour),
            ("earliest_wake_up", self.earliest_wake_up),
            ("work_begin", self.work_begin),
            ("work_end", self.work_end),
            ("school_begin", self.school_begin),
            ("school_end", self.school_end),
            ("lunch_begin", self.lunch_begin),
            ("lunch_end", self.lunch_end),
        ];
        for (name, value) in hours {
            if !(0.0..24.0).contains(&value) {
                return Err(CtError::Config(format!(
                    "{name} = {value} is outside [0, 24)"
                )));
            }
        }

        let quotas = [
            ("second_shift_quota", self.second_shift_quota),
            ("night_shift_quota", self.night_shift_quota),
            ("lunch_quota", self.lunch_quota),
            ("vacation_chance", self.vacation_chance),
        ];
        for (name, value) in quotas {
            if value > 100 {
                return Err(CtError::Config(format!("{name} = {value} exceeds 100%")));
            }
        }

        if self.min_travel_time < 0.0 || self.max_travel_time <= self.min_travel_time {
            return Err(CtError::Config(format!(
                "travel time bounds [{}, {}] are not a valid range",
                self.min_travel_time, self.max_travel_time
            )));
        }
        if self.distance_per_cycle <= 0.0 {
            return Err(CtError::Config(
                "distance_per_cycle must be positive".into(),
            ));
        }
        Ok(())
    }

    /// `true` if `hour` falls into the sleeping window.
    #[inline]
    pub fn is_night_hour(&self, hour: f32) -> bool {
        hour >= self.go_to_sleep_hour || hour < self.wake_up_hour
    }
}
