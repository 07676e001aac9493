//! Spare-time probability tables.
//!
//! `refresh_chances` rebuilds one small array per age group from the current
//! simulated hour; the per-citizen lookups are plain array reads.  Refresh
//! runs once per simulation cycle before any citizen is processed — a
//! single-writer phase, not a lock.

use ct_core::{Clock, ScheduleConfig};
use ct_world::AgeGroup;
use ct_agent::WorkShift;

/// Time-varying "go relax" / "go shopping" percentages per age group.
pub struct SpareTimeBehavior {
    relaxing_default: [u32; AgeGroup::COUNT],
    relaxing_second_shift: [u32; AgeGroup::COUNT],
    relaxing_night_shift: [u32; AgeGroup::COUNT],
    shopping: [u32; AgeGroup::COUNT],
}

impl Default for SpareTimeBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl SpareTimeBehavior {
    /// All-zero tables; call [`refresh_chances`](Self::refresh_chances)
    /// before the first lookup.
    pub fn new() -> Self {
        Self {
            relaxing_default: [0; AgeGroup::COUNT],
            relaxing_second_shift: [0; AgeGroup::COUNT],
            relaxing_night_shift: [0; AgeGroup::COUNT],
            shopping: [0; AgeGroup::COUNT],
        }
    }

    // ── Refresh (single-writer phase) ─────────────────────────────────────

    /// Rebuild all tables for the current simulated hour.
    pub fn refresh_chances(&mut self, clock: &Clock, config: &ScheduleConfig) {
        let now = clock.now();
        let hour = now.hour_of_day();

        let weekend_multiplier = if Self::is_weekend_fun_time(now, config) {
            config.weekend_modifier
        } else {
            1
        };
        let base = Self::relaxing_base(hour, config) * weekend_multiplier as f32;

        for age in AgeGroup::ALL {
            let idx = age as usize;

            let mut chance = (base * Self::age_factor(age)).min(100.0) as u32;
            // Children and teens don't go out at night, whatever the curve says.
            if age.is_student() && config.is_night_hour(hour) {
                chance = 0;
            }
            self.relaxing_default[idx] = chance;

            // Shift workers never "relax" inside their own working window.
            self.relaxing_second_shift[idx] = if hour >= config.work_end { 0 } else { chance };
            self.relaxing_night_shift[idx] = if hour < config.work_begin { 0 } else { chance };

            self.shopping[idx] = Self::shopping_curve(hour, config, age);
        }
    }

    // ── Lookups (read-only, O(1)) ─────────────────────────────────────────

    /// Percentage chance for this citizen to go relaxing right now.
    pub fn get_relaxing_chance(
        &self,
        age: AgeGroup,
        work_shift: WorkShift,
        on_vacation: bool,
    ) -> u32 {
        let idx = age as usize;
        if on_vacation {
            return self.relaxing_default[idx];
        }
        match work_shift {
            WorkShift::Second => self.relaxing_second_shift[idx],
            WorkShift::Night => self.relaxing_night_shift[idx],
            _ => self.relaxing_default[idx],
        }
    }

    /// Percentage chance for this citizen to go shopping right now.
    #[inline]
    pub fn get_shopping_chance(&self, age: AgeGroup) -> u32 {
        self.shopping[age as usize]
    }

    // ── Curves ────────────────────────────────────────────────────────────

    /// Relaxing chance before age scaling, percent.
    ///
    /// Daytime ramps up over the first four waking hours; the small hours
    /// taper quadratically back toward zero as the morning approaches.
    fn relaxing_base(hour: f32, config: &ScheduleConfig) -> f32 {
        let wake = config.wake_up_hour;
        if hour >= wake {
            (hour - wake).clamp(0.0, 4.0) * config.relax_chance_slope
        } else {
            let t = ((wake - hour).clamp(0.0, 4.0)) / 4.0;
            4.0 * config.relax_chance_slope * t * t
        }
    }

    fn age_factor(age: AgeGroup) -> f32 {
        match age {
            AgeGroup::Child => 1.0,
            AgeGroup::Teen => 0.9,
            AgeGroup::Young => 1.3,
            AgeGroup::Adult => 1.0,
            AgeGroup::Senior => 0.8,
        }
    }

    /// Going out gets a big boost from Friday evening through the weekend.
    fn is_weekend_fun_time(now: ct_core::SimTime, config: &ScheduleConfig) -> bool {
        match now.weekday() {
            4 => now.hour_of_day() >= config.work_end, // Friday evening
            5 | 6 => true,
            _ => false,
        }
    }

    /// Trapezoid shopping curve: a floor at night, a linear morning ramp to
    /// 100%, a flat 100% plateau through the working day, and a linear ramp
    /// back down toward midnight.
    fn shopping_curve(hour: f32, config: &ScheduleConfig, age: AgeGroup) -> u32 {
        // Seniors keep a small night-time chance (insomnia shopping); minors
        // get none at all.
        let floor: f32 = match age {
            AgeGroup::Senior => 10.0,
            AgeGroup::Child | AgeGroup::Teen => 0.0,
            _ => 0.0,
        };

        let rise_start = config.wake_up_hour.min(config.earliest_wake_up);
        let rise_end = config.work_begin.max(config.wake_up_hour);
        let fall_start = config.go_to_sleep_hour.max(config.work_end);

        let chance = if hour < rise_start {
            floor
        } else if hour < rise_end {
            let span = (rise_end - rise_start).max(f32::EPSILON);
            floor + (100.0 - floor) * (hour - rise_start) / span
        } else if hour < fall_start {
            100.0
        } else {
            let span = (24.0 - fall_start).max(f32::EPSILON);
            100.0 - (100.0 - floor) * (hour - fall_start) / span
        };

        chance.clamp(0.0, 100.0) as u32
    }
}
