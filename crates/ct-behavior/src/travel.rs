//! Coarse commute-duration estimation.
//!
//! This deliberately does not consult the path network: at tens of thousands
//! of citizens per tick, the estimate must be O(1).  Distance divided by a
//! calibrated average speed is accurate enough for departure planning, and
//! the per-record moving average corrects it from observed commutes.

use ct_core::{BuildingId, ScheduleConfig};
use ct_world::BuildingQuery;

/// Estimates travel durations from straight-line distance and an average
/// speed calibrated against the simulation's cycle length.
pub struct TravelBehavior {
    /// Metres per simulated hour.
    average_speed: f32,
    /// Cycle length the speed was calibrated for.
    calibrated_cycle: f32,
}

impl TravelBehavior {
    pub fn new(config: &ScheduleConfig, cycle_hours: f32) -> Self {
        let mut travel = Self {
            average_speed: 1.0,
            calibrated_cycle: 0.0,
        };
        travel.synchronize(config, cycle_hours);
        travel
    }

    /// Recalibrate the average speed when the simulation cycle length changes.
    /// Cheap no-op while the cycle stays the same.
    pub fn synchronize(&mut self, config: &ScheduleConfig, cycle_hours: f32) {
        if cycle_hours <= 0.0 || cycle_hours == self.calibrated_cycle {
            return;
        }
        self.average_speed = config.distance_per_cycle / cycle_hours;
        self.calibrated_cycle = cycle_hours;
    }

    /// Current calibration, metres per simulated hour.
    #[inline]
    pub fn average_speed(&self) -> f32 {
        self.average_speed
    }

    /// Estimated travel time between two buildings, in hours.
    ///
    /// Returns `0.0` for a self-pair or when either ID is `NONE` (nothing to
    /// travel between); otherwise clamps into
    /// `[min_travel_time, max_travel_time]`, so even adjacent buildings cost
    /// a minimum commute.
    pub fn estimated_travel_time(
        &self,
        config: &ScheduleConfig,
        buildings: &dyn BuildingQuery,
        from: BuildingId,
        to: BuildingId,
    ) -> f32 {
        if from == to || from.is_none() || to.is_none() {
            return 0.0;
        }
        let distance = buildings.distance(from, to);
        if !distance.is_finite() {
            return config.max_travel_time;
        }
        (distance / self.average_speed).clamp(config.min_travel_time, config.max_travel_time)
    }
}
