//! Work and school shift logic.
//!
//! Shift assignment is probabilistic per building class (second/night-shift
//! quotas), shift hours come from the config, and the commute departure time
//! is planned backwards from the shift start using the smoothed travel-time
//! estimate.

use ct_core::{CitizenRng, ScheduleConfig, SimTime};
use ct_agent::{ResidentState, ScheduleHint, ScheduleRecord, WorkShift, WorkStatus};
use ct_world::{AgeGroup, BuildingService, BuildingSubService, CitizenFacts, WorldContext};

use crate::TravelBehavior;

/// Work-shift parameters and work/lunch transition scheduling.
#[derive(Default)]
pub struct WorkBehavior;

impl WorkBehavior {
    pub fn new() -> Self {
        Self
    }

    // ── Building opening model ────────────────────────────────────────────

    /// Is a building of this class operating at `now`?
    ///
    /// Always-open classes override everything; otherwise the answer depends
    /// on the weekend table and the class's shift count.
    pub fn is_building_working(
        &self,
        config: &ScheduleConfig,
        now: SimTime,
        service: BuildingService,
        sub_service: BuildingSubService,
    ) -> bool {
        if Self::is_always_open(service, sub_service) {
            return true;
        }
        if now.is_weekend() && !Self::works_weekends(service, sub_service) {
            return false;
        }
        match Self::shift_count(service, sub_service) {
            3 => true, // round-the-clock
            shifts => {
                let open = Self::first_shift_begin(config, service, sub_service);
                // Two-shift classes stay open until midnight.
                let close = if shifts == 2 { 24.0 } else { config.work_end };
                let hour = now.hour_of_day();
                hour >= open && hour < close
            }
        }
    }

    /// Classes that never close: homes, emergency services, utilities,
    /// transport, tourism, and disaster response.
    fn is_always_open(service: BuildingService, sub_service: BuildingSubService) -> bool {
        matches!(
            service,
            BuildingService::Residential
                | BuildingService::HealthCare
                | BuildingService::Police
                | BuildingService::Fire
                | BuildingService::Disaster
                | BuildingService::Tourism
                | BuildingService::Road
                | BuildingService::PublicTransport
                | BuildingService::Electricity
                | BuildingService::Water
                | BuildingService::Garbage
        ) || matches!(
            sub_service,
            // Hotels and farms run around the clock.
            BuildingSubService::CommercialTourism | BuildingSubService::IndustrialFarming
        )
    }

    fn works_weekends(service: BuildingService, sub_service: BuildingSubService) -> bool {
        match service {
            BuildingService::Commercial | BuildingService::Industrial => true,
            BuildingService::Beautification | BuildingService::Monument => true,
            BuildingService::Office | BuildingService::Education => false,
            _ => Self::is_always_open(service, sub_service),
        }
    }

    /// How many shifts a building class runs per day.
    fn shift_count(service: BuildingService, sub_service: BuildingSubService) -> u32 {
        match service {
            BuildingService::Industrial => 3,
            BuildingService::Commercial => 2,
            _ if Self::is_always_open(service, sub_service) => 3,
            _ => 1,
        }
    }

    /// Shops open as soon as the earliest risers are up; everything else
    /// starts at the configured work-begin hour.
    fn first_shift_begin(
        config: &ScheduleConfig,
        service: BuildingService,
        _sub_service: BuildingSubService,
    ) -> f32 {
        if matches!(service, BuildingService::Commercial) {
            config.wake_up_hour.min(config.earliest_wake_up)
        } else {
            config.work_begin
        }
    }

    // ── Shift assignment ──────────────────────────────────────────────────

    /// Recompute the citizen's shift parameters from its live work building.
    ///
    /// Called whenever the cached `work_building` differs from ground truth
    /// or the citizen lost its job.  Students always get the school shift;
    /// 1-shift classes always assign `First`; 2/3-shift classes draw against
    /// the configured quotas in night → second → first priority order.
    pub fn update_work_shift(
        &self,
        record: &mut ScheduleRecord,
        facts: &CitizenFacts,
        ctx: &WorldContext<'_>,
        rng: &mut CitizenRng,
    ) {
        let config = ctx.config;
        record.work_building = facts.work_building;

        if facts.work_building.is_none() {
            record.work_shift = WorkShift::Unemployed;
            record.work_status = WorkStatus::None;
            record.work_shift_start = 0.0;
            record.work_shift_end = 0.0;
            record.works_on_weekends = false;
            record.vacation_days_left = 0;
            return;
        }

        if facts.age_group.is_student() {
            record.work_shift = WorkShift::First;
            record.work_shift_start = config.school_begin;
            record.work_shift_end = config.school_end;
            record.works_on_weekends = false;
        } else {
            let service = ctx.buildings.service(facts.work_building);
            let sub_service = ctx.buildings.sub_service(facts.work_building);
            let shifts = Self::shift_count(service, sub_service);

            let shift = if shifts == 3 && rng.should_occur(config.night_shift_quota) {
                WorkShift::Night
            } else if shifts >= 2 && rng.should_occur(config.second_shift_quota) {
                WorkShift::Second
            } else {
                WorkShift::First
            };

            let first_begin = Self::first_shift_begin(config, service, sub_service);
            let (start, end) = match shift {
                WorkShift::First => (first_begin, config.work_end),
                // Second shift runs from the first shift's end to midnight.
                WorkShift::Second => (config.work_end, 0.0),
                // Night shift runs from midnight to the first shift's start.
                WorkShift::Night => (0.0, first_begin),
                WorkShift::Unemployed => unreachable!(),
            };

            record.work_shift = shift;
            record.work_shift_start = start;
            record.work_shift_end = end;
            record.works_on_weekends = Self::works_weekends(service, sub_service);
        }

        // Don't cancel a running vacation just because the job changed.
        if record.work_status != WorkStatus::OnVacation {
            record.work_status = WorkStatus::Working;
        }
    }

    // ── Transition scheduling ─────────────────────────────────────────────

    /// Plan the commute to the next shift.  Returns `true` if a go-to-work
    /// transition was scheduled.
    ///
    /// The departure is `shift start − travel time − one simulation cycle`
    /// (the cycle margin covers tick granularity).  When the ideal departure
    /// has already passed, the citizen still leaves immediately, as long as a
    /// round trip fits before the shift ends; otherwise today's shift is
    /// skipped.
    pub fn schedule_go_to_work(
        &self,
        record: &mut ScheduleRecord,
        facts: &CitizenFacts,
        ctx: &WorldContext<'_>,
        travel: &TravelBehavior,
    ) -> bool {
        if record.work_building.is_none()
            || record.work_status != WorkStatus::Working
            || record.work_shift == WorkShift::Unemployed
        {
            return false;
        }

        let now = ctx.clock.now();
        let start = Self::next_shift_start(now, record);
        if start.is_weekend() && !record.works_on_weekends {
            return false;
        }
        let end = Self::shift_end_after(start, record);

        let travel_time = if record.travel_time_to_work > 0.0 {
            record.travel_time_to_work
        } else {
            let from = if facts.current_building.is_none() {
                facts.home_building
            } else {
                facts.current_building
            };
            travel.estimated_travel_time(ctx.config, ctx.buildings, from, record.work_building)
        };

        let departure = start.add_hours(-(travel_time + ctx.clock.cycle_hours()));
        if departure < now {
            // Late already; only worth going if the commute there and back
            // still fits into the remaining shift.
            if now.add_hours(2.0 * travel_time) >= end {
                return false;
            }
        }

        record.schedule_at(ResidentState::AtSchoolOrWork, departure);
        true
    }

    /// Try to plan a lunch-break shop run.  First-shift working-age citizens
    /// only, gated on the lunch quota, and only before the lunch window
    /// opens.  Returns `true` if lunch was scheduled.
    pub fn schedule_lunch(
        &self,
        record: &mut ScheduleRecord,
        age: AgeGroup,
        ctx: &WorldContext<'_>,
        rng: &mut CitizenRng,
    ) -> bool {
        let config = ctx.config;
        if record.work_shift != WorkShift::First || !age.is_working_age() {
            return false;
        }
        let now = ctx.clock.now();
        if now.hour_of_day() >= config.lunch_begin {
            return false;
        }
        if !rng.should_occur(config.lunch_quota) {
            return false;
        }
        record.hint = ScheduleHint::LocalShoppingOnly;
        record.schedule_at(ResidentState::Shopping, now.with_hour_of_day(config.lunch_begin));
        true
    }

    /// Head back to the workplace when the lunch window closes.
    pub fn schedule_return_from_lunch(&self, record: &mut ScheduleRecord, ctx: &WorldContext<'_>) {
        let now = ctx.clock.now();
        record.hint = ScheduleHint::None;
        record.schedule_at(
            ResidentState::AtSchoolOrWork,
            now.with_hour_of_day(ctx.config.lunch_end),
        );
    }

    /// Go home at the shift's end, plus a random bit of age-dependent
    /// overtime.
    pub fn schedule_return_from_work(
        &self,
        record: &mut ScheduleRecord,
        age: AgeGroup,
        ctx: &WorldContext<'_>,
        rng: &mut CitizenRng,
    ) {
        let now = ctx.clock.now();
        let end = Self::next_occurrence(now, record.work_shift_end);

        let max_overtime = ctx.config.max_overtime_hours;
        let overtime = match age {
            AgeGroup::Young => rng.gen_range(0.0..=max_overtime),
            AgeGroup::Adult => rng.gen_range(0.0..=max_overtime / 2.0),
            _ => 0.0,
        };

        record.schedule_at(ResidentState::AtHome, end.add_hours(overtime));
    }

    // ── Shift time arithmetic ─────────────────────────────────────────────

    /// The next time `hour` comes around, today or tomorrow.
    fn next_occurrence(now: SimTime, hour: f32) -> SimTime {
        let today = now.with_hour_of_day(hour);
        if today < now {
            today.next_day_start().with_hour_of_day(hour)
        } else {
            today
        }
    }

    /// Start of the next shift: today's occurrence if that shift hasn't
    /// ended yet, otherwise tomorrow's.  Public so schedule builders can ask
    /// "is work imminent?" without committing a transition.
    pub fn next_shift_start(now: SimTime, record: &ScheduleRecord) -> SimTime {
        let today = now.with_hour_of_day(record.work_shift_start);
        if Self::shift_end_after(today, record) > now {
            today
        } else {
            today.next_day_start().with_hour_of_day(record.work_shift_start)
        }
    }

    /// End timestamp of the shift beginning at `start`, handling shifts that
    /// wrap past midnight (second shift ends at 00:00 the next day).
    fn shift_end_after(start: SimTime, record: &ScheduleRecord) -> SimTime {
        if record.work_shift_end > record.work_shift_start {
            start.with_hour_of_day(record.work_shift_end)
        } else {
            start.next_day_start().with_hour_of_day(record.work_shift_end)
        }
    }
}
