use ct_core::{BuildingId, CitizenId, CitizenRng, Clock, ScheduleConfig, SimTime};
use ct_agent::{ResidentState, ScheduleHint, ScheduleRecord, WorkShift, WorkStatus};
use ct_world::{
    AgeGroup, BuildingService, BuildingSubService, CitizenFacts, StubWorld, WorldContext,
};

use crate::{SpareTimeBehavior, TravelBehavior, WorkBehavior};

const HOME: BuildingId = BuildingId(1);
const OFFICE: BuildingId = BuildingId(2);
const SHOP: BuildingId = BuildingId(3);
const FACTORY: BuildingId = BuildingId(4);

/// Home at the origin, office 2500 m east (one default cycle of travel),
/// a shop next to home, a factory further out.
fn test_world() -> StubWorld {
    let mut world = StubWorld::new();
    world.add_building(
        HOME,
        BuildingService::Residential,
        BuildingSubService::None,
        (0.0, 0.0),
    );
    world.add_building(
        OFFICE,
        BuildingService::Office,
        BuildingSubService::None,
        (2_500.0, 0.0),
    );
    world.add_building(
        SHOP,
        BuildingService::Commercial,
        BuildingSubService::CommercialLow,
        (100.0, 0.0),
    );
    world.add_building(
        FACTORY,
        BuildingService::Industrial,
        BuildingSubService::IndustrialGeneric,
        (5_000.0, 0.0),
    );
    world
}

fn ctx<'a>(
    clock: &'a Clock,
    config: &'a ScheduleConfig,
    world: &'a StubWorld,
) -> WorldContext<'a> {
    WorldContext::new(clock, config, world, world, world)
}

fn rng() -> CitizenRng {
    CitizenRng::new(42, CitizenId(7))
}

fn employed_record(work_building: BuildingId) -> ScheduleRecord {
    let mut record = ScheduleRecord::default();
    record.work_building = work_building;
    record.work_status = WorkStatus::Working;
    record.work_shift = WorkShift::First;
    record.work_shift_start = 9.0;
    record.work_shift_end = 18.0;
    record.works_on_weekends = false;
    record
}

mod travel {
    use super::*;

    #[test]
    fn distance_over_speed() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let travel = TravelBehavior::new(&config, 1.0);

        // 2500 m at 2500 m/h.
        let t = travel.estimated_travel_time(&config, &world, HOME, OFFICE);
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_distance_pair_costs_minimum() {
        let config = ScheduleConfig::default();
        let mut world = test_world();
        world.add_building(
            BuildingId(9),
            BuildingService::Commercial,
            BuildingSubService::CommercialLow,
            (0.0, 0.0),
        );
        let travel = TravelBehavior::new(&config, 1.0);

        let t = travel.estimated_travel_time(&config, &world, HOME, BuildingId(9));
        assert_eq!(t, config.min_travel_time);
    }

    #[test]
    fn self_pair_and_none_are_free() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let travel = TravelBehavior::new(&config, 1.0);

        assert_eq!(travel.estimated_travel_time(&config, &world, HOME, HOME), 0.0);
        assert_eq!(
            travel.estimated_travel_time(&config, &world, HOME, BuildingId::NONE),
            0.0
        );
    }

    #[test]
    fn unknown_building_costs_maximum() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let travel = TravelBehavior::new(&config, 1.0);

        let t = travel.estimated_travel_time(&config, &world, HOME, BuildingId(99));
        assert_eq!(t, config.max_travel_time);
    }

    #[test]
    fn synchronize_recalibrates_on_cycle_change() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let mut travel = TravelBehavior::new(&config, 1.0);
        assert_eq!(travel.average_speed(), 2_500.0);

        travel.synchronize(&config, 0.5);
        assert_eq!(travel.average_speed(), 5_000.0);
        let t = travel.estimated_travel_time(&config, &world, HOME, OFFICE);
        assert!((t - 0.5).abs() < 1e-5);
    }
}

mod spare_time {
    use super::*;

    fn refreshed(day: u32, hour: f32, config: &ScheduleConfig) -> SpareTimeBehavior {
        let clock = Clock::new(SimTime::at(day, hour), 0.25);
        let mut spare = SpareTimeBehavior::new();
        spare.refresh_chances(&clock, config);
        spare
    }

    #[test]
    fn shopping_plateau_is_full_during_the_day() {
        let config = ScheduleConfig::default();
        let spare = refreshed(0, 12.0, &config);
        for age in AgeGroup::ALL {
            assert_eq!(spare.get_shopping_chance(age), 100, "{age:?}");
        }
    }

    #[test]
    fn shopping_floor_at_night() {
        let config = ScheduleConfig::default();
        let spare = refreshed(0, 2.0, &config);
        assert_eq!(spare.get_shopping_chance(AgeGroup::Senior), 10);
        assert_eq!(spare.get_shopping_chance(AgeGroup::Child), 0);
        assert_eq!(spare.get_shopping_chance(AgeGroup::Adult), 0);
    }

    #[test]
    fn second_shift_workers_do_not_relax_in_their_window() {
        let config = ScheduleConfig::default();
        // 19:00, inside the second shift.
        let spare = refreshed(0, 19.0, &config);
        assert_eq!(
            spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::Second, false),
            0
        );
        assert!(spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::First, false) > 0);
    }

    #[test]
    fn night_shift_workers_do_not_relax_in_their_window() {
        let config = ScheduleConfig::default();
        // 07:00, inside the night shift.
        let spare = refreshed(0, 7.0, &config);
        assert_eq!(
            spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::Night, false),
            0
        );
        assert!(spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::First, false) > 0);
    }

    #[test]
    fn vacationers_use_the_default_table() {
        let config = ScheduleConfig::default();
        let spare = refreshed(0, 19.0, &config);
        // A second-shift worker on vacation relaxes like everyone else.
        assert_eq!(
            spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::Second, true),
            spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::First, false)
        );
    }

    #[test]
    fn students_stay_home_at_night() {
        let config = ScheduleConfig::default();
        let spare = refreshed(0, 23.0, &config);
        assert_eq!(
            spare.get_relaxing_chance(AgeGroup::Child, WorkShift::Unemployed, false),
            0
        );
        assert_eq!(
            spare.get_relaxing_chance(AgeGroup::Teen, WorkShift::Unemployed, false),
            0
        );
        assert!(spare.get_relaxing_chance(AgeGroup::Adult, WorkShift::Unemployed, false) > 0);
    }

    #[test]
    fn weekend_boosts_relaxing() {
        let config = ScheduleConfig::default();
        let monday = refreshed(0, 12.0, &config);
        let saturday = refreshed(5, 12.0, &config);
        assert!(
            saturday.get_relaxing_chance(AgeGroup::Adult, WorkShift::Unemployed, false)
                > monday.get_relaxing_chance(AgeGroup::Adult, WorkShift::Unemployed, false)
        );
    }

    #[test]
    fn friday_evening_counts_as_weekend() {
        let config = ScheduleConfig::default();
        let friday_noon = refreshed(4, 12.0, &config);
        let friday_evening = refreshed(4, 18.5, &config);
        assert!(
            friday_evening.get_relaxing_chance(AgeGroup::Adult, WorkShift::First, false)
                > friday_noon.get_relaxing_chance(AgeGroup::Adult, WorkShift::First, false)
        );
    }
}

mod work {
    use super::*;

    #[test]
    fn commute_departure_counts_back_from_shift_start() {
        let config = ScheduleConfig::default();
        let world = test_world();
        // Monday 08:00, cycle 1 h, known 1 h commute, shift starts at 09:00.
        let clock = Clock::new(SimTime::at(0, 8.0), 1.0);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 1.0);

        let mut record = employed_record(OFFICE);
        record.travel_time_to_work = 1.0;
        let facts = CitizenFacts {
            home_building: HOME,
            work_building: OFFICE,
            current_building: HOME,
            ..CitizenFacts::default()
        };

        assert!(WorkBehavior::new().schedule_go_to_work(&mut record, &facts, &ctx, &travel));
        assert_eq!(record.scheduled_state(), ResidentState::AtSchoolOrWork);
        // 09:00 - 1 h travel - 1 h cycle: already past, fires immediately.
        assert_eq!(record.scheduled_time(), SimTime::at(0, 7.0));
    }

    #[test]
    fn estimates_commute_when_no_history_exists() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 0.25);

        let mut record = employed_record(OFFICE);
        let facts = CitizenFacts {
            home_building: HOME,
            work_building: OFFICE,
            current_building: HOME,
            ..CitizenFacts::default()
        };

        assert!(WorkBehavior::new().schedule_go_to_work(&mut record, &facts, &ctx, &travel));
        // 2500 m at 10 000 m/h = 0.25 h; departure 09:00 - 0.25 - 0.25.
        assert_eq!(record.scheduled_time(), SimTime::at(0, 8.5));
    }

    #[test]
    fn skips_shift_when_round_trip_no_longer_fits() {
        let config = ScheduleConfig::default();
        let world = test_world();
        // 17:30; 2 h of commuting against a shift ending at 18:00.
        let clock = Clock::new(SimTime::at(0, 17.5), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 0.25);

        let mut record = employed_record(OFFICE);
        record.travel_time_to_work = 1.0;
        let facts = CitizenFacts {
            home_building: HOME,
            work_building: OFFICE,
            ..CitizenFacts::default()
        };

        assert!(!WorkBehavior::new().schedule_go_to_work(&mut record, &facts, &ctx, &travel));
        assert_eq!(record.scheduled_state(), ResidentState::Unknown);
    }

    #[test]
    fn weekday_workers_stay_home_on_saturday() {
        let config = ScheduleConfig::default();
        let world = test_world();
        // Saturday morning.
        let clock = Clock::new(SimTime::at(5, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 0.25);

        let mut record = employed_record(OFFICE);
        let facts = CitizenFacts {
            home_building: HOME,
            work_building: OFFICE,
            ..CitizenFacts::default()
        };

        assert!(!WorkBehavior::new().schedule_go_to_work(&mut record, &facts, &ctx, &travel));
    }

    #[test]
    fn after_shift_end_plans_for_tomorrow() {
        let config = ScheduleConfig::default();
        let world = test_world();
        // Monday 20:00, shift over; expect a Tuesday departure.
        let clock = Clock::new(SimTime::at(0, 20.0), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 0.25);

        let mut record = employed_record(OFFICE);
        record.travel_time_to_work = 0.5;
        let facts = CitizenFacts {
            home_building: HOME,
            work_building: OFFICE,
            ..CitizenFacts::default()
        };

        assert!(WorkBehavior::new().schedule_go_to_work(&mut record, &facts, &ctx, &travel));
        assert_eq!(record.scheduled_time(), SimTime::at(1, 8.25));
    }

    #[test]
    fn unemployed_and_vacationers_are_not_scheduled() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let travel = TravelBehavior::new(&config, 0.25);
        let facts = CitizenFacts::default();
        let work = WorkBehavior::new();

        let mut record = ScheduleRecord::default();
        assert!(!work.schedule_go_to_work(&mut record, &facts, &ctx, &travel));

        let mut record = employed_record(OFFICE);
        record.work_status = WorkStatus::OnVacation;
        assert!(!work.schedule_go_to_work(&mut record, &facts, &ctx, &travel));
    }

    #[test]
    fn students_get_the_school_shift() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = ScheduleRecord::default();
        let facts = CitizenFacts {
            work_building: OFFICE,
            age_group: AgeGroup::Teen,
            ..CitizenFacts::default()
        };
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        assert_eq!(record.work_shift, WorkShift::First);
        assert_eq!(record.work_shift_start, config.school_begin);
        assert_eq!(record.work_shift_end, config.school_end);
        assert!(!record.works_on_weekends);
        assert_eq!(record.work_status, WorkStatus::Working);
    }

    #[test]
    fn losing_the_job_clears_shift_state() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = employed_record(OFFICE);
        record.vacation_days_left = 3;
        let facts = CitizenFacts::default(); // no work building
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        assert_eq!(record.work_shift, WorkShift::Unemployed);
        assert_eq!(record.work_status, WorkStatus::None);
        assert_eq!(record.vacation_days_left, 0);
        assert!(record.work_building.is_none());
    }

    #[test]
    fn office_workers_always_draw_first_shift() {
        let config = ScheduleConfig {
            second_shift_quota: 100,
            night_shift_quota: 100,
            ..ScheduleConfig::default()
        };
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = ScheduleRecord::default();
        let facts = CitizenFacts {
            work_building: OFFICE,
            ..CitizenFacts::default()
        };
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        // Offices run a single shift; the quotas must not apply.
        assert_eq!(record.work_shift, WorkShift::First);
        assert_eq!(record.work_shift_start, config.work_begin);
        assert_eq!(record.work_shift_end, config.work_end);
        assert!(!record.works_on_weekends);
    }

    #[test]
    fn industrial_night_shift_fills_by_quota() {
        let config = ScheduleConfig {
            night_shift_quota: 100,
            ..ScheduleConfig::default()
        };
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = ScheduleRecord::default();
        let facts = CitizenFacts {
            work_building: FACTORY,
            ..CitizenFacts::default()
        };
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        assert_eq!(record.work_shift, WorkShift::Night);
        assert_eq!(record.work_shift_start, 0.0);
        assert_eq!(record.work_shift_end, config.work_begin);
        assert!(record.works_on_weekends);
    }

    #[test]
    fn commercial_second_shift_ends_at_midnight() {
        let config = ScheduleConfig {
            second_shift_quota: 100,
            night_shift_quota: 0,
            ..ScheduleConfig::default()
        };
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = ScheduleRecord::default();
        let facts = CitizenFacts {
            work_building: SHOP,
            ..CitizenFacts::default()
        };
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        assert_eq!(record.work_shift, WorkShift::Second);
        assert_eq!(record.work_shift_start, config.work_end);
        assert_eq!(record.work_shift_end, 0.0);
    }

    #[test]
    fn job_change_keeps_a_running_vacation() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 6.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = employed_record(OFFICE);
        record.work_status = WorkStatus::OnVacation;
        record.vacation_days_left = 4;
        let facts = CitizenFacts {
            work_building: FACTORY,
            ..CitizenFacts::default()
        };
        WorkBehavior::new().update_work_shift(&mut record, &facts, &ctx, &mut rng());

        assert_eq!(record.work_status, WorkStatus::OnVacation);
        assert_eq!(record.vacation_days_left, 4);
        assert_eq!(record.work_building, FACTORY);
    }

    #[test]
    fn lunch_is_scheduled_before_the_window() {
        let config = ScheduleConfig {
            lunch_quota: 100,
            ..ScheduleConfig::default()
        };
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 10.0), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = employed_record(OFFICE);
        assert!(WorkBehavior::new().schedule_lunch(&mut record, AgeGroup::Adult, &ctx, &mut rng()));
        assert_eq!(record.hint, ScheduleHint::LocalShoppingOnly);
        assert_eq!(record.scheduled_state(), ResidentState::Shopping);
        assert_eq!(record.scheduled_time(), SimTime::at(0, 12.0));
    }

    #[test]
    fn no_lunch_for_second_shift_or_after_noon() {
        let config = ScheduleConfig {
            lunch_quota: 100,
            ..ScheduleConfig::default()
        };
        let world = test_world();
        let work = WorkBehavior::new();

        let clock = Clock::new(SimTime::at(0, 10.0), 0.25);
        let ctx_morning = ctx(&clock, &config, &world);
        let mut record = employed_record(OFFICE);
        record.work_shift = WorkShift::Second;
        assert!(!work.schedule_lunch(&mut record, AgeGroup::Adult, &ctx_morning, &mut rng()));

        let late = Clock::new(SimTime::at(0, 12.5), 0.25);
        let ctx_late = ctx(&late, &config, &world);
        let mut record = employed_record(OFFICE);
        assert!(!work.schedule_lunch(&mut record, AgeGroup::Adult, &ctx_late, &mut rng()));
    }

    #[test]
    fn return_from_lunch_clears_the_hint() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 12.25), 0.25);
        let ctx = ctx(&clock, &config, &world);

        let mut record = employed_record(OFFICE);
        record.hint = ScheduleHint::LocalShoppingOnly;
        WorkBehavior::new().schedule_return_from_lunch(&mut record, &ctx);

        assert_eq!(record.hint, ScheduleHint::None);
        assert_eq!(record.scheduled_state(), ResidentState::AtSchoolOrWork);
        assert_eq!(record.scheduled_time(), SimTime::at(0, 13.0));
    }

    #[test]
    fn return_from_work_adds_bounded_overtime() {
        let config = ScheduleConfig::default();
        let world = test_world();
        let clock = Clock::new(SimTime::at(0, 10.0), 0.25);
        let ctx = ctx(&clock, &config, &world);
        let work = WorkBehavior::new();

        let shift_end = SimTime::at(0, 18.0);
        let mut rng = rng();
        for age in [AgeGroup::Young, AgeGroup::Adult, AgeGroup::Senior] {
            let mut record = employed_record(OFFICE);
            work.schedule_return_from_work(&mut record, age, &ctx, &mut rng);
            assert_eq!(record.scheduled_state(), ResidentState::AtHome);

            let latest = match age {
                AgeGroup::Young => shift_end.add_hours(config.max_overtime_hours),
                AgeGroup::Adult => shift_end.add_hours(config.max_overtime_hours / 2.0),
                _ => shift_end,
            };
            assert!(record.scheduled_time() >= shift_end);
            assert!(record.scheduled_time() <= latest, "{age:?}");
        }
    }

    #[test]
    fn building_opening_hours() {
        let config = ScheduleConfig::default();
        let work = WorkBehavior::new();
        let open = |day, hour, service, sub| {
            work.is_building_working(&config, SimTime::at(day, hour), service, sub)
        };
        use BuildingService::*;
        use BuildingSubService as Sub;

        // Single-shift office: weekday business hours only.
        assert!(open(0, 10.0, Office, Sub::None));
        assert!(!open(0, 20.0, Office, Sub::None));
        assert!(!open(5, 10.0, Office, Sub::None));

        // Two-shift commerce: early open, midnight close, weekends too.
        assert!(open(5, 10.0, Commercial, Sub::CommercialLow));
        assert!(open(0, 23.0, Commercial, Sub::CommercialLow));
        assert!(!open(0, 2.0, Commercial, Sub::CommercialLow));

        // Three-shift industry never closes.
        assert!(open(0, 3.0, Industrial, Sub::IndustrialGeneric));
        assert!(open(6, 3.0, Industrial, Sub::IndustrialGeneric));

        // Always-open services.
        assert!(open(6, 4.0, HealthCare, Sub::None));
        assert!(open(6, 4.0, PublicTransport, Sub::None));
        // Hotels run around the clock even though commerce normally closes.
        assert!(open(0, 2.0, Commercial, Sub::CommercialTourism));
    }
}
