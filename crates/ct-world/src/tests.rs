//! Unit tests for ct-world.

use ct_core::{BuildingId, SimTime};

use crate::{
    AgeGroup, BuildingQuery, BuildingService, BuildingSubService, EventQuery, EventState, Gender,
    StubWorld,
};

fn shop_grid() -> StubWorld {
    let mut world = StubWorld::new();
    world.add_building(
        BuildingId(1),
        BuildingService::Residential,
        BuildingSubService::None,
        (0.0, 0.0),
    );
    world.add_building(
        BuildingId(2),
        BuildingService::Commercial,
        BuildingSubService::CommercialLow,
        (100.0, 0.0),
    );
    world.add_building(
        BuildingId(3),
        BuildingService::Commercial,
        BuildingSubService::CommercialHigh,
        (400.0, 0.0),
    );
    world
}

mod age_groups {
    use super::*;

    #[test]
    fn classification() {
        assert!(AgeGroup::Child.is_student());
        assert!(AgeGroup::Teen.is_student());
        assert!(!AgeGroup::Adult.is_student());
        assert!(AgeGroup::Young.is_working_age());
        assert!(AgeGroup::Adult.is_working_age());
        assert!(!AgeGroup::Senior.is_working_age());
        assert_eq!(AgeGroup::ALL.len(), AgeGroup::COUNT);
    }
}

mod stub_buildings {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let world = shop_grid();
        assert!((world.distance(BuildingId(1), BuildingId(2)) - 100.0).abs() < 1e-3);
        assert!(world.distance(BuildingId(1), BuildingId(99)).is_infinite());
    }

    #[test]
    fn nearest_active_prefers_closest() {
        let world = shop_grid();
        let found =
            world.find_nearest_active(BuildingId(1), BuildingService::Commercial, None, &|_| true);
        assert_eq!(found, Some(BuildingId(2)));
    }

    #[test]
    fn nearest_respects_max_distance() {
        let world = shop_grid();
        let found = world.find_nearest_active(
            BuildingId(1),
            BuildingService::Commercial,
            Some(50.0),
            &|_| true,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn nearest_skips_inactive_and_evacuating() {
        let mut world = shop_grid();
        world.set_active(BuildingId(2), false);
        assert_eq!(
            world.find_nearest_active(BuildingId(1), BuildingService::Commercial, None, &|_| true),
            Some(BuildingId(3))
        );
        world.set_evacuating(BuildingId(3), true);
        assert_eq!(
            world.find_nearest_active(BuildingId(1), BuildingService::Commercial, None, &|_| true),
            None
        );
    }

    #[test]
    fn nearest_honours_the_caller_filter() {
        let world = shop_grid();
        // Rejecting the closest candidate promotes the next one.
        let found = world.find_nearest_active(
            BuildingId(1),
            BuildingService::Commercial,
            None,
            &|id| id != BuildingId(2),
        );
        assert_eq!(found, Some(BuildingId(3)));
        // A filter that rejects everything finds nothing.
        let found =
            world.find_nearest_active(BuildingId(1), BuildingService::Commercial, None, &|_| false);
        assert_eq!(found, None);
    }
}

mod stub_events {
    use super::*;

    #[test]
    fn window_and_demographics() {
        let mut world = shop_grid();
        world.add_event(BuildingId(3), SimTime::at(0, 20.0), true);

        let found = world.attendable_event(
            SimTime::at(0, 12.0),
            SimTime::at(0, 23.0),
            AgeGroup::Adult,
            Gender::Female,
        );
        assert_eq!(found, Some((BuildingId(3), SimTime::at(0, 20.0))));

        // Teens are turned away from adults-only events.
        let denied = world.attendable_event(
            SimTime::at(0, 12.0),
            SimTime::at(0, 23.0),
            AgeGroup::Teen,
            Gender::Male,
        );
        assert_eq!(denied, None);

        // Outside the window.
        let outside = world.attendable_event(
            SimTime::at(0, 21.0),
            SimTime::at(0, 23.0),
            AgeGroup::Adult,
            Gender::Male,
        );
        assert_eq!(outside, None);
    }

    #[test]
    fn event_state_defaults_to_none() {
        let mut world = shop_grid();
        assert_eq!(world.event_state(BuildingId(2)), EventState::None);
        world.add_event(BuildingId(2), SimTime::at(0, 19.0), false);
        assert_eq!(world.event_state(BuildingId(2)), EventState::Preparing);
        world.set_event_state(BuildingId(2), EventState::Finished);
        assert_eq!(world.event_state(BuildingId(2)), EventState::Finished);
    }
}
