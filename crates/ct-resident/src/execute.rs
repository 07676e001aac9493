//! Executing the committed transition: resolving a concrete destination and
//! emitting the movement action for the host.
//!
//! Every issued movement rotates the schedule to `Unknown` so the arrival
//! pass re-evaluates from scratch; exceptions (lunch) immediately commit the
//! follow-up transition on top.

use ct_agent::{ResidentState, ScheduleHint};
use ct_core::{BuildingId, SimTime};
use ct_world::{Action, BuildingService, BuildingSubService, CitizenLocation, EventState};

use crate::process::Processor;

impl Processor<'_> {
    pub(crate) fn execute_scheduled(&mut self) {
        use ResidentState::*;
        match self.record.scheduled_state() {
            AtHome => self.execute_home(),
            AtSchoolOrWork => self.execute_work(),
            Shopping => self.execute_shopping(),
            Relaxing => self.execute_relaxing(),
            Visiting => self.execute_visit(),
            InShelter => self.execute_shelter(),
            // Nothing to carry out: idle, terminal, or host-driven movement.
            Unknown | Ignored | InTransition | Evacuation => {}
        }
    }

    // ── Destinations ──────────────────────────────────────────────────────

    fn execute_home(&mut self) {
        if self.facts.location == CitizenLocation::Home {
            self.record.schedule(ResidentState::Unknown);
            return;
        }
        let virtually = self.is_virtual();
        self.actions.push(Action::GoHome { virtually });
        self.record.departure_time = self.now();
        self.record.schedule(ResidentState::Unknown);
    }

    fn execute_work(&mut self) {
        let work = self.record.work_building;
        if work.is_none() {
            self.record.schedule(ResidentState::Unknown);
            return;
        }
        if self.facts.current_building == work {
            // Already on site; the arrival pass plans lunch/return.
            self.record.schedule(ResidentState::Unknown);
            return;
        }
        self.record.departure_to_work_time = self.now();
        self.depart_to(work);
    }

    fn execute_shopping(&mut self) {
        let config = self.ctx.config;
        let lunch_break = self.record.current_state == ResidentState::AtSchoolOrWork;

        let limit = if self.record.hint == ScheduleHint::LocalShoppingOnly {
            Some(config.local_search_distance)
        } else {
            None
        };
        let target = self.find_open_destination(BuildingService::Commercial, limit, None);

        match target {
            Some(shop) => {
                self.depart_to(shop);
                if lunch_break {
                    // Commit the way back before the citizen even leaves.
                    self.work.schedule_return_from_lunch(self.record, self.ctx);
                }
            }
            None if lunch_break => {
                // No shop near the workplace; skip lunch, stay on site.
                self.work.schedule_return_from_lunch(self.record, self.ctx);
            }
            None => {
                // Nothing in range: the outing is over, head home instead.
                self.record.hint = ScheduleHint::None;
                self.record.schedule(ResidentState::AtHome);
                self.execute_home();
            }
        }
    }

    fn execute_relaxing(&mut self) {
        if self.record.hint == ScheduleHint::AttendingEvent {
            let event = self.record.event_building;
            let live = !event.is_none()
                && matches!(
                    self.ctx.events.event_state(event),
                    EventState::Preparing | EventState::Ongoing
                );
            if live {
                self.depart_to(event);
                return;
            }
            self.record.event_building = BuildingId::NONE;
            self.record.hint = ScheduleHint::None;
        }

        // Parks first; after they close, only leisure commerce qualifies — a
        // goods shop is not a place to relax.
        let target = self
            .find_open_destination(BuildingService::Beautification, None, None)
            .or_else(|| {
                self.find_open_destination(
                    BuildingService::Commercial,
                    None,
                    Some(BuildingSubService::CommercialLeisure),
                )
            });
        match target {
            Some(spot) => self.depart_to(spot),
            None => {
                self.record.schedule(ResidentState::AtHome);
                self.execute_home();
            }
        }
    }

    fn execute_visit(&mut self) {
        let visit = self.facts.visit_building;
        if visit.is_none() || self.facts.current_building == visit {
            self.record.schedule(ResidentState::Unknown);
            return;
        }
        self.depart_to(visit);
    }

    fn execute_shelter(&mut self) {
        // Shelters take people in at any hour.
        let target = self.ctx.buildings.find_nearest_active(
            self.search_origin(),
            BuildingService::Disaster,
            None,
            &|_| true,
        );
        match target {
            Some(shelter) => self.depart_to(shelter),
            None => {
                self.record.schedule(ResidentState::AtHome);
                self.execute_home();
            }
        }
    }

    /// Nearest active building of `service` that is open to visitors right
    /// now.  Noise-restricted buildings are skipped; `sub_service` narrows
    /// the match when only a specific kind of venue will do.
    fn find_open_destination(
        &self,
        service: BuildingService,
        max_distance: Option<f32>,
        sub_service: Option<BuildingSubService>,
    ) -> Option<BuildingId> {
        let buildings = self.ctx.buildings;
        let config = self.ctx.config;
        let now = self.now();
        buildings.find_nearest_active(self.search_origin(), service, max_distance, &|id| {
            let sub = buildings.sub_service(id);
            if sub_service.is_some_and(|wanted| sub != wanted) {
                return false;
            }
            self.work.is_building_working(config, now, service, sub)
                && !buildings.is_noise_restricted(id)
        })
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Issue the movement toward `building` and rotate the schedule so the
    /// arrival pass re-evaluates.
    fn depart_to(&mut self, building: BuildingId) {
        let virtually = self.is_virtual();
        self.actions.push(Action::GoTo {
            building,
            virtually,
        });
        self.record.departure_time = self.now();
        if building != self.record.work_building {
            self.record.departure_to_work_time = SimTime::UNSET;
        }
        self.record.schedule(ResidentState::Unknown);
    }
}
