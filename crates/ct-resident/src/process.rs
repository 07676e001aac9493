//! The per-tick processing pipeline for one citizen.
//!
//! `Processor` bundles the mutable slot state (record, RNG) with the
//! read-only behavior engines and world context for the duration of a single
//! `update_location` call.  The pipeline is a fixed, non-recursive sequence:
//! validate, derive the current state from ground truth, handle transit,
//! then fire the committed transition if it is due.

use ct_core::{CitizenId, CitizenRng, SimTime};
use ct_agent::{ResidentState, ScheduleRecord};
use ct_behavior::{SpareTimeBehavior, TravelBehavior, WorkBehavior};
use ct_world::{
    Action, BuildingService, BuildingSubService, CitizenFacts, CitizenLocation, WorldContext,
};

/// Everything one `update_location` call may touch, exclusive or shared.
pub(crate) struct Processor<'a> {
    pub citizen: CitizenId,
    pub record: &'a mut ScheduleRecord,
    pub rng: &'a mut CitizenRng,
    pub work: &'a WorkBehavior,
    pub spare_time: &'a SpareTimeBehavior,
    pub travel: &'a TravelBehavior,
    pub facts: &'a CitizenFacts,
    pub ctx: &'a WorldContext<'a>,
    pub actions: Vec<Action>,
}

impl Processor<'_> {
    /// Run the full pipeline and return the actions for the host to apply.
    pub fn run(mut self) -> Vec<Action> {
        // Terminal until external ground truth changes; nothing to do.
        if self.record.current_state == ResidentState::Ignored {
            return self.actions;
        }

        // A completed move-in: the host re-registers the citizen from
        // scratch, so the old slot contents are meaningless.
        if self.facts.moving_in && self.facts.location == CitizenLocation::Home {
            self.record.reset();
            self.actions.push(Action::Release);
            return self.actions;
        }

        if self.facts.dead {
            self.process_death();
            return self.actions;
        }
        if self.facts.sick && self.facts.location != CitizenLocation::Moving {
            self.actions.push(Action::SeekMedicalCare);
            self.force_unknown();
            return self.actions;
        }
        if self.facts.arrested {
            self.process_arrest();
            return self.actions;
        }

        match self.derive_state() {
            Ok(state) => self.record.current_state = state,
            Err(reason) => {
                log::warn!("citizen {}: corrupt ground truth ({reason}), releasing", self.citizen);
                self.record.reset();
                self.actions.push(Action::Release);
                return self.actions;
            }
        }

        // Job changes arrive through ground truth; re-derive shift parameters
        // before any scheduling decision uses them.
        if self.record.work_building != self.facts.work_building {
            self.work
                .update_work_shift(self.record, self.facts, self.ctx, self.rng);
        }

        if self.record.current_state == ResidentState::InTransition {
            if !self.process_moving() {
                // Still under way; transitions fire on arrival.
                return self.actions;
            }
            // The trip was cancelled; fall through and re-plan immediately.
        }

        if !self.record.is_due(self.now()) {
            return self.actions;
        }

        if !self.state_reached() {
            self.build_schedule();
        }
        // The builder may have committed a transition for later today.
        if self.record.is_due(self.now()) {
            self.execute_scheduled();
        }
        self.actions
    }

    // ── Shared helpers ────────────────────────────────────────────────────

    #[inline]
    pub(crate) fn now(&self) -> SimTime {
        self.ctx.clock.now()
    }

    /// The building to measure distances from: where the citizen stands, or
    /// its home when it is outside any building.
    pub(crate) fn search_origin(&self) -> ct_core::BuildingId {
        if self.facts.current_building.is_none() {
            self.facts.home_building
        } else {
            self.facts.current_building
        }
    }

    /// Virtual-citizen rule: no realized instance and the host declines to
    /// realize one means transitions are applied without real movement.
    pub(crate) fn is_virtual(&self) -> bool {
        !self.facts.has_instance && !self.ctx.realize.should_realize(self.citizen)
    }

    fn force_unknown(&mut self) {
        self.record.schedule(ResidentState::Unknown);
        self.record.current_state = ResidentState::Unknown;
    }

    // ── Exceptional ground truth ──────────────────────────────────────────

    /// Detach a dead citizen from its relationships and get the body
    /// collected, unless it already lies in a care building.
    fn process_death(&mut self) {
        use CitizenLocation::*;
        match self.facts.location {
            Home | Moving => {
                self.actions.push(Action::ClearWorkplace);
                self.actions.push(Action::ClearVisit);
            }
            Work => self.actions.push(Action::ClearVisit),
            Visit => self.actions.push(Action::ClearWorkplace),
        }

        let building = self.facts.current_building;
        let in_care = !building.is_none()
            && matches!(
                self.ctx.buildings.service(building),
                BuildingService::HealthCare | BuildingService::Disaster
            );
        if !in_care {
            self.actions.push(Action::RequestHospitalPickup);
        }
        self.force_unknown();
    }

    /// An arrested citizen held at a police building stays put; anywhere
    /// else the sentence is considered served.
    fn process_arrest(&mut self) {
        let building = self.facts.current_building;
        let in_custody = !building.is_none()
            && self.ctx.buildings.service(building) == BuildingService::Police;
        if !in_custody {
            self.actions.push(Action::ClearArrested);
            self.force_unknown();
        }
    }

    // ── State derivation ──────────────────────────────────────────────────

    /// Map ground truth onto a logical state.  `Err` marks inconsistencies
    /// that can only come from corrupt host data.
    fn derive_state(&self) -> Result<ResidentState, &'static str> {
        use ResidentState::*;
        let facts = self.facts;
        let buildings = self.ctx.buildings;

        match facts.location {
            CitizenLocation::Moving => {
                if !facts.has_instance && !facts.has_vehicle {
                    return Err("moving with neither instance nor vehicle");
                }
                Ok(InTransition)
            }
            CitizenLocation::Home => {
                if facts.home_building.is_none() {
                    return Err("at home without a home building");
                }
                if facts.current_building.is_none() {
                    return Ok(Unknown);
                }
                if buildings.is_evacuating(facts.current_building) {
                    return Ok(Evacuation);
                }
                Ok(AtHome)
            }
            CitizenLocation::Work => {
                if facts.current_building.is_none() {
                    return Ok(Unknown);
                }
                if buildings.is_evacuating(facts.current_building) {
                    return Ok(Evacuation);
                }
                Ok(AtSchoolOrWork)
            }
            CitizenLocation::Visit => {
                let building = facts.current_building;
                if building.is_none() {
                    return Ok(Unknown);
                }
                if buildings.is_evacuating(building) {
                    return Ok(Evacuation);
                }
                Ok(match buildings.service(building) {
                    BuildingService::Commercial => {
                        if buildings.sub_service(building) == BuildingSubService::CommercialLeisure
                        {
                            Relaxing
                        } else {
                            Shopping
                        }
                    }
                    BuildingService::Beautification
                    | BuildingService::Monument
                    | BuildingService::Tourism => Relaxing,
                    BuildingService::Disaster => InShelter,
                    _ => Visiting,
                })
            }
        }
    }
}
