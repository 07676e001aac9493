//! `StubWorld` — an in-memory host implementation for tests.
//!
//! Behavior and state-machine tests need a world that answers building and
//! event queries deterministically without dragging in a real city
//! simulation.  `StubWorld` keeps everything in FxHashMaps keyed by building
//! ID and computes distances on a flat plane.

use ct_core::{BuildingId, CitizenId, SimTime};
use rustc_hash::FxHashMap;

use crate::{
    AgeGroup, BuildingQuery, BuildingService, BuildingSubService, EventQuery, EventState, Gender,
    RealizePolicy,
};

struct StubBuilding {
    service: BuildingService,
    sub_service: BuildingSubService,
    position: (f32, f32),
    active: bool,
    evacuating: bool,
    noise_restricted: bool,
}

struct StubEvent {
    building: BuildingId,
    start: SimTime,
    adults_only: bool,
}

/// Deterministic in-memory world.
#[derive(Default)]
pub struct StubWorld {
    buildings: FxHashMap<BuildingId, StubBuilding>,
    event_states: FxHashMap<BuildingId, EventState>,
    events: Vec<StubEvent>,
    realize_nobody: bool,
}

impl StubWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building at a flat-plane position.
    pub fn add_building(
        &mut self,
        id: BuildingId,
        service: BuildingService,
        sub_service: BuildingSubService,
        position: (f32, f32),
    ) {
        self.buildings.insert(
            id,
            StubBuilding {
                service,
                sub_service,
                position,
                active: true,
                evacuating: false,
                noise_restricted: false,
            },
        );
    }

    pub fn set_active(&mut self, id: BuildingId, active: bool) {
        if let Some(b) = self.buildings.get_mut(&id) {
            b.active = active;
        }
    }

    pub fn set_evacuating(&mut self, id: BuildingId, evacuating: bool) {
        if let Some(b) = self.buildings.get_mut(&id) {
            b.evacuating = evacuating;
        }
    }

    pub fn set_noise_restricted(&mut self, id: BuildingId, restricted: bool) {
        if let Some(b) = self.buildings.get_mut(&id) {
            b.noise_restricted = restricted;
        }
    }

    /// Announce an upcoming event at `building`.
    pub fn add_event(&mut self, building: BuildingId, start: SimTime, adults_only: bool) {
        self.events.push(StubEvent {
            building,
            start,
            adults_only,
        });
        self.event_states.insert(building, EventState::Preparing);
    }

    pub fn set_event_state(&mut self, building: BuildingId, state: EventState) {
        self.event_states.insert(building, state);
    }

    /// Make `should_realize` answer `false` for everyone (virtual citizens).
    pub fn set_realize_nobody(&mut self, realize_nobody: bool) {
        self.realize_nobody = realize_nobody;
    }
}

impl BuildingQuery for StubWorld {
    fn service(&self, building: BuildingId) -> BuildingService {
        self.buildings
            .get(&building)
            .map_or(BuildingService::None, |b| b.service)
    }

    fn sub_service(&self, building: BuildingId) -> BuildingSubService {
        self.buildings
            .get(&building)
            .map_or(BuildingSubService::None, |b| b.sub_service)
    }

    fn is_active(&self, building: BuildingId) -> bool {
        self.buildings.get(&building).is_some_and(|b| b.active)
    }

    fn is_evacuating(&self, building: BuildingId) -> bool {
        self.buildings.get(&building).is_some_and(|b| b.evacuating)
    }

    fn is_noise_restricted(&self, building: BuildingId) -> bool {
        self.buildings
            .get(&building)
            .is_some_and(|b| b.noise_restricted)
    }

    fn distance(&self, a: BuildingId, b: BuildingId) -> f32 {
        match (self.buildings.get(&a), self.buildings.get(&b)) {
            (Some(a), Some(b)) => {
                let dx = a.position.0 - b.position.0;
                let dy = a.position.1 - b.position.1;
                (dx * dx + dy * dy).sqrt()
            }
            _ => f32::INFINITY,
        }
    }

    fn find_nearest_active(
        &self,
        from: BuildingId,
        service: BuildingService,
        max_distance: Option<f32>,
        accept: &dyn Fn(BuildingId) -> bool,
    ) -> Option<BuildingId> {
        let origin = self.buildings.get(&from)?.position;
        let limit = max_distance.unwrap_or(f32::INFINITY);

        let mut best: Option<(BuildingId, f32)> = None;
        for (&id, b) in &self.buildings {
            if id == from || b.service != service || !b.active || b.evacuating || !accept(id) {
                continue;
            }
            let dx = b.position.0 - origin.0;
            let dy = b.position.1 - origin.1;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > limit {
                continue;
            }
            // Tie-break on ID so iteration order can't change the answer.
            let better = match best {
                None => true,
                Some((best_id, best_dist)) => {
                    dist < best_dist || (dist == best_dist && id < best_id)
                }
            };
            if better {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl EventQuery for StubWorld {
    fn attendable_event(
        &self,
        start_after: SimTime,
        start_before: SimTime,
        age: AgeGroup,
        _gender: Gender,
    ) -> Option<(BuildingId, SimTime)> {
        self.events
            .iter()
            .filter(|e| e.start > start_after && e.start <= start_before)
            .filter(|e| !(e.adults_only && age.is_student()))
            .min_by_key(|e| (e.start, e.building))
            .map(|e| (e.building, e.start))
    }

    fn event_state(&self, building: BuildingId) -> EventState {
        self.event_states
            .get(&building)
            .copied()
            .unwrap_or(EventState::None)
    }
}

impl RealizePolicy for StubWorld {
    fn should_realize(&self, _citizen: CitizenId) -> bool {
        !self.realize_nobody
    }
}
