//! Read-only capability traits the host implements once.
//!
//! Each trait is deliberately narrow: the engine asks only what it needs to
//! make schedule decisions, and all methods are cheap lookups — the per-tick
//! budget is a handful of calls per citizen at tens-of-thousands scale.

use ct_core::{BuildingId, CitizenId, SimTime};

use crate::{AgeGroup, BuildingService, BuildingSubService, EventState, Gender};

/// Building classification and proximity queries.
///
/// `Sync` because the host's agent-partitioned parallel sweep shares one
/// context across workers; implementations must be safe for concurrent
/// read-only access.
pub trait BuildingQuery: Sync {
    fn service(&self, building: BuildingId) -> BuildingService;

    fn sub_service(&self, building: BuildingId) -> BuildingSubService;

    /// `false` for abandoned, collapsed, or switched-off buildings.
    fn is_active(&self, building: BuildingId) -> bool;

    /// The building (or its district) is being evacuated.
    fn is_evacuating(&self, building: BuildingId) -> bool;

    /// Night-time noise restrictions currently silence this building.
    fn is_noise_restricted(&self, building: BuildingId) -> bool;

    /// Straight-line distance between two buildings in metres.
    fn distance(&self, a: BuildingId, b: BuildingId) -> f32;

    /// Nearest active building of `service` reachable from `from`, optionally
    /// limited to `max_distance` metres.  Candidates must also pass `accept`;
    /// the engine uses it for opening hours, sub-service, and noise rules,
    /// which only it can judge.  `None` when nothing qualifies.
    fn find_nearest_active(
        &self,
        from: BuildingId,
        service: BuildingService,
        max_distance: Option<f32>,
        accept: &dyn Fn(BuildingId) -> bool,
    ) -> Option<BuildingId>;
}

/// Scheduled city-event queries.  `Sync` for the same reason as
/// [`BuildingQuery`].
pub trait EventQuery: Sync {
    /// An upcoming event this citizen could attend, starting inside the
    /// given window.  The host applies its own accept-attendee rules
    /// (capacity, demographics) before answering.
    fn attendable_event(
        &self,
        start_after: SimTime,
        start_before: SimTime,
        age: AgeGroup,
        gender: Gender,
    ) -> Option<(BuildingId, SimTime)>;

    /// Event lifecycle state at `building`.
    fn event_state(&self, building: BuildingId) -> EventState;
}

/// Decides whether a citizen without a visual instance should be realized
/// for its next movement, or processed as a virtual citizen (schedule
/// transitions applied, no real movement issued).
pub trait RealizePolicy: Sync {
    fn should_realize(&self, citizen: CitizenId) -> bool;
}

/// A [`RealizePolicy`] that realizes everyone — full-fidelity simulation.
pub struct AlwaysRealize;

impl RealizePolicy for AlwaysRealize {
    #[inline]
    fn should_realize(&self, _citizen: CitizenId) -> bool {
        true
    }
}
