//! Read-only world snapshot passed into every per-citizen call.

use ct_core::{Clock, ScheduleConfig};

use crate::{BuildingQuery, EventQuery, RealizePolicy};

/// Borrowed bundle of everything the engine may read while processing one
/// citizen: the clock, the config, and the host's query capabilities.
///
/// Built once per tick by the host and shared (immutably) across all
/// per-citizen calls that tick.  No mutation happens through this type, so
/// the host's agent-partitioned parallel scheme can share one context.
pub struct WorldContext<'a> {
    pub clock: &'a Clock,
    pub config: &'a ScheduleConfig,
    pub buildings: &'a dyn BuildingQuery,
    pub events: &'a dyn EventQuery,
    pub realize: &'a dyn RealizePolicy,
}

impl<'a> WorldContext<'a> {
    pub fn new(
        clock: &'a Clock,
        config: &'a ScheduleConfig,
        buildings: &'a dyn BuildingQuery,
        events: &'a dyn EventQuery,
        realize: &'a dyn RealizePolicy,
    ) -> Self {
        Self {
            clock,
            config,
            buildings,
            events,
            realize,
        }
    }
}
