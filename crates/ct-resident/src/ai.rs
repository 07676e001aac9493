//! `ResidentAi` — the engine façade the host embeds.

use ct_core::{CitizenId, CitizenRng, Clock, CtResult, ScheduleConfig, SimTime};
use ct_agent::{ResidentState, ScheduleArena, ScheduleRecord, WorkShift, WorkStatus};
use ct_behavior::{SpareTimeBehavior, TravelBehavior, WorkBehavior};
use ct_world::{Action, CitizenFacts, CitizenLocation, WorldContext};

use crate::process::Processor;

/// The per-citizen daily-schedule engine.
///
/// Owns the schedule arena, one deterministic RNG per citizen slot, and the
/// three behavior engines.  The host drives it with four kinds of calls:
///
/// - [`update_location`](Self::update_location) once per live citizen per
///   tick,
/// - [`begin_new_cycle`](Self::begin_new_cycle) once per simulation cycle
///   *before* any citizen of that cycle (the phase barrier for the shared
///   probability tables),
/// - [`begin_new_day`](Self::begin_new_day) at every simulated midnight,
/// - the arrival/departure/transport notifications as movement events occur.
pub struct ResidentAi {
    config: ScheduleConfig,
    arena: ScheduleArena,
    rngs: Vec<CitizenRng>,
    work: WorkBehavior,
    spare_time: SpareTimeBehavior,
    travel: TravelBehavior,
}

impl ResidentAi {
    /// Build an engine for `capacity` citizen slots.
    ///
    /// Fails fast on an invalid configuration; everything else is allocated
    /// up front so the per-tick path never touches the allocator.
    pub fn new(config: ScheduleConfig, capacity: usize, cycle_hours: f32) -> CtResult<Self> {
        config.validate()?;
        let rngs = (0..capacity)
            .map(|i| CitizenRng::new(config.seed, CitizenId(i as u32)))
            .collect();
        let travel = TravelBehavior::new(&config, cycle_hours);
        Ok(Self {
            arena: ScheduleArena::new(capacity),
            rngs,
            work: WorkBehavior::new(),
            spare_time: SpareTimeBehavior::new(),
            travel,
            config,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    #[inline]
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    // ── Per-tick processing ───────────────────────────────────────────────

    /// Process one citizen for this tick and return the actions the host
    /// must apply.
    ///
    /// `facts == None` marks an empty slot: the record is zeroed and no
    /// actions are produced.  Panics on an out-of-range `citizen` (caller
    /// bug, fail fast).
    pub fn update_location(
        &mut self,
        citizen: CitizenId,
        facts: Option<&CitizenFacts>,
        ctx: &WorldContext<'_>,
    ) -> Vec<Action> {
        let record = self.arena.get_mut(citizen);
        let Some(facts) = facts else {
            record.reset();
            return Vec::new();
        };
        Processor {
            citizen,
            record,
            rng: &mut self.rngs[citizen.index()],
            work: &self.work,
            spare_time: &self.spare_time,
            travel: &self.travel,
            facts,
            ctx,
            actions: Vec::new(),
        }
        .run()
    }

    /// Sweep the whole population in parallel, one disjoint slice of slots
    /// per worker.  `facts_of` returning `None` skips the slot untouched.
    #[cfg(feature = "parallel")]
    pub fn update_all<F>(
        &mut self,
        facts_of: F,
        ctx: &WorldContext<'_>,
    ) -> Vec<(CitizenId, Vec<Action>)>
    where
        F: Fn(CitizenId) -> Option<CitizenFacts> + Sync,
    {
        use rayon::prelude::*;

        let work = &self.work;
        let spare_time = &self.spare_time;
        let travel = &self.travel;

        self.arena
            .records_mut()
            .par_iter_mut()
            .zip(self.rngs.par_iter_mut())
            .enumerate()
            .filter_map(|(index, (record, rng))| {
                let citizen = CitizenId(index as u32);
                let facts = facts_of(citizen)?;
                let actions = Processor {
                    citizen,
                    record,
                    rng,
                    work,
                    spare_time,
                    travel,
                    facts: &facts,
                    ctx,
                    actions: Vec::new(),
                }
                .run();
                if actions.is_empty() {
                    None
                } else {
                    Some((citizen, actions))
                }
            })
            .collect()
    }

    // ── Movement notifications ────────────────────────────────────────────

    /// The citizen finished a journey.  Folds a completed commute into the
    /// travel-time estimate and triggers the purchase on shopping arrivals.
    pub fn register_citizen_arrival(
        &mut self,
        citizen: CitizenId,
        facts: &CitizenFacts,
        ctx: &WorldContext<'_>,
    ) -> Vec<Action> {
        let now = ctx.clock.now();
        let record = self.arena.get_mut(citizen);
        record.departure_time = SimTime::UNSET;

        let mut actions = Vec::new();
        match facts.location {
            CitizenLocation::Work => {
                record.update_travel_time_to_work(now, ctx.config.max_travel_time);
                record.departure_to_work_time = SimTime::UNSET;
            }
            CitizenLocation::Visit => {
                let building = facts.current_building;
                if facts.needs_goods
                    && !building.is_none()
                    && ctx.buildings.service(building) == ct_world::BuildingService::Commercial
                {
                    actions.push(Action::BuyGoods {
                        building,
                        amount: ctx.config.shopping_goods,
                    });
                }
            }
            _ => {}
        }
        actions
    }

    /// The citizen left a building and started moving.
    pub fn register_citizen_departure(&mut self, citizen: CitizenId, ctx: &WorldContext<'_>) {
        let record = self.arena.get_mut(citizen);
        if record.departure_time.is_unset() {
            record.departure_time = ctx.clock.now();
        }
    }

    /// Check a citizen stuck at a stop.  After `abandon_transport_wait`
    /// hours without a ride the journey is abandoned and the host should
    /// settle the citizen at home.
    pub fn process_waiting_for_transport(
        &mut self,
        citizen: CitizenId,
        facts: &CitizenFacts,
        ctx: &WorldContext<'_>,
    ) -> Option<Action> {
        if facts.location != CitizenLocation::Moving || facts.has_vehicle {
            return None;
        }
        let now = ctx.clock.now();
        let record = self.arena.get_mut(citizen);
        if record.departure_time.is_unset() {
            record.departure_time = now;
            return None;
        }
        if now.hours_since(record.departure_time) < ctx.config.abandon_transport_wait {
            return None;
        }
        record.departure_time = SimTime::UNSET;
        record.departure_to_work_time = SimTime::UNSET;
        record.schedule(ResidentState::Unknown);
        Some(Action::AbandonJourney)
    }

    // ── Population boundaries ─────────────────────────────────────────────

    /// Midnight pass: vacation countdowns, stochastic vacation starts, and
    /// per-day hint resets.
    pub fn begin_new_day(&mut self) {
        for (index, record) in self.arena.records_mut().iter_mut().enumerate() {
            if record.hint == ct_agent::ScheduleHint::NoShoppingAnyMore {
                record.hint = ct_agent::ScheduleHint::None;
            }
            match record.work_status {
                WorkStatus::OnVacation => {
                    if record.vacation_days_left <= 1 {
                        record.vacation_days_left = 0;
                        record.work_status = WorkStatus::Working;
                    } else {
                        record.vacation_days_left -= 1;
                    }
                }
                WorkStatus::Working if record.work_shift != WorkShift::Unemployed => {
                    let rng = &mut self.rngs[index];
                    if rng.should_occur(self.config.vacation_chance) {
                        record.work_status = WorkStatus::OnVacation;
                        record.vacation_days_left =
                            rng.gen_range(1..=self.config.max_vacation_days);
                    }
                }
                _ => {}
            }
        }
    }

    /// Cycle pass: rebuild the spare-time tables and recalibrate travel.
    /// Must complete before any `update_location` call of the same cycle.
    pub fn begin_new_cycle(&mut self, clock: &Clock) {
        self.spare_time.refresh_chances(clock, &self.config);
        self.travel.synchronize(&self.config, clock.cycle_hours());
    }

    // ── Record access ─────────────────────────────────────────────────────

    /// Read a citizen's schedule record (UI, debugging, save wiring).
    pub fn schedule(&self, citizen: CitizenId) -> CtResult<&ScheduleRecord> {
        self.arena.try_get(citizen)
    }

    /// Mutable access to a citizen's schedule record.
    pub fn schedule_mut(&mut self, citizen: CitizenId) -> CtResult<&mut ScheduleRecord> {
        self.arena.try_get_mut(citizen)
    }

    /// Park a slot in the terminal `Ignored` state; the engine skips it
    /// until the record is reset externally.
    pub fn ignore(&mut self, citizen: CitizenId) {
        let record = self.arena.get_mut(citizen);
        record.reset();
        record.current_state = ResidentState::Ignored;
    }

    /// The whole schedule arena, for persistence.
    #[inline]
    pub fn arena(&self) -> &ScheduleArena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut ScheduleArena {
        &mut self.arena
    }
}
