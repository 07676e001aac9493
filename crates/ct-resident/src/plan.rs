//! Arrival consequences and the schedule builder.
//!
//! When the committed transition comes due, `state_reached` first settles
//! what *being* in the current state means (keep shopping? stay at the
//! party? leave the shelter?).  Only when that leaves no valid plan does
//! `build_schedule` compose a fresh one, in fixed priority order:
//! work, then shopping, then relaxing, then home/sleep.

use ct_agent::{ResidentState, ScheduleHint};
use ct_behavior::WorkBehavior;
use ct_core::BuildingId;

use crate::process::Processor;

impl Processor<'_> {
    /// Re-evaluate the current state now that its transition is due.
    /// Returns `false` when the schedule was invalidated and must be rebuilt.
    pub(crate) fn state_reached(&mut self) -> bool {
        use ResidentState::*;

        // A concrete committed transition takes precedence over any
        // re-evaluation; it is about to be executed as planned.
        if self.record.scheduled_state() != Unknown {
            return true;
        }

        let now = self.now();
        let cycle = self.ctx.clock.cycle_hours();
        let age = self.facts.age_group;

        match self.record.current_state {
            Unknown | InTransition => false,

            AtHome => {
                // Reaching home ends the outing; shopping fatigue resets.
                if self.record.hint == ScheduleHint::NoShoppingAnyMore {
                    self.record.hint = ScheduleHint::None;
                }
                false
            }

            // Just arrived at work (or idle there): plan the rest of the
            // working day.
            AtSchoolOrWork => {
                if !self.work.schedule_lunch(self.record, age, self.ctx, self.rng) {
                    self.work
                        .schedule_return_from_work(self.record, age, self.ctx, self.rng);
                }
                true
            }

            Shopping => {
                if self.record.hint == ScheduleHint::NoShoppingAnyMore {
                    return false;
                }
                if self
                    .rng
                    .should_occur(self.spare_time.get_shopping_chance(age))
                {
                    // Hop to another shop.
                    self.record.schedule(Shopping);
                    true
                } else {
                    self.record.hint = ScheduleHint::NoShoppingAnyMore;
                    false
                }
            }

            Relaxing => {
                if self.record.hint == ScheduleHint::AttendingEvent {
                    return self.still_attending_event();
                }
                if self.rng.should_occur(self.relaxing_chance()) {
                    // Stay put, re-check next cycle.
                    self.record.schedule_at(Unknown, now.add_hours(cycle));
                    true
                } else {
                    false
                }
            }

            Visiting => {
                if self.rng.should_occur(self.relaxing_chance()) {
                    self.record.schedule_at(Unknown, now.add_hours(cycle));
                    true
                } else {
                    false
                }
            }

            InShelter => {
                // Stay only while the shelter is actually in use.
                let building = self.facts.current_building;
                if !building.is_none() && self.ctx.buildings.is_evacuating(building) {
                    self.record.schedule_at(Unknown, now.add_hours(cycle));
                    true
                } else {
                    false
                }
            }

            // Evacuation movement is host-driven; just wait it out.
            Evacuation => {
                self.record.schedule_at(Unknown, now.add_hours(cycle));
                true
            }

            Ignored => true,
        }
    }

    /// Compose a fresh plan.  Always leaves the record with a committed
    /// transition (possibly `Unknown` at a future wake-up time).
    pub(crate) fn build_schedule(&mut self) {
        use ResidentState::*;
        let config = self.ctx.config;
        let now = self.now();
        let hour = now.hour_of_day();

        // Work first: an upcoming shift outranks every spare-time activity.
        if self.record.current_state != AtSchoolOrWork && self.work_is_imminent() {
            if self
                .work
                .schedule_go_to_work(self.record, self.facts, self.ctx, self.travel)
            {
                return;
            }
        }

        // Shopping, unless this outing is already shopped out.
        if self.record.hint != ScheduleHint::NoShoppingAnyMore {
            let chance = self.spare_time.get_shopping_chance(self.facts.age_group);
            if self.facts.needs_goods || self.rng.should_occur(chance) {
                // At night only the nearest open shop is worth the trip.
                self.record.hint = if config.is_night_hour(hour) {
                    ScheduleHint::LocalShoppingOnly
                } else {
                    ScheduleHint::None
                };
                self.record.schedule(Shopping);
                return;
            }
        }

        // Relaxing: a scheduled city event if one fits, else the usual spots.
        if self.rng.should_occur(self.relaxing_chance()) {
            let horizon = now.add_hours(config.event_horizon_hours);
            if let Some((building, start)) = self.ctx.events.attendable_event(
                now,
                horizon,
                self.facts.age_group,
                self.facts.gender,
            ) {
                let travel_time = self.travel.estimated_travel_time(
                    config,
                    self.ctx.buildings,
                    self.search_origin(),
                    building,
                );
                self.record.event_building = building;
                self.record.hint = ScheduleHint::AttendingEvent;
                let departure = start.add_hours(-(travel_time + self.ctx.clock.cycle_hours()));
                self.record.schedule_at(Relaxing, departure);
            } else {
                self.record.schedule(Relaxing);
            }
            return;
        }

        // Nothing to do: head home, or sleep/idle if already there.
        if self.facts.location != ct_world::CitizenLocation::Home {
            self.record.schedule(AtHome);
        } else {
            let next = if config.is_night_hour(hour) {
                if hour < config.wake_up_hour {
                    now.with_hour_of_day(config.wake_up_hour)
                } else {
                    now.next_day_start().with_hour_of_day(config.wake_up_hour)
                }
            } else {
                now.add_hours(self.ctx.clock.cycle_hours())
            };
            self.record.schedule_at(Unknown, next);
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn relaxing_chance(&self) -> u32 {
        self.spare_time.get_relaxing_chance(
            self.facts.age_group,
            self.record.work_shift,
            self.record.work_status == ct_agent::WorkStatus::OnVacation,
        )
    }

    /// Commit to a commute only when the next shift starts inside the
    /// planning horizon; an evening is not spent waiting for tomorrow's
    /// 9 o'clock shift.
    fn work_is_imminent(&self) -> bool {
        if self.record.work_building.is_none()
            || self.record.work_status != ct_agent::WorkStatus::Working
        {
            return false;
        }
        let now = self.now();
        let start = WorkBehavior::next_shift_start(now, self.record);
        start.hours_since(now) <= self.ctx.config.event_horizon_hours
    }

    /// Keep waiting for / sitting in an event that is still on.
    fn still_attending_event(&mut self) -> bool {
        use ct_world::EventState::*;
        let event = self.record.event_building;
        let live = !event.is_none()
            && matches!(self.ctx.events.event_state(event), Preparing | Ongoing);
        if live {
            let next = self.now().add_hours(self.ctx.clock.cycle_hours());
            self.record.schedule_at(ResidentState::Unknown, next);
            true
        } else {
            self.record.event_building = BuildingId::NONE;
            self.record.hint = ScheduleHint::None;
            false
        }
    }
}
