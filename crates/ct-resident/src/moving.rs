//! In-transition handling.
//!
//! While a citizen is travelling the engine mostly waits for arrival, but a
//! few situations make the current trip pointless and warrant cancelling
//! the committed transition so the planner runs again right away.

use ct_agent::{ResidentState, ScheduleHint};
use ct_world::EventState;

use crate::process::Processor;

impl Processor<'_> {
    /// Returns `true` when the trip was cancelled and the schedule must be
    /// rebuilt this tick; `false` to keep travelling.
    pub(crate) fn process_moving(&mut self) -> bool {
        // Guided tours are externally driven from start to finish.
        if self.record.hint == ScheduleHint::OnTour {
            return false;
        }

        match self.record.scheduled_state() {
            // Commuting toward a workplace that is being evacuated.
            ResidentState::AtSchoolOrWork => {
                let work = self.record.work_building;
                if !work.is_none() && self.ctx.buildings.is_evacuating(work) {
                    self.cancel_trip();
                    return true;
                }
            }
            // Heading to an event that no longer takes place.
            ResidentState::Relaxing if self.record.hint == ScheduleHint::AttendingEvent => {
                let event = self.record.event_building;
                let stale = event.is_none()
                    || matches!(
                        self.ctx.events.event_state(event),
                        EventState::None | EventState::Finished
                    )
                    || self.ctx.buildings.is_evacuating(event);
                if stale {
                    self.record.event_building = ct_core::BuildingId::NONE;
                    self.record.hint = ScheduleHint::None;
                    self.cancel_trip();
                    return true;
                }
            }
            _ => {}
        }
        false
    }

    fn cancel_trip(&mut self) {
        self.record.departure_to_work_time = ct_core::SimTime::UNSET;
        self.record.schedule(ResidentState::Unknown);
    }
}
