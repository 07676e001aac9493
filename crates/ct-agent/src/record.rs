//! The `ScheduleRecord` value type and its state enums.
//!
//! One record exists per citizen slot.  It is mutated in place every tick the
//! citizen is processed and reset to its zero value when the slot is
//! released.  All enums are `#[repr(u8)]` because the persistence layer
//! stores them as raw bytes.

use ct_core::{BuildingId, SimTime};

// ── State enums ───────────────────────────────────────────────────────────────

/// The logical state of a citizen, derived from ground truth each tick.
///
/// `Unknown` is the zero value: a freshly allocated slot, or a citizen whose
/// situation must be re-evaluated from scratch.  `Ignored` is terminal for a
/// tick — the engine does no further processing until external ground truth
/// changes it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ResidentState {
    #[default]
    Unknown = 0,
    Ignored = 1,
    AtHome = 2,
    AtSchoolOrWork = 3,
    Shopping = 4,
    Relaxing = 5,
    Visiting = 6,
    InShelter = 7,
    InTransition = 8,
    Evacuation = 9,
}

impl ResidentState {
    /// Decode a raw storage byte.  Returns `None` for bytes outside the enum.
    pub fn from_u8(byte: u8) -> Option<Self> {
        use ResidentState::*;
        Some(match byte {
            0 => Unknown,
            1 => Ignored,
            2 => AtHome,
            3 => AtSchoolOrWork,
            4 => Shopping,
            5 => Relaxing,
            6 => Visiting,
            7 => InShelter,
            8 => InTransition,
            9 => Evacuation,
            _ => return None,
        })
    }
}

/// Short-lived disambiguation of how a scheduled state should be executed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ScheduleHint {
    #[default]
    None = 0,
    /// Only look for shops close to the current building (lunch break,
    /// late-night kiosk run).
    LocalShoppingOnly = 1,
    /// The relaxing target is a scheduled city event.
    AttendingEvent = 2,
    /// The citizen is on a guided tour and should not re-plan mid-tour.
    OnTour = 3,
    /// The citizen is done shopping for this outing; don't schedule more
    /// shop hops until they have been home.
    NoShoppingAnyMore = 4,
}

/// Employment status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WorkStatus {
    #[default]
    None = 0,
    Working = 1,
    OnVacation = 2,
}

impl WorkStatus {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => WorkStatus::None,
            1 => WorkStatus::Working,
            2 => WorkStatus::OnVacation,
            _ => return None,
        })
    }
}

/// Which work shift the citizen is assigned to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WorkShift {
    #[default]
    Unemployed = 0,
    First = 1,
    Second = 2,
    Night = 3,
}

impl WorkShift {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => WorkShift::Unemployed,
            1 => WorkShift::First,
            2 => WorkShift::Second,
            3 => WorkShift::Night,
            _ => return None,
        })
    }
}

// ── ScheduleRecord ────────────────────────────────────────────────────────────

/// The compact mutable schedule state of one citizen.
///
/// The scheduled-transition triple (`scheduled_state`, `last_scheduled_state`,
/// `scheduled_time`) is private: it may only change through [`schedule`]
/// / [`schedule_at`], which keep the invariant that `last_scheduled_state`
/// always holds the value `scheduled_state` had before the latest
/// reassignment.
///
/// [`schedule`]: ScheduleRecord::schedule
/// [`schedule_at`]: ScheduleRecord::schedule_at
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRecord {
    /// Logical state derived from ground truth this tick.
    pub current_state: ResidentState,

    scheduled_state: ResidentState,
    last_scheduled_state: ResidentState,
    scheduled_time: SimTime,

    /// Short-lived execution hint for the scheduled state.
    pub hint: ScheduleHint,
    /// Target of a scheduled event visit; `BuildingId::NONE` if none.
    pub event_building: BuildingId,

    /// Employment status.
    pub work_status: WorkStatus,
    /// Cached copy of the citizen's live work/school building, used to detect
    /// externally-triggered job changes.
    pub work_building: BuildingId,
    /// Remaining vacation days while `work_status == OnVacation`.
    pub vacation_days_left: u8,

    /// When the citizen began its current work-bound commute.
    pub departure_to_work_time: SimTime,
    /// When the citizen began its current journey (any destination).
    pub departure_time: SimTime,
    /// Smoothed commute estimate in hours, clamped to the configured maximum.
    pub travel_time_to_work: f32,

    pub work_shift: WorkShift,
    /// Shift boundaries as fractional hours-of-day in `[0, 24)`.
    pub work_shift_start: f32,
    pub work_shift_end: f32,
    pub works_on_weekends: bool,
}

impl ScheduleRecord {
    // ── Scheduled transition ──────────────────────────────────────────────

    /// The state the citizen is committed to transition into next.
    #[inline]
    pub fn scheduled_state(&self) -> ResidentState {
        self.scheduled_state
    }

    /// The previously committed state (for retry/fallback decisions).
    #[inline]
    pub fn last_scheduled_state(&self) -> ResidentState {
        self.last_scheduled_state
    }

    /// When the scheduled transition should fire.  `SimTime::UNSET` means
    /// "as soon as possible".
    #[inline]
    pub fn scheduled_time(&self) -> SimTime {
        self.scheduled_time
    }

    /// Commit to `next` as soon as possible.
    #[inline]
    pub fn schedule(&mut self, next: ResidentState) {
        self.schedule_at(next, SimTime::UNSET);
    }

    /// Commit to `next` at `time`.
    ///
    /// A `time` already in the past is legal and simply fires on the next
    /// processing pass.  Departure planning relies on this: a commute whose
    /// ideal departure has already slipped by still gets scheduled and fires
    /// immediately.
    pub fn schedule_at(&mut self, next: ResidentState, time: SimTime) {
        self.last_scheduled_state = self.scheduled_state;
        self.scheduled_state = next;
        self.scheduled_time = time;
    }

    /// `true` once the scheduled transition should fire (unset = immediately).
    #[inline]
    pub fn is_due(&self, now: SimTime) -> bool {
        self.scheduled_time <= now
    }

    // ── Travel-time smoothing ─────────────────────────────────────────────

    /// Fold a completed work commute into the smoothed estimate.
    ///
    /// The estimate converges toward the true average by halving the error
    /// each trip, and is always clamped to `[0, max_travel_time]`.  Does
    /// nothing unless a work-bound departure was recorded before `arrival`.
    pub fn update_travel_time_to_work(&mut self, arrival: SimTime, max_travel_time: f32) {
        if self.departure_to_work_time.is_unset() || arrival <= self.departure_to_work_time {
            return;
        }
        let measured = arrival.hours_since(self.departure_to_work_time);
        let blended = if self.travel_time_to_work == 0.0 {
            measured
        } else {
            (self.travel_time_to_work + measured) / 2.0
        };
        self.travel_time_to_work = blended.clamp(0.0, max_travel_time);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Return the record to its zero value (slot released or corrupt).
    #[inline]
    pub fn reset(&mut self) {
        *self = ScheduleRecord::default();
    }
}
