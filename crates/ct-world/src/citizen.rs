//! Ground-truth citizen data as seen by the schedule engine.

use ct_core::BuildingId;

/// Where the host says the citizen physically is right now.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CitizenLocation {
    #[default]
    Home,
    Work,
    Visit,
    Moving,
}

/// Demographic age bracket.  Index order matters: the spare-time probability
/// tables are arrays indexed by `age as usize`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AgeGroup {
    Child = 0,
    Teen = 1,
    Young = 2,
    #[default]
    Adult = 3,
    Senior = 4,
}

impl AgeGroup {
    pub const COUNT: usize = 5;

    /// All groups in table-index order.
    pub const ALL: [AgeGroup; Self::COUNT] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Young,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// Children and teens attend school rather than work shifts.
    #[inline]
    pub fn is_student(self) -> bool {
        matches!(self, AgeGroup::Child | AgeGroup::Teen)
    }

    /// Groups eligible for regular employment shifts.
    #[inline]
    pub fn is_working_age(self) -> bool {
        matches!(self, AgeGroup::Young | AgeGroup::Adult)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Per-tick snapshot of one citizen's ground truth, assembled by the host.
///
/// The engine treats this as authoritative: the schedule record is corrected
/// to match it, never the other way around.  `None` in place of a snapshot
/// means the slot is empty.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitizenFacts {
    pub location: CitizenLocation,

    pub home_building: BuildingId,
    pub work_building: BuildingId,
    pub visit_building: BuildingId,
    /// The building the citizen is inside right now; `NONE` when outside.
    pub current_building: BuildingId,

    pub age_group: AgeGroup,
    pub gender: Gender,

    pub dead: bool,
    pub sick: bool,
    pub arrested: bool,
    /// Still in the moving-into-the-city flow.
    pub moving_in: bool,
    /// The household is low on goods.
    pub needs_goods: bool,

    /// A visual instance is realized for this citizen.
    pub has_instance: bool,
    /// The citizen owns/occupies a vehicle right now.
    pub has_vehicle: bool,
}

impl Default for CitizenFacts {
    fn default() -> Self {
        Self {
            location: CitizenLocation::Home,
            home_building: BuildingId::NONE,
            work_building: BuildingId::NONE,
            visit_building: BuildingId::NONE,
            current_building: BuildingId::NONE,
            age_group: AgeGroup::Adult,
            gender: Gender::Male,
            dead: false,
            sick: false,
            arrested: false,
            moving_in: false,
            needs_goods: false,
            has_instance: true,
            has_vehicle: false,
        }
    }
}
