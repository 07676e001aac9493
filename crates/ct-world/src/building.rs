//! Building classification as exposed by the host.
//!
//! The engine only needs coarse categories: what a visit to a building
//! *means* (shopping, relaxing, sheltering) and which categories keep
//! working around the clock.  Anything finer stays on the host side.

/// Primary service category of a building.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingService {
    #[default]
    None,
    Residential,
    Commercial,
    Industrial,
    Office,
    Education,
    HealthCare,
    Police,
    Fire,
    /// Disaster-response buildings, including evacuation shelters.
    Disaster,
    /// Parks and plazas.
    Beautification,
    Monument,
    Tourism,
    Road,
    PublicTransport,
    Electricity,
    Water,
    Garbage,
}

/// Secondary classification, refining [`BuildingService`] where the engine
/// cares about the difference.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingSubService {
    #[default]
    None,
    CommercialLow,
    CommercialHigh,
    /// Bars, clubs, restaurants — a visit here is relaxing, not shopping.
    CommercialLeisure,
    /// Hotels and tourist commerce.
    CommercialTourism,
    IndustrialGeneric,
    IndustrialFarming,
    IndustrialForestry,
    IndustrialOil,
    IndustrialOre,
}

/// Lifecycle state of a city event hosted at a building.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventState {
    /// No event at this building.
    #[default]
    None,
    Preparing,
    Ongoing,
    Finished,
}
