//! Actions — the commands the engine sends back to the host.
//!
//! Actions are produced by `ResidentAi::update_location` and applied by the
//! host after the call returns.  The engine never mutates host state
//! directly; this keeps the per-citizen processing side-effect-free with
//! respect to the world, mirroring an intent/apply split.

use ct_core::BuildingId;

/// One command for the host to apply to the citizen just processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Free the citizen slot entirely (corrupt data, decomposed corpse,
    /// finished move-in).  The schedule record has already been zeroed.
    Release,

    /// Send a hearse for a dead citizen.
    RequestHospitalPickup,

    /// Route a sick citizen toward medical care (ambulance or walk-in).
    SeekMedicalCare,

    /// Detach the citizen from its work/school building.
    ClearWorkplace,

    /// Detach the citizen from its visit target.
    ClearVisit,

    /// Drop the arrested flag (sentence served outside a police building).
    ClearArrested,

    /// Start moving the citizen toward `building`.  With `virtually` set the
    /// host should teleport the citizen instead of spawning an instance.
    GoTo { building: BuildingId, virtually: bool },

    /// Start moving the citizen home.
    GoHome { virtually: bool },

    /// Deduct goods from a commercial building's buffer for this purchase.
    BuyGoods { building: BuildingId, amount: u16 },

    /// The citizen gave up waiting for transport; despawn the instance and
    /// settle them at home.
    AbandonJourney,
}
