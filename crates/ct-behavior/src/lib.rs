//! `ct-behavior` — the decision engines behind citizen schedules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`work`]      | `WorkBehavior` — shift assignment, commute & lunch scheduling |
//! | [`spare_time`]| `SpareTimeBehavior` — per-age relax/shop probability tables |
//! | [`travel`]    | `TravelBehavior` — O(1) commute-duration estimation     |
//!
//! # Phase discipline
//!
//! `SpareTimeBehavior::refresh_chances` and `TravelBehavior::synchronize`
//! are the only mutating calls here, and both happen once per simulation
//! cycle *before* any citizen is processed.  Everything the per-citizen path
//! touches is a read — which is what lets the host sweep citizens in its own
//! agent-partitioned parallel scheme without locks.

pub mod spare_time;
pub mod travel;
pub mod work;

#[cfg(test)]
mod tests;

pub use spare_time::SpareTimeBehavior;
pub use travel::TravelBehavior;
pub use work::WorkBehavior;
