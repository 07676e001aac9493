//! `ct-world` — the narrow boundary between the schedule engine and its host
//! city simulation.
//!
//! The engine never owns buildings, vehicles, or citizen ground truth.  It
//! reads the world through small capability traits, receives a per-tick
//! [`CitizenFacts`] snapshot for the citizen being processed, and talks back
//! exclusively through [`Action`] values the host applies after the call.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`citizen`] | `CitizenFacts`, `CitizenLocation`, `AgeGroup`, `Gender`     |
//! | [`building`]| `BuildingService`, `BuildingSubService`, `EventState`       |
//! | [`query`]   | `BuildingQuery`, `EventQuery`, `RealizePolicy` traits       |
//! | [`action`]  | `Action` — commands emitted back to the host                |
//! | [`context`] | `WorldContext<'a>` — read-only per-tick capability bundle   |
//! | [`stub`]    | `StubWorld` — in-memory world for engine and behavior tests |

pub mod action;
pub mod building;
pub mod citizen;
pub mod context;
pub mod query;
pub mod stub;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use building::{BuildingService, BuildingSubService, EventState};
pub use citizen::{AgeGroup, CitizenFacts, CitizenLocation, Gender};
pub use context::WorldContext;
pub use query::{AlwaysRealize, BuildingQuery, EventQuery, RealizePolicy};
pub use stub::StubWorld;
