//! `ct-core` — foundational types for the `city_time` schedule engine.
//!
//! This crate is a dependency of every other `ct-*` crate.  It intentionally
//! has no `ct-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `CitizenId`, `BuildingId`, `EventId`                  |
//! | [`time`]   | `SimTime`, `Clock`                                    |
//! | [`config`] | `ScheduleConfig` — tunable balance constants          |
//! | [`rng`]    | `CitizenRng` — deterministic per-citizen randomness   |
//! | [`error`]  | `CtError`, `CtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScheduleConfig;
pub use error::{CtError, CtResult};
pub use ids::{BuildingId, CitizenId, EventId};
pub use rng::CitizenRng;
pub use time::{Clock, SimTime};
