//! `ct-resident` — the per-citizen daily-schedule state machine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ai`]    | `ResidentAi` — the engine façade the host calls into      |
//! | `process` | Per-tick pipeline: validation, state derivation, dispatch |
//! | `moving`  | In-transition handling (cancelled trips, stale events)    |
//! | `plan`    | Arrival consequences and the schedule builder             |
//! | `execute` | Turning the committed transition into host actions        |
//!
//! # Processing model
//!
//! The host calls [`ResidentAi::update_location`] once per live citizen per
//! tick with that citizen's ground-truth snapshot.  The call mutates only
//! that citizen's schedule record and RNG, reads the shared probability
//! tables (refreshed once per cycle via
//! [`ResidentAi::begin_new_cycle`]), and returns the actions the host must
//! apply.  Nothing here blocks or locks; with the `parallel` feature the
//! same pipeline runs across the whole population on a Rayon pool, each
//! worker owning a disjoint slice of citizen slots.

pub mod ai;

mod execute;
mod moving;
mod plan;
mod process;


pub use ai::ResidentAi;
