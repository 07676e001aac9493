//! `ct-agent` — per-citizen schedule state for the `city_time` engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`record`] | `ScheduleRecord` and its state enums                      |
//! | [`arena`]  | `ScheduleArena` — dense record array indexed by citizen   |
//!
//! # Design
//!
//! A city hosts tens of thousands of citizens, so the per-citizen state is a
//! small `Copy` value stored in one flat pre-allocated array, never in
//! per-citizen heap allocations.  A zeroed record is a valid "never
//! scheduled" record; slot reuse is a plain overwrite.

pub mod arena;
pub mod record;


pub use arena::ScheduleArena;
pub use record::{ResidentState, ScheduleHint, ScheduleRecord, WorkShift, WorkStatus};
