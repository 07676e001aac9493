//! `ct-storage` — save/load for the schedule arena.
//!
//! Each live citizen costs exactly six bytes; a 64k-citizen city saves in
//! 384 KiB.  The format stores only what cannot be re-derived on load: the
//! committed transition and its fire time (as a minutes-of-day delta), the
//! shift/status byte, and the learned commute estimate.  Everything else in
//! a record is rebuilt from ground truth on the first post-load tick.
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`codec`] | `write_records` / `read_records`, `LivenessProbe` |
//! | [`error`] | `StorageError`                                    |

pub mod codec;
pub mod error;


pub use codec::{LivenessProbe, read_records, write_records};
pub use error::{StorageError, StorageResult};
