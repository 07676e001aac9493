use ct_core::CitizenId;
use thiserror::Error;

/// Errors from the schedule save/load pass.
///
/// I/O errors pass through undecorated; a decode failure names the citizen
/// slot so the host can report which part of a save is damaged.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("corrupt record for citizen {citizen}: {reason}")]
    Corrupt {
        citizen: CitizenId,
        reason: &'static str,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
