//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into flat `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! Each ID carries a per-type sentinel: `CitizenId::INVALID` is `u32::MAX`
//! (citizen slots are a dense 0-based arena), while `BuildingId::NONE` and
//! `EventId::NONE` are `0` (host building/event arrays are 1-based, and a
//! zeroed schedule record must mean "no building").

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer with a named
/// sentinel constant that `Default` returns.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty), $sentinel:ident = $sval:expr;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const $sentinel: $name = $name($sval);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::$sentinel
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a citizen slot in the schedule arena.  Max ~4.3 billion.
    pub struct CitizenId(u32), INVALID = u32::MAX;
}

typed_id! {
    /// Host building identifier.  `0` means "no building" — host building
    /// arrays are 1-based, so a zeroed record field is already the sentinel.
    pub struct BuildingId(u32), NONE = 0;
}

typed_id! {
    /// Host city-event identifier.  `0` means "no event".
    pub struct EventId(u32), NONE = 0;
}

impl CitizenId {
    #[inline(always)]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

impl BuildingId {
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl EventId {
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}
