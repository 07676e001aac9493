//! Deterministic per-citizen RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each citizen gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (citizen_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive citizen IDs uniformly across the seed space.
//! This means:
//!
//! - Citizens never share RNG state (no contention, no ordering dependency).
//! - Adding or removing citizens at the end of the arena does not disturb
//!   the seeds of existing ones — runs stay reproducible as the city grows.
//! - All RNG calls are local to the owning thread; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CitizenId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CitizenRng ────────────────────────────────────────────────────────────────

/// Per-citizen deterministic RNG.
///
/// Create one per citizen slot at startup; store in a `Vec<CitizenRng>`
/// parallel to the schedule arena.  Each worker of a parallel sweep must hold
/// exclusive access to its own slice of these.
pub struct CitizenRng(SmallRng);

impl CitizenRng {
    /// Seed deterministically from the run's global seed and a citizen ID.
    pub fn new(global_seed: u64, citizen: CitizenId) -> Self {
        let seed = global_seed ^ (citizen.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CitizenRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `chance_percent / 100`.  Chances above 100 are
    /// treated as certain.
    #[inline]
    pub fn should_occur(&mut self, chance_percent: u32) -> bool {
        match chance_percent {
            0 => false,
            100.. => true,
            c => self.0.gen_range(0u32..100) < c,
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
