//! The `ScheduleArena` — one flat record array for the whole population.
//!
//! Sized once at startup to the host's maximum citizen capacity.  Records for
//! unused slots stay at their zero value; there is no per-citizen allocation
//! and no resizing.  Always resolve records through the citizen-ID index —
//! never hold a reference across calls.

use ct_core::{CitizenId, CtError, CtResult};

use crate::ScheduleRecord;

/// Dense schedule-record storage indexed by [`CitizenId`].
pub struct ScheduleArena {
    records: Vec<ScheduleRecord>,
}

impl ScheduleArena {
    /// Allocate `capacity` zeroed records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: vec![ScheduleRecord::default(); capacity],
        }
    }

    /// Maximum citizen capacity (fixed for the arena's lifetime).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Record for `citizen`.
    ///
    /// # Panics
    /// Panics if `citizen` is out of range — an out-of-range ID at this layer
    /// is host corruption, surfaced immediately rather than papered over.
    #[inline]
    pub fn get(&self, citizen: CitizenId) -> &ScheduleRecord {
        &self.records[citizen.index()]
    }

    /// Mutable record for `citizen`.  Panics like [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, citizen: CitizenId) -> &mut ScheduleRecord {
        &mut self.records[citizen.index()]
    }

    /// Checked variant of [`get`](Self::get).
    pub fn try_get(&self, citizen: CitizenId) -> CtResult<&ScheduleRecord> {
        self.records
            .get(citizen.index())
            .ok_or(CtError::CitizenNotFound(citizen))
    }

    /// Checked variant of [`get_mut`](Self::get_mut).
    pub fn try_get_mut(&mut self, citizen: CitizenId) -> CtResult<&mut ScheduleRecord> {
        self.records
            .get_mut(citizen.index())
            .ok_or(CtError::CitizenNotFound(citizen))
    }

    /// Zero the record for `citizen` (slot released).
    #[inline]
    pub fn reset(&mut self, citizen: CitizenId) {
        self.records[citizen.index()].reset();
    }

    /// Iterate all records in citizen-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (CitizenId, &ScheduleRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (CitizenId(i as u32), r))
    }

    /// Mutable iteration in citizen-ID order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CitizenId, &mut ScheduleRecord)> {
        self.records
            .iter_mut()
            .enumerate()
            .map(|(i, r)| (CitizenId(i as u32), r))
    }

    /// Raw record slice (storage, diagnostics).
    #[inline]
    pub fn records(&self) -> &[ScheduleRecord] {
        &self.records
    }

    /// Raw mutable record slice (storage restore).
    #[inline]
    pub fn records_mut(&mut self) -> &mut [ScheduleRecord] {
        &mut self.records
    }
}
