//! The 6-byte-per-record wire codec.
//!
//! Layout, little-endian:
//!
//! | Byte | Content                                                         |
//! |------|-----------------------------------------------------------------|
//! | 0    | low nibble work shift (0–3), high nibble work status (0–2)      |
//! | 1    | scheduled state, raw                                            |
//! | 2–3  | u16 minutes offset of the fire time from day start; 0 = unset   |
//! | 4–5  | u16 commute estimate, quantized at `65535 / max_travel_time`    |
//!
//! Records are written in citizen-ID order with no delimiters; slots the
//! liveness probe rejects are skipped on both passes, so the caller must
//! pre-zero the arena before a read.

use std::io::{Read, Write};

use ct_core::{CitizenId, SimTime};
use ct_agent::{ResidentState, ScheduleArena, ScheduleRecord, WorkShift, WorkStatus};

use crate::error::{StorageError, StorageResult};

const RECORD_LEN: usize = 6;

/// Host-provided answer to "does this slot hold a live citizen?".
pub trait LivenessProbe {
    fn is_live(&self, citizen: CitizenId) -> bool;
}

impl<F> LivenessProbe for F
where
    F: Fn(CitizenId) -> bool,
{
    fn is_live(&self, citizen: CitizenId) -> bool {
        self(citizen)
    }
}

/// Write every live record to `writer` in citizen-ID order.
///
/// `day_start` is the reference for the fire-time delta; pass the start of
/// the current simulated day.  I/O failures abort the pass immediately.
pub fn write_records<W: Write>(
    arena: &ScheduleArena,
    live: &dyn LivenessProbe,
    day_start: SimTime,
    max_travel_time: f32,
    writer: &mut W,
) -> StorageResult<()> {
    for (citizen, record) in arena.iter() {
        if !live.is_live(citizen) {
            continue;
        }
        let buf = encode(record, day_start, max_travel_time);
        writer.write_all(&buf)?;
    }
    Ok(())
}

/// Read records for every live slot, in citizen-ID order, into the arena.
///
/// Non-live slots are left untouched; the caller must have zeroed the arena
/// so a skipped or failed read leaves defined defaults.  A short stream
/// surfaces as an I/O error; unknown enum bytes as
/// [`StorageError::Corrupt`].
pub fn read_records<R: Read>(
    arena: &mut ScheduleArena,
    live: &dyn LivenessProbe,
    day_start: SimTime,
    max_travel_time: f32,
    reader: &mut R,
) -> StorageResult<()> {
    for (citizen, record) in arena.iter_mut() {
        if !live.is_live(citizen) {
            continue;
        }
        let mut buf = [0u8; RECORD_LEN];
        reader.read_exact(&mut buf)?;
        decode(citizen, &buf, day_start, max_travel_time, record)?;
    }
    Ok(())
}

// ── Record codec ──────────────────────────────────────────────────────────────

pub(crate) fn encode(
    record: &ScheduleRecord,
    day_start: SimTime,
    max_travel_time: f32,
) -> [u8; RECORD_LEN] {
    let shift_status = (record.work_shift as u8) | ((record.work_status as u8) << 4);

    let minutes = if record.scheduled_time().is_unset() {
        0u16
    } else {
        let delta = record.scheduled_time().0.saturating_sub(day_start.0);
        delta.min(u16::MAX as u32) as u16
    };

    let quantum = 65_535.0 / max_travel_time;
    let travel = (record.travel_time_to_work * quantum)
        .round()
        .clamp(0.0, 65_535.0) as u16;

    let mut buf = [0u8; RECORD_LEN];
    buf[0] = shift_status;
    buf[1] = record.scheduled_state() as u8;
    buf[2..4].copy_from_slice(&minutes.to_le_bytes());
    buf[4..6].copy_from_slice(&travel.to_le_bytes());
    buf
}

pub(crate) fn decode(
    citizen: CitizenId,
    buf: &[u8; RECORD_LEN],
    day_start: SimTime,
    max_travel_time: f32,
    record: &mut ScheduleRecord,
) -> StorageResult<()> {
    let corrupt = |reason| StorageError::Corrupt { citizen, reason };

    record.work_shift = WorkShift::from_u8(buf[0] & 0x0F).ok_or(corrupt("work shift byte"))?;
    record.work_status = WorkStatus::from_u8(buf[0] >> 4).ok_or(corrupt("work status byte"))?;

    let state = ResidentState::from_u8(buf[1]).ok_or(corrupt("scheduled state byte"))?;
    let minutes = u16::from_le_bytes([buf[2], buf[3]]);
    let time = if minutes == 0 {
        SimTime::UNSET
    } else {
        day_start.add_minutes(minutes as u32)
    };
    record.schedule_at(state, time);

    let quantized = u16::from_le_bytes([buf[4], buf[5]]);
    record.travel_time_to_work = quantized as f32 * max_travel_time / 65_535.0;

    Ok(())
}
