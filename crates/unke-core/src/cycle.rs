//! Sexagenary cycle derivation.
//!
//! Maps a naive calendar timestamp to three small indices: a 10-valued stem
//! and two 12-valued branches (day and two-hour bucket). Stem and day branch
//! both fall out of one 60-step counter (lcm of 10 and 12), so the pair
//! cycles consistently. Pure arithmetic, no state, no failure modes.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Length of the combined stem/branch cycle.
pub const CYCLE_LEN: i64 = 60;

/// The derived indices for one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePoint {
    /// Stem index in `[0, 10)`.
    pub stem: u32,
    /// Day branch index in `[0, 12)`.
    pub day_branch: u32,
    /// Hour branch index in `[0, 12)`, from the two-hour bucket of the day.
    pub hour_branch: u32,
}

/// Whole calendar days between 1970-01-01 and the date part of `at`.
/// Naive calendar difference only; negative before the epoch.
pub fn epoch_days(at: NaiveDateTime) -> i64 {
    // NaiveDate::default() is 1970-01-01.
    (at.date() - NaiveDate::default()).num_days()
}

/// Derive the cycle indices for a timestamp.
///
/// `rem_euclid` keeps every index in range for pre-1970 dates as well.
/// The hour bucket is offset by one hour: hours 23 and 0 share bucket 0
/// (子 begins at 23:00). The `+1` is a compatibility contract, not a knob.
pub fn derive_cycle(at: NaiveDateTime) -> CyclePoint {
    let cycle_index = epoch_days(at).rem_euclid(CYCLE_LEN);
    CyclePoint {
        stem: (cycle_index % 10) as u32,
        day_branch: (cycle_index % 12) as u32,
        hour_branch: (at.hour() + 1) / 2 % 12,
    }
}
