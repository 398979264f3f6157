//! Reading composition: cycle indices + salt -> one immutable reading.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::cycle::{CyclePoint, derive_cycle};
use crate::tables::{BranchEntry, Misfortune, Tables};

/// One composed reading: a pure function of `(timestamp, salt)` over a
/// fixed table set. Borrows its resolved entries from the shared [`Tables`];
/// readings are ephemeral and never outlive a render call.
#[derive(Debug, Clone, Serialize)]
pub struct Reading<'t> {
    /// The naive calendar moment being read.
    pub at: NaiveDateTime,
    /// Derived stem and branch indices.
    pub cycle: CyclePoint,
    /// Element of the day, from the stem.
    pub element: &'t str,
    /// Polarity of the day, from the stem.
    pub polarity: &'t str,
    /// Resolved day branch.
    pub day_branch: &'t BranchEntry,
    /// Resolved hour branch.
    pub hour_branch: &'t BranchEntry,
    /// Index into the misfortune table.
    pub misfortune_index: usize,
    /// Displayed intensity, `1..=5`.
    pub severity: u32,
    /// Resolved misfortune category.
    pub misfortune: &'t Misfortune,
    /// Resolved food taboo.
    pub taboo: &'t str,
}

/// Compose the reading for a timestamp and caller salt.
///
/// Deterministic: identical `(timestamp, salt)` over the same tables yields
/// a field-for-field identical reading. The selection coefficients (12/3/1
/// for misfortune, 13/7/3 for taboo) spread adjacent timestamps across
/// table slots and are a compatibility contract with previously generated
/// output.
///
/// `tables` must have passed [`Tables::validate`]; empty tables are a fatal
/// configuration error caught at load, never here.
pub fn compose_reading<'t>(tables: &'t Tables, at: NaiveDateTime, salt: u32) -> Reading<'t> {
    let cycle = derive_cycle(at);
    let s = cycle.stem as usize;
    let b = cycle.day_branch as usize;
    let hb = cycle.hour_branch as usize;
    let salt = salt as usize;

    let misfortune_index = (s * 12 + b * 3 + hb + salt) % tables.misfortunes.len();
    let severity = ((s + hb + b) % 5 + 1) as u32;
    // Decoupled taboo hash: different multipliers than the misfortune index,
    // so the two picks don't covary, and any taboo list length works.
    let taboo_index = (s * 13 + b * 7 + hb * 3 + salt) % tables.taboos.len();

    Reading {
        at,
        cycle,
        element: tables.element_of(cycle.stem),
        polarity: tables.polarity_of(cycle.stem),
        day_branch: &tables.branches[b],
        hour_branch: &tables.branches[hb],
        misfortune_index,
        severity,
        misfortune: &tables.misfortunes[misfortune_index],
        taboo: &tables.taboos[taboo_index],
    }
}
