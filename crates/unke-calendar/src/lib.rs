//! Calendar export for Unkenruf.
//!
//! Turns a year of deterministic readings into an iCalendar file, one
//! all-day misfortune per date. Because the engine is a pure function of
//! `(timestamp, salt)`, the calendar for any year can be regenerated
//! losslessly at any time.

/// iCalendar (RFC 5545) yearly export.
pub mod ics;

/// Re-export the exporter.
pub use ics::{escape_text, export_year};
