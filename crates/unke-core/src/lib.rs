//! Core engine for Unkenruf: a deterministic misfortune oracle.
//!
//! Given a naive timestamp and a caller salt, derives a pseudo-sexagenary
//! cycle point, selects entries from fixed reference tables, and composes an
//! immutable [`Reading`]. Pure functions throughout: no I/O, no state, no
//! randomness. Identical inputs always produce identical readings, which is
//! what makes a whole calendar of readings regenerable losslessly.
//!
//! The cycle arithmetic is a flavor device; no calendrical or astrological
//! correctness is intended.

/// Asset resolution seam for collaborators that serve icon art.
pub mod assets;
/// Sexagenary cycle derivation from a timestamp.
pub mod cycle;
/// Error types used throughout the crate.
pub mod error;
/// Reading composition from cycle indices and a salt.
pub mod reading;
/// Markdown rendering of a composed reading.
pub mod render;
/// Salt derivation from chat/user identifiers.
pub mod salt;
/// Reference tables and their loader.
pub mod tables;

/// Re-export asset seam types.
pub use assets::{AssetResolver, NoAssets, resolve_reading_art};
/// Re-export cycle types.
pub use cycle::{CyclePoint, derive_cycle};
/// Re-export error types.
pub use error::{UnkeError, UnkeResult};
/// Re-export the reading type and composer.
pub use reading::{Reading, compose_reading};
/// Re-export the renderer.
pub use render::{escape_markdown, render};
/// Re-export the salt provider.
pub use salt::chat_salt;
/// Re-export table types.
pub use tables::{BranchEntry, Misfortune, Tables};
