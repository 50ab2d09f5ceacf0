//! wick-mock
//!
//! Deterministic test doubles for the wick archiver: a scripted candle
//! source, a scripted pair listing, a manual clock that records sleeps
//! instead of performing them, and candle fixtures.
#![warn(missing_docs)]

/// Manual clock for deterministic cooldown and termination tests.
pub mod clock;
/// Candle fixtures.
pub mod fixtures;
/// Scripted source and listing implementations.
pub mod source;

pub use clock::ManualClock;
pub use fixtures::{candle, candle_with_close};
pub use source::{ScriptedListing, ScriptedSource};
