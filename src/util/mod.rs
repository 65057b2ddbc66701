//! Shared utilities.
//!
//! Frame timing: the [`frame_timing::Clock`] trait the frame loop samples
//! once per frame, with a wall-clock and a fixed-step implementation.

/// Elapsed-time sources for the frame loop.
pub mod frame_timing;
