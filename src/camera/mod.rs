//! Camera system for first-person scene viewing.
//!
//! Provides a yaw/pitch camera with mouse-look, walk or fly movement,
//! scroll zoom, and view/projection export for the renderer.

/// First-person camera controller managing look, movement and zoom.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::CameraController;
pub use self::core::{Camera, CameraTransforms, CameraUniform};
