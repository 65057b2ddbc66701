// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! First-person camera controller built on glam.
//!
//! Lookabout turns per-frame input (held movement keys, mouse motion,
//! wheel motion, elapsed time) into a camera position, a yaw/pitch view
//! direction, a clamped field of view, and the view/projection matrices a
//! renderer consumes. Drawing, windowing and asset loading stay outside.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - look, move, zoom and export transforms
//! - [`input::InputProcessor`] - folds raw events into a
//!   [`input::FrameInput`] per frame
//! - [`options::Options`] - runtime configuration (camera limits, mouse
//!   conventions, key bindings) with TOML presets
//! - [`util::frame_timing::Clock`] - elapsed-time source for the frame loop
//!
//! # Frame loop
//!
//! ```
//! use lookabout::camera::CameraController;
//! use lookabout::input::{InputEvent, InputProcessor};
//! use lookabout::util::frame_timing::{Clock, FixedStepClock};
//!
//! let mut controller = CameraController::new(2.0, 45.0);
//! let mut input = InputProcessor::default();
//! let mut clock = FixedStepClock::new(16.0);
//!
//! input.handle_event(InputEvent::key("KeyW", true));
//! let frame = input.end_frame(clock.tick());
//! controller.apply_frame(&frame);
//!
//! let view = controller.view_transform();
//! assert!(controller.position().z < 8.0);
//! # let _ = view;
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use error::CameraError;
