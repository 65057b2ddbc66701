//! Folds raw platform events into one camera update per frame.
//!
//! The `InputProcessor` owns all transient input state (held movement keys,
//! accumulated mouse and wheel deltas, first-sample latches) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and [`CameraController::apply_frame`](crate::camera::controller::CameraController::apply_frame).

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::HeldDirections;
use crate::options::{InputOptions, KeybindingOptions};

/// Everything the camera needs from one frame of input.
///
/// Signs are already in camera convention: `look.x > 0` looks right,
/// `look.y > 0` looks up, `zoom < 0` narrows the field of view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Movement directions held during the frame.
    pub held: HeldDirections,
    /// Summed look delta in device units.
    pub look: Vec2,
    /// Summed field-of-view delta in degrees.
    pub zoom: f32,
    /// Elapsed time since the previous frame, in milliseconds.
    pub dt: f32,
}

/// Converts raw [`InputEvent`]s into [`FrameInput`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// processor.handle_event(event);
///
/// // Once per frame:
/// let frame = processor.end_frame(clock.tick());
/// controller.apply_frame(&frame);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    options: InputOptions,
    key_bindings: KeybindingOptions,
    /// Movement keys currently held.
    held: HeldDirections,
    /// Look delta accumulated since the last `end_frame`.
    pending_look: Vec2,
    /// Zoom delta accumulated since the last `end_frame`.
    pending_zoom: f32,
    has_received_first_look_input: bool,
    has_received_first_zoom_input: bool,
}

impl InputProcessor {
    /// Create a processor with the given conventions and key bindings.
    #[must_use]
    pub fn new(options: InputOptions, key_bindings: KeybindingOptions) -> Self {
        Self {
            options,
            key_bindings,
            held: HeldDirections::NONE,
            pending_look: Vec2::ZERO,
            pending_zoom: 0.0,
            has_received_first_look_input: false,
            has_received_first_zoom_input: false,
        }
    }

    /// Movement keys currently held.
    #[must_use]
    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Replace the mouse and wheel conventions.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Arm the first-sample latches again, e.g. after re-grabbing the
    /// cursor.
    pub fn reset_first_input_latches(&mut self) {
        self.has_received_first_look_input = false;
        self.has_received_first_zoom_input = false;
    }

    /// Process one raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => {
                if let Some(direction) = self.key_bindings.lookup(&key) {
                    self.held.set(direction, pressed);
                }
            }
            InputEvent::MouseMotion { dx, dy } => self.handle_motion(dx, dy),
            InputEvent::Scroll { delta } => self.handle_scroll(delta),
            InputEvent::FocusLost => {
                self.held = HeldDirections::NONE;
                self.pending_look = Vec2::ZERO;
                self.pending_zoom = 0.0;
                self.reset_first_input_latches();
            }
        }
    }

    fn handle_motion(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            log::debug!("dropping non-finite mouse motion ({dx}, {dy})");
            return;
        }
        let first = !self.has_received_first_look_input;
        self.has_received_first_look_input = true;
        if first && self.options.suppress_first_motion {
            log::debug!("dropping first mouse motion sample ({dx}, {dy})");
            return;
        }

        let look_y = if self.options.invert_y { dy } else { -dy };
        let look = self.pending_look + Vec2::new(dx, look_y);
        if look.is_finite() {
            self.pending_look = look;
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::debug!("dropping non-finite scroll ({delta})");
            return;
        }
        let first = !self.has_received_first_zoom_input;
        self.has_received_first_zoom_input = true;
        if first && self.options.suppress_first_scroll {
            log::debug!("dropping first scroll sample ({delta})");
            return;
        }

        let zoom = self.pending_zoom - delta * self.options.scroll_scale;
        if zoom.is_finite() {
            self.pending_zoom = zoom;
        }
    }

    /// Finish the frame: drain accumulated look and zoom, keep held keys.
    pub fn end_frame(&mut self, dt: f32) -> FrameInput {
        let frame = FrameInput {
            held: self.held,
            look: self.pending_look,
            zoom: self.pending_zoom,
            dt,
        };
        self.pending_look = Vec2::ZERO;
        self.pending_zoom = 0.0;
        frame
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(InputOptions::default(), KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveDirection;

    fn motion(dx: f32, dy: f32) -> InputEvent {
        InputEvent::MouseMotion { dx, dy }
    }

    #[test]
    fn first_motion_sample_is_dropped() {
        let mut processor = InputProcessor::default();
        processor.handle_event(motion(300.0, 200.0));
        processor.handle_event(motion(4.0, 0.0));
        let frame = processor.end_frame(16.0);
        assert_eq!(frame.look, Vec2::new(4.0, 0.0));
        assert_eq!(frame.dt, 16.0);
    }

    #[test]
    fn mouse_up_looks_up() {
        let mut processor = InputProcessor::default();
        processor.handle_event(motion(0.0, 0.0));
        processor.handle_event(motion(0.0, -5.0));
        assert_eq!(processor.end_frame(0.0).look, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn invert_y_keeps_raw_sign() {
        let options = InputOptions {
            invert_y: true,
            suppress_first_motion: false,
            ..InputOptions::default()
        };
        let mut processor =
            InputProcessor::new(options, KeybindingOptions::default());
        processor.handle_event(motion(0.0, -5.0));
        assert_eq!(processor.end_frame(0.0).look, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn wheel_away_narrows_fov() {
        let mut processor = InputProcessor::default();
        processor.handle_event(InputEvent::Scroll { delta: 2.0 });
        processor.handle_event(InputEvent::Scroll { delta: 1.0 });
        assert_eq!(processor.end_frame(0.0).zoom, -3.0);
    }

    #[test]
    fn first_scroll_can_be_suppressed() {
        let options = InputOptions {
            suppress_first_scroll: true,
            ..InputOptions::default()
        };
        let mut processor =
            InputProcessor::new(options, KeybindingOptions::default());
        processor.handle_event(InputEvent::Scroll { delta: 7.0 });
        processor.handle_event(InputEvent::Scroll { delta: 1.0 });
        assert_eq!(processor.end_frame(0.0).zoom, -1.0);
    }

    #[test]
    fn deltas_drain_but_keys_stay_held() {
        let mut processor = InputProcessor::default();
        processor.handle_event(InputEvent::key("KeyW", true));
        processor.handle_event(motion(1.0, 1.0));
        processor.handle_event(motion(1.0, 1.0));
        let first = processor.end_frame(10.0);
        assert!(first.held.contains(MoveDirection::Forward));
        assert_eq!(first.look, Vec2::new(1.0, -1.0));

        let second = processor.end_frame(10.0);
        assert!(second.held.contains(MoveDirection::Forward));
        assert_eq!(second.look, Vec2::ZERO);
        assert_eq!(second.zoom, 0.0);

        processor.handle_event(InputEvent::key("KeyW", false));
        assert!(processor.end_frame(10.0).held.is_empty());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut processor = InputProcessor::default();
        processor.handle_event(InputEvent::key("KeyQ", true));
        assert!(processor.held().is_empty());
    }

    #[test]
    fn focus_loss_releases_keys_and_rearms_latch() {
        let mut processor = InputProcessor::default();
        processor.handle_event(InputEvent::key("KeyA", true));
        processor.handle_event(motion(0.0, 0.0));
        processor.handle_event(InputEvent::FocusLost);
        assert!(processor.held().is_empty());

        processor.handle_event(motion(500.0, 0.0));
        processor.handle_event(motion(2.0, 0.0));
        assert_eq!(processor.end_frame(0.0).look, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn focus_loss_discards_pending_deltas() {
        let mut processor = InputProcessor::default();
        processor.handle_event(motion(0.0, 0.0));
        processor.handle_event(motion(12.0, 3.0));
        processor.handle_event(InputEvent::Scroll { delta: 2.0 });
        processor.handle_event(InputEvent::FocusLost);

        let frame = processor.end_frame(16.0);
        assert_eq!(frame.look, Vec2::ZERO);
        assert_eq!(frame.zoom, 0.0);
    }

    #[test]
    fn non_finite_samples_do_not_poison_the_frame() {
        let mut processor = InputProcessor::default();
        processor.handle_event(motion(0.0, 0.0));
        processor.handle_event(motion(2.0, 0.0));
        processor.handle_event(motion(f32::NAN, 1.0));
        processor.handle_event(motion(3.0, f32::INFINITY));
        processor.handle_event(motion(1.0, -1.0));
        processor.handle_event(InputEvent::Scroll { delta: f32::NAN });
        processor.handle_event(InputEvent::Scroll { delta: 1.0 });

        let frame = processor.end_frame(16.0);
        assert_eq!(frame.look, Vec2::new(3.0, 1.0));
        assert_eq!(frame.zoom, -1.0);
    }

    #[test]
    fn non_finite_first_sample_leaves_latch_armed() {
        let mut processor = InputProcessor::default();
        processor.handle_event(motion(f32::NAN, 0.0));
        processor.handle_event(motion(400.0, 0.0));
        processor.handle_event(motion(2.0, 0.0));
        assert_eq!(processor.end_frame(0.0).look, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn rebinding_takes_effect() {
        let mut processor = InputProcessor::default();
        processor
            .key_bindings_mut()
            .bind(MoveDirection::Forward, "ArrowUp");
        processor.handle_event(InputEvent::key("ArrowUp", true));
        assert!(processor.held().contains(MoveDirection::Forward));
    }
}
