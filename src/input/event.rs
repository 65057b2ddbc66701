/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into one [`FrameInput`](super::FrameInput) per frame.
///
/// Raw device conventions are kept as the windowing layer reports them:
/// `MouseMotion::dy` is positive when the mouse moves toward the user
/// (cursor down), `Scroll::delta` is positive when the wheel rolls away
/// from the user.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(InputEvent::MouseMotion { dx: 4.0, dy: -2.0 });
/// processor.handle_event(InputEvent::key("KeyW", true));
/// let frame = processor.end_frame(clock.tick());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion.
    MouseMotion {
        /// Horizontal motion, positive to the right.
        dx: f32,
        /// Vertical motion, positive downward.
        dy: f32,
    },
    /// Scroll wheel motion in notches.
    Scroll {
        /// Positive when the wheel rolls away from the user.
        delta: f32,
    },
    /// The window lost focus; held keys are released.
    FocusLost,
}

impl InputEvent {
    /// Shorthand for a [`InputEvent::Key`] event.
    #[must_use]
    pub fn key(key: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            key: key.into(),
            pressed,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Convert a winit window event, if it carries input the camera uses.
    ///
    /// Mouse motion is taken from [`Self::from_device_event`] instead, since
    /// cursor positions stop changing once the cursor is grabbed.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(Self::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                }),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }

    /// Convert raw device motion into [`InputEvent::MouseMotion`].
    #[must_use]
    pub fn from_device_event(event: &winit::event::DeviceEvent) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::MouseMotion {
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }
}

#[cfg(all(test, feature = "winit"))]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::{
        DeviceEvent, DeviceId, MouseScrollDelta, TouchPhase, WindowEvent,
    };

    use super::*;

    fn wheel(delta: MouseScrollDelta) -> WindowEvent {
        WindowEvent::MouseWheel {
            // SAFETY: the id is only compared, never handed to the platform.
            device_id: unsafe { DeviceId::dummy() },
            delta,
            phase: TouchPhase::Moved,
        }
    }

    #[test]
    fn device_motion_keeps_raw_sign() {
        let event = DeviceEvent::MouseMotion { delta: (3.0, -2.0) };
        assert_eq!(
            InputEvent::from_device_event(&event),
            Some(InputEvent::MouseMotion { dx: 3.0, dy: -2.0 })
        );
    }

    #[test]
    fn other_device_events_are_ignored() {
        let event = DeviceEvent::Added;
        assert_eq!(InputEvent::from_device_event(&event), None);
    }

    #[test]
    fn line_delta_is_notches() {
        let event = wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        assert_eq!(
            InputEvent::from_window_event(&event),
            Some(InputEvent::Scroll { delta: 2.0 })
        );
    }

    #[test]
    fn pixel_delta_is_scaled_down() {
        let event = wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, -250.0,
        )));
        assert_eq!(
            InputEvent::from_window_event(&event),
            Some(InputEvent::Scroll { delta: -2.5 })
        );
    }

    #[test]
    fn focus_loss_is_forwarded() {
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Focused(true)),
            None
        );
    }
}
