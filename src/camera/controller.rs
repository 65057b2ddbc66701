use glam::{Mat4, Vec3};

use crate::camera::core::{
    forward_from_angles, Camera, CameraTransforms, CameraUniform,
};
use crate::input::{FrameInput, MoveDirection};
use crate::options::CameraOptions;

/// First-person camera controller: mouse-look, walk/fly movement and
/// scroll zoom over a single [`Camera`].
///
/// All operations are total. Pitch and field of view are clamped silently
/// to the ranges in [`CameraOptions`]; non-finite input is ignored.
///
/// Movement calls are additive and not re-normalized, so holding two
/// perpendicular directions moves √2 times faster than holding one.
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    options: CameraOptions,
}

impl CameraController {
    /// Camera at `(0, height, 8)` looking down -Z with default options.
    #[must_use]
    pub fn new(height: f32, fov: f32) -> Self {
        Self::with_options(height, fov, CameraOptions::default())
    }

    /// Camera at `(0, height, 8)` looking down -Z.
    ///
    /// `fov` is clamped into `options.fov_range`.
    #[must_use]
    pub fn with_options(height: f32, fov: f32, options: CameraOptions) -> Self {
        let mut camera = Camera::new(height, fov);
        camera.field_of_view = options.fov_range.clamp(fov);
        if camera.field_of_view != fov {
            log::warn!(
                "initial field of view {fov} outside [{}, {}], using {}",
                options.fov_range.min,
                options.fov_range.max,
                camera.field_of_view
            );
        }
        Self { camera, options }
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Active configuration.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the configuration, pulling pitch, field of view and (when
    /// pinned) eye height into the new limits.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;

        let pitch = self.options.pitch_range.clamp(self.camera.pitch);
        if pitch != self.camera.pitch {
            self.camera.pitch = pitch;
            self.camera.forward =
                forward_from_angles(self.camera.yaw, self.camera.pitch);
        }
        self.camera.field_of_view =
            self.options.fov_range.clamp(self.camera.field_of_view);
        self.pin_height();

        log::debug!(
            "camera options updated: speed {}, sensitivity {}, pin {:?}",
            self.options.move_speed,
            self.options.look_sensitivity,
            self.options.pin_height
        );
    }

    /// Eye position, for view-position lighting uniforms.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.camera.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.camera.forward
    }

    /// Unit vector to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.camera.right()
    }

    /// Heading in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.camera.yaw
    }

    /// Elevation in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.camera.pitch
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.camera.field_of_view
    }

    /// Move in `direction` for `dt` milliseconds.
    ///
    /// Forward/backward follow the full view direction (including pitch);
    /// left/right follow the right vector. A negative or non-finite `dt`
    /// moves nothing.
    pub fn process_movement(&mut self, direction: MoveDirection, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let step = dt * self.options.move_speed;

        let offset = match direction {
            MoveDirection::Forward => self.camera.forward * step,
            MoveDirection::Backward => -self.camera.forward * step,
            MoveDirection::Left => -self.camera.right() * step,
            MoveDirection::Right => self.camera.right() * step,
        };
        self.camera.position += offset;
        self.pin_height();
    }

    /// Turn by a mouse delta. Positive `dx` looks right, positive `dy`
    /// looks up.
    pub fn process_look(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            log::debug!("ignoring non-finite look delta ({dx}, {dy})");
            return;
        }
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let sensitivity = self.options.look_sensitivity;
        let yaw = self.camera.yaw + dx * sensitivity;
        if yaw.is_finite() {
            self.camera.yaw = yaw;
        }
        self.camera.pitch = self
            .options
            .pitch_range
            .clamp(self.camera.pitch + dy * sensitivity);

        self.camera.forward =
            forward_from_angles(self.camera.yaw, self.camera.pitch);
    }

    /// Widen (positive) or narrow (negative) the field of view by `dy`
    /// degrees.
    pub fn process_zoom(&mut self, dy: f32) {
        if !dy.is_finite() {
            log::debug!("ignoring non-finite zoom delta {dy}");
            return;
        }
        self.camera.field_of_view = self
            .options
            .fov_range
            .clamp(self.camera.field_of_view + dy);
    }

    /// Apply one frame of input: look first, then every held direction,
    /// then zoom.
    pub fn apply_frame(&mut self, input: &FrameInput) {
        self.process_look(input.look.x, input.look.y);
        for direction in input.held.iter() {
            self.process_movement(direction, input.dt);
        }
        if input.zoom != 0.0 {
            self.process_zoom(input.zoom);
        }
    }

    /// Look-at view matrix from the eye along the view direction.
    #[must_use]
    pub fn view_transform(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Perspective projection for the current field of view.
    #[must_use]
    pub fn projection_transform(&self, aspect: f32) -> Mat4 {
        self.camera
            .projection_matrix(aspect, self.options.znear, self.options.zfar)
    }

    /// View and projection matrices together.
    #[must_use]
    pub fn transforms(&self, aspect: f32) -> CameraTransforms {
        CameraTransforms {
            view: self.view_transform(),
            projection: self.projection_transform(aspect),
        }
    }

    /// Snapshot for upload as a uniform buffer.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.camera, &self.transforms(aspect), aspect);
        uniform
    }

    fn pin_height(&mut self) {
        if let Some(height) = self.options.pin_height {
            self.camera.position.y = height;
        }
    }
}
