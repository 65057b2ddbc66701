use glam::{Mat4, Vec3};

/// Eye placement used by [`Camera::new`]: on the +Z axis, facing the origin.
pub const DEFAULT_EYE_DISTANCE: f32 = 8.0;

/// First-person camera state: where the viewer stands and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Unit view direction, derived from `yaw` and `pitch`.
    pub forward: Vec3,
    /// World up; the camera never rolls.
    pub up: Vec3,
    /// Heading in degrees. Unbounded.
    pub yaw: f32,
    /// Elevation in degrees, positive looks up.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
}

impl Camera {
    /// Camera at `(0, height, 8)` looking down -Z.
    #[must_use]
    pub fn new(height: f32, field_of_view: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, DEFAULT_EYE_DISTANCE),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
            field_of_view,
        }
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize_or_zero()
    }

    /// Build the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Build the projection matrix for a viewport with the given aspect
    /// ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(self.field_of_view.to_radians(), aspect, znear, zfar)
    }
}

/// Spherical-to-Cartesian view direction for angles in degrees.
///
/// `yaw = 0` points along +X, `yaw = -90` along -Z; positive pitch tilts
/// toward +Y.
#[must_use]
pub fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
}

/// View and projection matrices handed to the renderer together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransforms {
    /// World-to-view matrix.
    pub view: Mat4,
    /// View-to-clip matrix.
    pub projection: Mat4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and the eye data
/// lighting shaders need.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the camera and its transforms.
    pub fn update(
        &mut self,
        camera: &Camera,
        transforms: &CameraTransforms,
        aspect: f32,
    ) {
        self.view_proj =
            (transforms.projection * transforms.view).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = aspect;
        self.forward = camera.forward.to_array();
        self.fovy = camera.field_of_view;
    }
}
