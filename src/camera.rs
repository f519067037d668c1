use glam::{Mat4, Vec3};

use crate::config::CameraSettings;
use crate::core::WindowDimensions;
use crate::types::CameraUniform;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Movement directions, kept apart from any windowing system's key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by Euler angles.
///
/// `front`, `right` and `up` are always rebuilt from `yaw`, `pitch` and the
/// fixed `world_up`, so they stay orthonormal no matter how many mouse
/// events have been applied. View and projection are computed on demand from
/// that state.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
    aspect_ratio: f32,
    first_mouse: bool,
}

impl Camera {
    /// Camera at `position` looking down -Z (yaw -90°, pitch 0°)
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        Self::with_angles(position, world_up, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_angles(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            aspect_ratio: 1.0,
            first_mouse: true,
        };
        camera.update_vectors();
        camera
    }

    /// Build from loaded settings. Out-of-range pitch and zoom are clamped;
    /// non-finite values fall back to the defaults.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self::with_angles(
            Vec3::from_array(settings.position),
            Vec3::from_array(settings.world_up),
            finite_or("yaw", settings.yaw, DEFAULT_YAW),
            finite_or("pitch", settings.pitch, DEFAULT_PITCH).clamp(-PITCH_LIMIT, PITCH_LIMIT),
        );
        camera.movement_speed = finite_or("movement_speed", settings.movement_speed, DEFAULT_SPEED);
        camera.mouse_sensitivity =
            finite_or("mouse_sensitivity", settings.mouse_sensitivity, DEFAULT_SENSITIVITY);
        camera.zoom = finite_or("zoom", settings.zoom, DEFAULT_ZOOM).clamp(MIN_ZOOM, MAX_ZOOM);
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// True until the first mouse-move event has been swallowed
    pub fn awaiting_first_mouse(&self) -> bool {
        self.first_mouse
    }

    /// Update the aspect ratio from viewport size. A minimized window
    /// reports zero height; the previous ratio is kept in that case.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if let Some(aspect_ratio) = WindowDimensions::new(width, height).aspect_ratio() {
            self.aspect_ratio = aspect_ratio;
        }
    }

    /// Move along `front` or `right` by `movement_speed * delta_seconds`.
    ///
    /// Each held direction is a separate call, so diagonals are faster than
    /// straight movement.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_seconds: f32) {
        if !delta_seconds.is_finite() {
            log::warn!("Ignoring non-finite frame delta: {}", delta_seconds);
            return;
        }

        let velocity = self.movement_speed * delta_seconds;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a raw mouse delta in pixels.
    ///
    /// `y_offset` is screen-space (positive = cursor moved down), so it is
    /// subtracted from pitch: moving the mouse up looks up. The first event
    /// a camera sees is dropped because the cursor warp on window creation
    /// reports a large bogus delta.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        if self.first_mouse {
            self.first_mouse = false;
            log::debug!("Discarding first mouse delta ({}, {})", x_offset, y_offset);
            return;
        }

        if !x_offset.is_finite() || !y_offset.is_finite() {
            log::warn!("Ignoring non-finite mouse delta ({}, {})", x_offset, y_offset);
            return;
        }

        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch -= y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Mouse look with pitch constrained
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.process_mouse_movement(x_offset, y_offset, true);
    }

    /// Scrolling up narrows the field of view
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            log::warn!("Ignoring non-finite scroll delta: {}", y_offset);
            return;
        }

        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
        log::trace!("Zoom: {:.1}", self.zoom);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), self.aspect_ratio, Z_NEAR, Z_FAR)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self, model: Mat4) -> CameraUniform {
        CameraUniform {
            model: model.to_cols_array_2d(),
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        // Normalized so strafing speed doesn't shrink as pitch approaches the poles
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

fn finite_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Camera {} is {}, using {}", name, value, default);
        default
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y)
    }
}
