use glam::{Mat4, Vec3};

use crate::description::CameraDescription;

/// Per-scene camera: position, aim and projection parameters.
///
/// Mutated freely by host camera controls between frames; the synchronizer
/// only reads the world position, hosts derive the two matrices when they
/// draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl CameraState {
    pub fn from_description(description: &CameraDescription) -> Self {
        Self {
            position: Vec3::from_array(description.position),
            target: Vec3::from_array(description.target),
            up: Vec3::from_array(description.up),
            fov: description.fov,
            near_clip: description.near_clip,
            far_clip: description.far_clip,
        }
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, self.near_clip, self.far_clip)
    }
}
