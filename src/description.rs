use serde::{Deserialize, Serialize};

use crate::geometry::StarParams;
use crate::material::ShaderRole;

/// One scene as handed over by the host: colors, camera, ground, models and
/// lighting. Consumed at build time, never produced by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Clear color, rgba in 0..1.
    pub background: [f32; 4],
    pub camera: CameraDescription,
    pub ground: GroundDescription,
    #[serde(default)]
    pub models: Vec<ModelDescription>,
    pub light: LightingDescription,
    /// Per-axis distance one light step command moves the active light.
    #[serde(default = "default_light_step")]
    pub light_step: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub position: [f32; 3],
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_near_clip")]
    pub near_clip: f32,
    #[serde(default = "default_far_clip")]
    pub far_clip: f32,
    /// Vertical field of view in radians.
    #[serde(default = "default_fov")]
    pub fov: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundDescription {
    #[serde(default = "default_ground_role")]
    pub shader: ShaderRole,
    pub material: MaterialDescription,
    pub center: [f32; 3],
    pub size: [f32; 3],
    #[serde(default = "default_subdivisions")]
    pub subdivisions: [u32; 2],
    /// Resource path passed through verbatim to the host texture loader.
    #[serde(default)]
    pub heightmap: Option<String>,
    #[serde(default = "default_one")]
    pub height_scalar: f32,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default = "default_texture_scale")]
    pub texture_scale: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    pub color: [f32; 3],
    #[serde(default)]
    pub specular: [f32; 3],
    #[serde(default = "default_one")]
    pub shininess: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Sphere,
    Box,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    #[serde(rename = "type")]
    pub kind: ModelKind,
    #[serde(default = "default_illum_role")]
    pub shader: ShaderRole,
    pub material: MaterialDescription,
    pub center: [f32; 3],
    #[serde(default = "default_unit_size")]
    pub size: [f32; 3],
    /// Euler angles in radians, applied by the host when drawing.
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Sphere lattice resolution; ignored by the other kinds.
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Star parameters; ignored unless `kind` is `custom`.
    #[serde(default)]
    pub star: StarDescription,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default = "default_texture_scale")]
    pub texture_scale: [f32; 2],
}

/// Star parameters as they appear in a description. The mesh is built in
/// model-local space; placement comes from the model's `center` and `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarDescription {
    #[serde(default = "default_star_points")]
    pub points: u32,
    #[serde(default = "default_star_outer")]
    pub outer_radius: f32,
    #[serde(default = "default_star_inner")]
    pub inner_radius: f32,
    #[serde(default)]
    pub center_y: f32,
    #[serde(default = "default_one")]
    pub depth: f32,
}

impl StarDescription {
    pub fn to_params(self) -> StarParams {
        StarParams {
            points: self.points,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            center_y: self.center_y,
            depth: self.depth,
        }
    }
}

impl Default for StarDescription {
    fn default() -> Self {
        Self {
            points: default_star_points(),
            outer_radius: default_star_outer(),
            inner_radius: default_star_inner(),
            center_y: 0.0,
            depth: default_one(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingDescription {
    pub ambient: [f32; 3],
    #[serde(default)]
    pub point_lights: Vec<PointLightDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLightDescription {
    pub position: [f32; 3],
    pub color: [f32; 3],
    #[serde(default = "default_light_specular")]
    pub specular: [f32; 3],
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_near_clip() -> f32 {
    0.1
}

fn default_far_clip() -> f32 {
    100.0
}

// 35 degrees, the reference camera's vertical fov.
fn default_fov() -> f32 {
    35.0_f32.to_radians()
}

fn default_ground_role() -> ShaderRole {
    ShaderRole::Ground
}

fn default_illum_role() -> ShaderRole {
    ShaderRole::Illum
}

fn default_subdivisions() -> [u32; 2] {
    [50, 50]
}

fn default_one() -> f32 {
    1.0
}

fn default_texture_scale() -> [f32; 2] {
    [1.0, 1.0]
}

fn default_unit_size() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_segments() -> u32 {
    32
}

fn default_star_points() -> u32 {
    5
}

fn default_star_outer() -> f32 {
    5.0
}

fn default_star_inner() -> f32 {
    3.0
}

fn default_light_step() -> f32 {
    0.1
}

fn default_light_specular() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}
