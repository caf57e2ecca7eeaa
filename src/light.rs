use glam::Vec3;

use crate::description::PointLightDescription;

/// One point light inside a scene's ordered light list.
///
/// The list's order is the source of truth for which index a step command
/// targets, so lights are never reordered after the scene is built; only
/// their fields mutate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub position: Vec3,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl LightState {
    pub fn from_description(description: &PointLightDescription) -> Self {
        Self {
            position: Vec3::from_array(description.position),
            diffuse: description.color,
            specular: description.specular,
        }
    }
}

/// Axis-aligned step command applied to the active light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightDirection {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl LightDirection {
    pub const ALL: [LightDirection; 6] = [
        LightDirection::PosX,
        LightDirection::NegX,
        LightDirection::PosY,
        LightDirection::NegY,
        LightDirection::PosZ,
        LightDirection::NegZ,
    ];

    /// Unit displacement for one step of magnitude 1.
    pub fn delta(self) -> Vec3 {
        match self {
            LightDirection::PosX => Vec3::X,
            LightDirection::NegX => Vec3::NEG_X,
            LightDirection::PosY => Vec3::Y,
            LightDirection::NegY => Vec3::NEG_Y,
            LightDirection::PosZ => Vec3::Z,
            LightDirection::NegZ => Vec3::NEG_Z,
        }
    }
}
