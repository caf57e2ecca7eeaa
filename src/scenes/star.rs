use crate::description::{
    CameraDescription, GroundDescription, LightingDescription, MaterialDescription,
    ModelDescription, ModelKind, PointLightDescription, SceneDescription, StarDescription,
};
use crate::material::ShaderRole;

/// Star scene: a five-pointed bipyramid star floating above a deep purple
/// ground, lit by a single magenta point light. The camera aims up at the
/// star's center.
pub fn create_star_scene() -> SceneDescription {
    SceneDescription {
        background: [0.173, 0.004, 0.258, 1.0],
        camera: CameraDescription {
            position: [0.0, 1.8, 10.0],
            target: [0.0, 5.0, 0.0],
            up: [0.0, 1.0, 0.0],
            near_clip: 0.1,
            far_clip: 100.0,
            fov: 35.0_f32.to_radians(),
        },
        ground: GroundDescription {
            shader: ShaderRole::Ground,
            material: MaterialDescription {
                color: [0.173, 0.004, 0.258],
                specular: [0.0, 0.0, 0.0],
                shininess: 1.0,
            },
            center: [0.0, 0.0, 0.0],
            size: [20.0, 1.0, 20.0],
            subdivisions: [50, 50],
            heightmap: Some(String::from("heightmaps/default.png")),
            height_scalar: 1.0,
            texture: None,
            texture_scale: [1.0, 1.0],
        },
        models: vec![ModelDescription {
            kind: ModelKind::Custom,
            shader: ShaderRole::Illum,
            material: MaterialDescription {
                color: [0.75, 0.15, 0.05],
                specular: [0.4, 0.4, 0.4],
                shininess: 5.0,
            },
            center: [0.0, 0.0, 0.0],
            size: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0],
            segments: 32,
            // The star already carries its height in mesh space.
            star: StarDescription {
                points: 5,
                outer_radius: 5.0,
                inner_radius: 3.0,
                center_y: 5.0,
                depth: 1.0,
            },
            texture: None,
            texture_scale: [1.0, 1.0],
        }],
        light: LightingDescription {
            ambient: [0.2, 0.2, 0.2],
            point_lights: vec![PointLightDescription {
                position: [1.0, 1.0, 5.0],
                color: [0.977, 0.469, 0.996],
                specular: [1.0, 1.0, 1.0],
            }],
        },
        light_step: 0.25,
    }
}
