use crate::description::{
    CameraDescription, GroundDescription, LightingDescription, MaterialDescription,
    ModelDescription, ModelKind, PointLightDescription, SceneDescription, StarDescription,
};
use crate::material::ShaderRole;

/// Sphere-and-box showcase: two solids over a heightmapped ground, one green
/// and one white point light to compare against.
pub fn create_showcase_scene() -> SceneDescription {
    SceneDescription {
        background: [0.1, 0.1, 0.1, 1.0],
        camera: CameraDescription {
            position: [0.0, 1.8, 10.0],
            target: [0.0, 1.8, 0.0],
            up: [0.0, 1.0, 0.0],
            near_clip: 0.1,
            far_clip: 100.0,
            fov: 35.0_f32.to_radians(),
        },
        ground: GroundDescription {
            shader: ShaderRole::Ground,
            material: MaterialDescription {
                color: [0.10, 0.65, 0.15],
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
        models: vec![
            ModelDescription {
                kind: ModelKind::Sphere,
                shader: ShaderRole::Illum,
                material: MaterialDescription {
                    color: [0.10, 0.35, 0.88],
                    specular: [0.8, 0.8, 0.8],
                    shininess: 16.0,
                },
                center: [1.0, 0.5, 3.0],
                size: [1.0, 1.0, 1.0],
                rotation: [0.0, 0.0, 0.0],
                segments: 32,
                star: StarDescription::default(),
                texture: None,
                texture_scale: [1.0, 1.0],
            },
            ModelDescription {
                kind: ModelKind::Box,
                shader: ShaderRole::Illum,
                material: MaterialDescription {
                    color: [0.75, 0.15, 0.05],
                    specular: [0.4, 0.4, 0.4],
                    shininess: 4.0,
                },
                center: [-1.0, 0.5, 2.0],
                size: [2.0, 1.0, 1.0],
                rotation: [0.0, 0.0, 0.0],
                segments: 32,
                star: StarDescription::default(),
                texture: None,
                texture_scale: [1.0, 1.0],
            },
        ],
        light: LightingDescription {
            ambient: [0.2, 0.2, 0.2],
            point_lights: vec![
                PointLightDescription {
                    position: [1.0, 1.0, 5.0],
                    color: [0.1, 1.0, 0.1],
                    specular: [1.0, 1.0, 1.0],
                },
                PointLightDescription {
                    position: [0.0, 3.0, 0.0],
                    color: [1.0, 1.0, 1.0],
                    specular: [1.0, 1.0, 1.0],
                },
            ],
        },
        light_step: 0.1,
    }
}
