use glam::Vec3;

use crate::camera::CameraState;
use crate::description::{GroundDescription, ModelDescription, ModelKind, SceneDescription};
use crate::geometry::{build_cuboid, build_ground_grid, build_sphere, build_star, GeometryBuffer};
use crate::light::LightState;
use crate::manager::SceneError;
use crate::material::{Algorithm, MaterialHandle, MaterialSet, ShaderRole};
use crate::uniforms::MAX_LIGHTS;

/// Identifies one scene for the lifetime of its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(usize);

impl SceneHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Texture slot content: the built-in 1x1 white placeholder, or a resource
/// path handed through verbatim to the host loader.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureRef {
    White,
    Path(String),
}

impl TextureRef {
    fn from_path(path: Option<&String>) -> Self {
        match path {
            Some(p) => TextureRef::Path(p.clone()),
            None => TextureRef::White,
        }
    }
}

/// Heightmap displacement settings carried by ground meshes. The scalar may
/// be negative, which inverts the displacement.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundDisplacement {
    pub height_scalar: f32,
    pub heightmap: TextureRef,
}

/// Shader-facing surface properties carried alongside a mesh. The material
/// handle itself lives outside this struct because it is re-resolved on
/// every algorithm switch rather than stored as a fixed reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialMetadata {
    pub base_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub shininess: f32,
    pub texture: TextureRef,
    pub texture_scale: [f32; 2],
    /// Present only on ground meshes.
    pub displacement: Option<GroundDisplacement>,
}

/// One placed mesh in a scene.
#[derive(Debug, Clone)]
pub struct Model {
    kind: ModelKind,
    geometry: GeometryBuffer,
    role: ShaderRole,
    material: MaterialHandle,
    pub metadata: MaterialMetadata,
    pub center: Vec3,
    pub size: Vec3,
    pub rotation: Vec3,
}

impl Model {
    fn from_description(
        description: &ModelDescription,
        materials: &MaterialSet,
        algorithm: &Algorithm,
    ) -> Result<Self, SceneError> {
        let geometry = match description.kind {
            // Unit-diameter sphere and unit cube; `size` scales them.
            ModelKind::Sphere => build_sphere(0.5, description.segments)?,
            ModelKind::Box => build_cuboid(1.0, 1.0, 1.0)?,
            ModelKind::Custom => build_star(&description.star.to_params())?,
        };
        let material = materials
            .resolve(description.shader, algorithm)
            .ok_or_else(|| SceneError::UnknownAlgorithm {
                algorithm: algorithm.clone(),
            })?;

        Ok(Self {
            kind: description.kind,
            geometry,
            role: description.shader,
            material,
            metadata: MaterialMetadata {
                base_color: description.material.color,
                specular_color: description.material.specular,
                shininess: description.material.shininess,
                texture: TextureRef::from_path(description.texture.as_ref()),
                texture_scale: description.texture_scale,
                displacement: None,
            },
            center: Vec3::from_array(description.center),
            size: Vec3::from_array(description.size),
            rotation: Vec3::from_array(description.rotation),
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    pub fn role(&self) -> ShaderRole {
        self.role
    }

    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    pub(crate) fn set_material(&mut self, handle: MaterialHandle) {
        self.material = handle;
    }
}

/// The scene's heightmap-displaced ground lattice.
#[derive(Debug, Clone)]
pub struct GroundModel {
    geometry: GeometryBuffer,
    role: ShaderRole,
    material: MaterialHandle,
    pub metadata: MaterialMetadata,
    pub center: Vec3,
    pub size: Vec3,
    subdivisions: [u32; 2],
}

impl GroundModel {
    fn from_description(
        description: &GroundDescription,
        materials: &MaterialSet,
        algorithm: &Algorithm,
    ) -> Result<Self, SceneError> {
        let geometry = build_ground_grid(description.subdivisions[0], description.subdivisions[1])?;
        let material = materials
            .resolve(description.shader, algorithm)
            .ok_or_else(|| SceneError::UnknownAlgorithm {
                algorithm: algorithm.clone(),
            })?;

        Ok(Self {
            geometry,
            role: description.shader,
            material,
            metadata: MaterialMetadata {
                base_color: description.material.color,
                specular_color: description.material.specular,
                shininess: description.material.shininess,
                texture: TextureRef::from_path(description.texture.as_ref()),
                texture_scale: description.texture_scale,
                displacement: Some(GroundDisplacement {
                    height_scalar: description.height_scalar,
                    heightmap: TextureRef::from_path(description.heightmap.as_ref()),
                }),
            },
            center: Vec3::from_array(description.center),
            size: Vec3::from_array(description.size),
            subdivisions: description.subdivisions,
        })
    }

    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    pub fn role(&self) -> ShaderRole {
        self.role
    }

    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    pub fn subdivisions(&self) -> [u32; 2] {
        self.subdivisions
    }

    pub fn displacement(&self) -> Option<&GroundDisplacement> {
        self.metadata.displacement.as_ref()
    }

    pub(crate) fn set_material(&mut self, handle: MaterialHandle) {
        self.material = handle;
    }

    pub(crate) fn set_height_scalar(&mut self, scale: f32) {
        if let Some(displacement) = self.metadata.displacement.as_mut() {
            displacement.height_scalar = scale;
        }
    }
}

/// Everything one renderable scene owns: environment colors, camera, the
/// ordered light list, ground, models and the material set they resolve
/// into. Lights and models sit behind accessors so their count and order
/// are fixed once built; the camera stays freely mutable for host camera
/// controls.
#[derive(Debug, Clone)]
pub struct SceneRecord {
    handle: SceneHandle,
    pub background_color: [f32; 4],
    pub ambient_color: [f32; 3],
    pub camera: CameraState,
    lights: Vec<LightState>,
    ground: GroundModel,
    models: Vec<Model>,
    materials: MaterialSet,
    light_step: f32,
}

impl SceneRecord {
    pub(crate) fn build(
        index: usize,
        description: &SceneDescription,
        materials: MaterialSet,
        algorithm: &Algorithm,
    ) -> Result<Self, SceneError> {
        let lights: Vec<LightState> = description
            .light
            .point_lights
            .iter()
            .map(LightState::from_description)
            .collect();
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "scene {} has {} lights but the uniform block carries {}; extras still step, never reach shaders",
                index,
                lights.len(),
                MAX_LIGHTS
            );
        }

        let ground = GroundModel::from_description(&description.ground, &materials, algorithm)?;
        let models = description
            .models
            .iter()
            .map(|model| Model::from_description(model, &materials, algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "built scene {} with {} models and {} lights",
            index,
            models.len(),
            lights.len()
        );

        Ok(Self {
            handle: SceneHandle(index),
            background_color: description.background,
            ambient_color: description.light.ambient,
            camera: CameraState::from_description(&description.camera),
            lights,
            ground,
            models,
            materials,
            light_step: description.light_step,
        })
    }

    pub fn handle(&self) -> SceneHandle {
        self.handle
    }

    pub fn lights(&self) -> &[LightState] {
        &self.lights
    }

    pub fn light(&self, index: usize) -> Option<&LightState> {
        self.lights.get(index)
    }

    pub(crate) fn light_mut(&mut self, index: usize) -> Option<&mut LightState> {
        self.lights.get_mut(index)
    }

    pub fn ground(&self) -> &GroundModel {
        &self.ground
    }

    pub(crate) fn ground_mut(&mut self) -> &mut GroundModel {
        &mut self.ground
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn materials(&self) -> &MaterialSet {
        &self.materials
    }

    pub(crate) fn materials_mut(&mut self) -> &mut MaterialSet {
        &mut self.materials
    }

    /// Step distance the rig uses for this scene.
    pub fn light_step(&self) -> f32 {
        self.light_step
    }

    /// Handles of the ground's and every model's current material, deduped,
    /// in first-use order. These are the materials the synchronizer writes.
    pub fn materials_in_use(&self) -> Vec<MaterialHandle> {
        let mut handles = vec![self.ground.material];
        for model in &self.models {
            if !handles.contains(&model.material) {
                handles.push(model.material);
            }
        }
        handles
    }

    /// True when every role this scene uses resolves under `algorithm`.
    pub(crate) fn resolves_algorithm(&self, algorithm: &Algorithm) -> bool {
        if self.materials.resolve(self.ground.role, algorithm).is_none() {
            return false;
        }
        self.models
            .iter()
            .all(|model| self.materials.resolve(model.role, algorithm).is_some())
    }

    /// Re-resolves the ground's and every model's handle under `algorithm`.
    pub(crate) fn rebind_materials(&mut self, algorithm: &Algorithm) -> Result<(), SceneError> {
        let ground_handle = self
            .materials
            .resolve(self.ground.role, algorithm)
            .ok_or_else(|| SceneError::UnknownAlgorithm {
                algorithm: algorithm.clone(),
            })?;
        self.ground.set_material(ground_handle);

        for i in 0..self.models.len() {
            let handle = self
                .materials
                .resolve(self.models[i].role, algorithm)
                .ok_or_else(|| SceneError::UnknownAlgorithm {
                    algorithm: algorithm.clone(),
                })?;
            self.models[i].set_material(handle);
        }
        Ok(())
    }
}
