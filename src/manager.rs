use std::fmt;

use crate::description::SceneDescription;
use crate::geometry::GeometryError;
use crate::light::LightDirection;
use crate::material::{Algorithm, MaterialBank};
use crate::record::SceneRecord;
use crate::sync;

/// A recoverable scene-management fault. The render loop never dies on
/// these; callers surface them and the manager's state stays as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Managers are built from at least one scene description.
    NoScenes,
    SceneIndexOutOfBounds { index: usize, count: usize },
    LightIndexOutOfBounds { index: usize, count: usize },
    /// The material bank has no entry for the requested algorithm.
    UnknownAlgorithm { algorithm: Algorithm },
    /// Height scale accepts any finite value, including negatives.
    NonFiniteHeightScale { value: f32 },
    /// A procedural mesh rejected its parameters during a scene build.
    Geometry(GeometryError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NoScenes => {
                write!(f, "scene manager needs at least one scene description")
            }
            SceneError::SceneIndexOutOfBounds { index, count } => {
                write!(f, "scene index {index} out of bounds for {count} scenes")
            }
            SceneError::LightIndexOutOfBounds { index, count } => {
                write!(
                    f,
                    "light index {index} out of bounds for {count} lights in the active scene"
                )
            }
            SceneError::UnknownAlgorithm { algorithm } => {
                write!(f, "no material for shading algorithm '{algorithm}'")
            }
            SceneError::NonFiniteHeightScale { value } => {
                write!(f, "height scale must be finite, got {value}")
            }
            SceneError::Geometry(err) => {
                write!(f, "geometry construction failed: {err}")
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for SceneError {
    fn from(err: GeometryError) -> Self {
        SceneError::Geometry(err)
    }
}

/// Owns the ordered scene collection and the two cursor indices: which scene
/// is rendered and which of its lights step commands target.
///
/// All scenes are built eagerly at construction and live as long as the
/// manager; nothing is added or destroyed afterwards. Global operations
/// (algorithm switch, height scale) apply to every scene at once, the
/// per-frame uniform pass only to the active one.
#[derive(Debug)]
pub struct SceneManager {
    scenes: Vec<SceneRecord>,
    active_scene: usize,
    active_light: usize,
    shading_algorithm: Algorithm,
}

impl SceneManager {
    /// Builds every scene with the default shading algorithm.
    pub fn build(
        descriptions: &[SceneDescription],
        bank: &mut dyn MaterialBank,
    ) -> Result<Self, SceneError> {
        Self::build_with_algorithm(descriptions, bank, Algorithm::default())
    }

    /// Builds every scene eagerly, in description order. The bank is asked
    /// once per scene for its material set, and the initial algorithm must
    /// resolve for every role each scene uses.
    pub fn build_with_algorithm(
        descriptions: &[SceneDescription],
        bank: &mut dyn MaterialBank,
        algorithm: Algorithm,
    ) -> Result<Self, SceneError> {
        if descriptions.is_empty() {
            return Err(SceneError::NoScenes);
        }

        let mut scenes = Vec::with_capacity(descriptions.len());
        for (index, description) in descriptions.iter().enumerate() {
            let materials = bank.materials_for_scene(index, description);
            scenes.push(SceneRecord::build(index, description, materials, &algorithm)?);
        }

        log::info!(
            "scene manager ready: {} scene(s), shading algorithm '{}'",
            scenes.len(),
            algorithm
        );
        Ok(Self {
            scenes,
            active_scene: 0,
            active_light: 0,
            shading_algorithm: algorithm,
        })
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }

    pub fn scene(&self, index: usize) -> Option<&SceneRecord> {
        self.scenes.get(index)
    }

    pub fn active_scene(&self) -> &SceneRecord {
        &self.scenes[self.active_scene]
    }

    /// Mutable view of the active scene, for host camera controls. Light
    /// and model lists stay behind the record's own accessors.
    pub fn active_scene_mut(&mut self) -> &mut SceneRecord {
        &mut self.scenes[self.active_scene]
    }

    pub fn active_scene_index(&self) -> usize {
        self.active_scene
    }

    pub fn active_light_index(&self) -> usize {
        self.active_light
    }

    pub fn shading_algorithm(&self) -> &Algorithm {
        &self.shading_algorithm
    }

    /// Switches which scene renders. Takes effect on the next frame's
    /// uniform pass; there is no transition.
    pub fn set_active_scene(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.scenes.len() {
            return Err(SceneError::SceneIndexOutOfBounds {
                index,
                count: self.scenes.len(),
            });
        }
        self.active_scene = index;
        // The active light must stay inside the new scene's list; fall back
        // to the first light when it does not.
        if self.active_light >= self.scenes[index].lights().len() {
            self.active_light = 0;
        }
        log::debug!("active scene set to {index}");
        Ok(())
    }

    pub fn set_active_light(&mut self, index: usize) -> Result<(), SceneError> {
        let count = self.active_scene().lights().len();
        if index >= count {
            return Err(SceneError::LightIndexOutOfBounds { index, count });
        }
        self.active_light = index;
        log::debug!("active light set to {index}");
        Ok(())
    }

    /// Re-resolves every model's and every ground's material across all
    /// scenes at once, not just the active one. Validation runs over every
    /// scene before anything rebinds, so an unknown algorithm leaves all of
    /// them on the current binding. Switching to the current algorithm is a
    /// no-op that resolves to the same handles.
    pub fn set_shading_algorithm(
        &mut self,
        algorithm: impl Into<Algorithm>,
    ) -> Result<(), SceneError> {
        let algorithm = algorithm.into();
        for scene in &self.scenes {
            if !scene.resolves_algorithm(&algorithm) {
                return Err(SceneError::UnknownAlgorithm { algorithm });
            }
        }
        for scene in &mut self.scenes {
            scene.rebind_materials(&algorithm)?;
        }
        log::info!("shading algorithm set to '{algorithm}'");
        self.shading_algorithm = algorithm;
        Ok(())
    }

    /// Applies one heightmap displacement scale to every scene's ground.
    /// Negative values invert the displacement and are allowed; only
    /// NaN/infinity are rejected.
    pub fn set_height_scale(&mut self, scale: f32) -> Result<(), SceneError> {
        if !scale.is_finite() {
            return Err(SceneError::NonFiniteHeightScale { value: scale });
        }
        for scene in &mut self.scenes {
            scene.ground_mut().set_height_scalar(scale);
        }
        log::debug!("ground height scale set to {scale}");
        Ok(())
    }

    /// Moves the active scene's active light by `direction * magnitude`.
    /// Light positions are unbounded on purpose; pushing a light behind or
    /// inside geometry is part of exploring the shading.
    pub fn step_light(
        &mut self,
        direction: LightDirection,
        magnitude: f32,
    ) -> Result<(), SceneError> {
        let scene = &mut self.scenes[self.active_scene];
        let count = scene.lights().len();
        let light = scene
            .light_mut(self.active_light)
            .ok_or(SceneError::LightIndexOutOfBounds {
                index: self.active_light,
                count,
            })?;
        light.position += direction.delta() * magnitude;
        log::trace!(
            "stepped light {} by {:?} * {}",
            self.active_light,
            direction,
            magnitude
        );
        Ok(())
    }

    /// Steps the active light by the active scene's configured distance.
    pub fn step_active_light(&mut self, direction: LightDirection) -> Result<(), SceneError> {
        let magnitude = self.active_scene().light_step();
        self.step_light(direction, magnitude)
    }

    /// Per-frame pass: pushes the active scene's camera, ambient and light
    /// state into every material its meshes currently bind. Inactive scenes
    /// are skipped on purpose; their uniforms go stale until they are
    /// reactivated, and nothing draws them in the meantime.
    pub fn before_frame(&mut self) {
        sync::sync_scene_materials(&mut self.scenes[self.active_scene]);
    }
}
