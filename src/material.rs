use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::description::SceneDescription;
use crate::uniforms::SceneUniforms;

/// Algorithm every scene starts with unless told otherwise.
pub const DEFAULT_ALGORITHM: &str = "gouraud";

/// Which shader family a mesh binds: the heightmap-displaced ground shader
/// or the general illumination shader used by every other model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderRole {
    Ground,
    Illum,
}

impl ShaderRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ShaderRole::Ground => "ground",
            ShaderRole::Illum => "illum",
        }
    }
}

impl fmt::Display for ShaderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shading technique name shared by all roles ("gouraud", "phong", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Algorithm(String);

impl Algorithm {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::new(DEFAULT_ALGORITHM)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Typed lookup key into a scene's material set. Meshes never hold a fixed
/// material reference; they re-resolve through this key so the algorithm can
/// be swapped at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialKey {
    pub role: ShaderRole,
    pub algorithm: Algorithm,
}

impl MaterialKey {
    pub fn new(role: ShaderRole, algorithm: impl Into<Algorithm>) -> Self {
        Self {
            role,
            algorithm: algorithm.into(),
        }
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.role, self.algorithm)
    }
}

/// Opaque index to one material inside its scene's `MaterialSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(usize);

impl MaterialHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One shader-backed material: its lookup key plus the uniform block the
/// synchronizer rewrites each frame. Hosts read the block back with
/// [`ShaderMaterial::uniform_bytes`] and upload it to their own buffers;
/// shader compilation stays on their side.
#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    key: MaterialKey,
    label: String,
    uniforms: SceneUniforms,
}

impl ShaderMaterial {
    pub fn new(key: MaterialKey) -> Self {
        let label = key.to_string();
        Self {
            key,
            label,
            uniforms: SceneUniforms::zeroed(),
        }
    }

    pub fn key(&self) -> &MaterialKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }

    pub fn uniform_bytes(&self) -> &[u8] {
        self.uniforms.as_bytes()
    }

    pub(crate) fn write_uniforms(&mut self, uniforms: SceneUniforms) {
        self.uniforms = uniforms;
    }
}

/// Per-scene mapping from `(role, algorithm)` to shader-backed materials,
/// handed over by the material bank when the scene is built.
#[derive(Debug, Clone, Default)]
pub struct MaterialSet {
    materials: Vec<ShaderMaterial>,
    by_key: HashMap<MaterialKey, MaterialHandle>,
}

impl MaterialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material, replacing any existing one under the same key.
    pub fn insert(&mut self, material: ShaderMaterial) -> MaterialHandle {
        if let Some(&handle) = self.by_key.get(material.key()) {
            self.materials[handle.0] = material;
            return handle;
        }
        let handle = MaterialHandle(self.materials.len());
        self.by_key.insert(material.key().clone(), handle);
        self.materials.push(material);
        handle
    }

    pub fn resolve(&self, role: ShaderRole, algorithm: &Algorithm) -> Option<MaterialHandle> {
        let key = MaterialKey {
            role,
            algorithm: algorithm.clone(),
        };
        self.by_key.get(&key).copied()
    }

    pub fn material(&self, handle: MaterialHandle) -> Option<&ShaderMaterial> {
        self.materials.get(handle.0)
    }

    pub(crate) fn material_mut(&mut self, handle: MaterialHandle) -> Option<&mut ShaderMaterial> {
        self.materials.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialHandle, &ShaderMaterial)> {
        self.materials
            .iter()
            .enumerate()
            .map(|(i, m)| (MaterialHandle(i), m))
    }
}

/// External collaborator supplying the per-scene material sets. Render hosts
/// wrap their shader pipelines in this; the core only consumes the mapping.
pub trait MaterialBank {
    fn materials_for_scene(
        &mut self,
        scene_index: usize,
        description: &SceneDescription,
    ) -> MaterialSet;
}

/// CPU-side bank fabricating one material per `(role, algorithm)` pair for a
/// fixed algorithm list. Stands in for a real shader table in the demo
/// binary and in tests.
#[derive(Debug, Clone)]
pub struct StaticMaterialBank {
    algorithms: Vec<Algorithm>,
}

impl StaticMaterialBank {
    pub fn new<I, A>(algorithms: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Algorithm>,
    {
        Self {
            algorithms: algorithms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }
}

impl Default for StaticMaterialBank {
    fn default() -> Self {
        Self::new([DEFAULT_ALGORITHM, "phong"])
    }
}

impl MaterialBank for StaticMaterialBank {
    fn materials_for_scene(
        &mut self,
        scene_index: usize,
        _description: &SceneDescription,
    ) -> MaterialSet {
        let mut set = MaterialSet::new();
        for role in [ShaderRole::Ground, ShaderRole::Illum] {
            for algorithm in &self.algorithms {
                set.insert(ShaderMaterial::new(MaterialKey {
                    role,
                    algorithm: algorithm.clone(),
                }));
            }
        }
        log::debug!(
            "fabricated {} materials for scene {}",
            set.len(),
            scene_index
        );
        set
    }
}
