pub mod camera;
pub mod cli;
pub mod description;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod light;
pub mod loaders;
pub mod manager;
pub mod material;
pub mod record;
pub mod scenes;
pub mod sync;
pub mod uniforms;

// Re-export the types hosts touch on every frame
pub use light::LightDirection;
pub use manager::{SceneError, SceneManager};
pub use material::{Algorithm, MaterialBank, ShaderRole, StaticMaterialBank};
pub use record::SceneRecord;
