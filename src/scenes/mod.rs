mod showcase;
mod star;

pub use showcase::create_showcase_scene;
pub use star::create_star_scene;

use crate::description::SceneDescription;

/// The scenes the crate ships, as an explicit table indexed by scene number.
pub const BUILTIN_SCENES: [fn() -> SceneDescription; 2] =
    [create_showcase_scene, create_star_scene];

/// Descriptions of every built-in scene, in table order.
pub fn builtin_descriptions() -> Vec<SceneDescription> {
    BUILTIN_SCENES.iter().map(|build| build()).collect()
}
