use crate::record::SceneRecord;
use crate::uniforms::{SceneUniforms, MAX_LIGHTS};

/// Packs a scene's shader-visible state into one uniform block.
///
/// Light positions and diffuse colors land in light-list order; that order
/// is what the active light index refers to, so it must never change after
/// the scene is built. Lights past `MAX_LIGHTS` are dropped and the count
/// reports only what was written.
pub fn scene_uniforms(scene: &SceneRecord) -> SceneUniforms {
    let mut uniforms = SceneUniforms::zeroed();
    uniforms.camera_position = scene.camera.position.to_array();
    uniforms.ambient_color = scene.ambient_color;

    let count = scene.lights().len().min(MAX_LIGHTS);
    uniforms.num_lights = count as u32;
    for (slot, light) in scene.lights().iter().take(MAX_LIGHTS).enumerate() {
        let position = light.position;
        uniforms.light_positions[slot] = [position.x, position.y, position.z, 0.0];
        uniforms.light_colors[slot] = [
            light.diffuse[0],
            light.diffuse[1],
            light.diffuse[2],
            0.0,
        ];
    }
    uniforms
}

/// Runs the per-frame pass for one scene: rewrites the uniform block of
/// every material its meshes currently bind, once each. Materials in the
/// set but not in use stay untouched, as do other scenes entirely; a scene
/// that is not drawn has no one to read its uniforms.
pub fn sync_scene_materials(scene: &mut SceneRecord) {
    let uniforms = scene_uniforms(scene);
    for handle in scene.materials_in_use() {
        if let Some(material) = scene.materials_mut().material_mut(handle) {
            material.write_uniforms(uniforms);
        }
    }
    log::trace!(
        "synchronized scene {} uniforms ({} lights)",
        scene.handle().index(),
        uniforms.num_lights
    );
}
