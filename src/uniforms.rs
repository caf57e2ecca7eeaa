/// Most point lights one uniform block carries. Scenes may hold more; the
/// synchronizer truncates to this many and reports the truncated count.
pub const MAX_LIGHTS: usize = 8;

/// Scene-wide shader inputs, rewritten wholesale once per frame for every
/// material in use by the active scene.
///
/// Layout is 16-byte aligned for direct GPU upload: the light count rides in
/// the fourth lane of the camera position, light positions and diffuse
/// colors are vec4 arrays with zeroed fourth lanes, both in light-list
/// order.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub camera_position: [f32; 3],
    pub num_lights: u32,
    pub ambient_color: [f32; 3],
    pub _pad0: f32,
    pub light_positions: [[f32; 4]; MAX_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_LIGHTS],
}

impl SceneUniforms {
    pub fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    /// Raw bytes for a host `write_buffer` style upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_sixteen_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn zeroed_block_reports_no_lights() {
        let uniforms = SceneUniforms::zeroed();
        assert_eq!(uniforms.num_lights, 0);
        assert_eq!(uniforms.camera_position, [0.0; 3]);
    }

    #[test]
    fn byte_view_covers_the_whole_block() {
        let uniforms = SceneUniforms::zeroed();
        assert_eq!(
            uniforms.as_bytes().len(),
            std::mem::size_of::<SceneUniforms>()
        );
    }
}
