use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::description::SceneDescription;

/// Loads scene descriptions from a JSON file holding either a single
/// description object or an array of them.
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Vec<SceneDescription>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .context(format!("Failed to read scene file: {:?}", path))?;

    let scenes = parse_scene_json(&text)
        .context(format!("Failed to parse scene file: {:?}", path))?;

    log::info!(
        "loaded {} scene description(s) from {:?}",
        scenes.len(),
        path
    );
    Ok(scenes)
}

/// Parses the JSON text of one description or an array of them.
pub fn parse_scene_json(text: &str) -> Result<Vec<SceneDescription>> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("Scene file is not valid JSON")?;

    let scenes: Vec<SceneDescription> = if value.is_array() {
        serde_json::from_value(value).context("Scene array does not match the description shape")?
    } else {
        let scene = serde_json::from_value(value)
            .context("Scene object does not match the description shape")?;
        vec![scene]
    };

    if scenes.is_empty() {
        anyhow::bail!("Scene file holds an empty array");
    }
    Ok(scenes)
}
