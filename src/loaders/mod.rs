pub mod scene_json;

pub use scene_json::{load_scene_file, parse_scene_json};
