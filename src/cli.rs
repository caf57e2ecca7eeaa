// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "shading-lab")]
#[command(about = "Multi-scene shading lab demo driver", long_about = None)]
pub struct Cli {
    /// JSON file holding one scene description or an array of them;
    /// the built-in scenes are used when omitted
    #[arg(long = "scene")]
    pub scene: Option<PathBuf>,

    /// Number of frames to drive before exiting
    #[arg(long = "frames", default_value = "12")]
    pub frames: u64,

    /// Shading algorithms the stub material bank offers
    #[arg(
        long = "algorithms",
        value_delimiter = ',',
        default_values_t = vec![String::from("gouraud"), String::from("phong")]
    )]
    pub algorithms: Vec<String>,

    /// Algorithm every scene starts with; must be one of the bank's
    #[arg(long = "algorithm", default_value = "gouraud")]
    pub algorithm: String,

    /// Index of the scene activated first
    #[arg(long = "start-scene", default_value = "0")]
    pub start_scene: usize,
}
