use anyhow::{Context, Result};
use clap::Parser;

use shading_lab::cli::Cli;
use shading_lab::frame::{FrameClock, FrameInfo};
use shading_lab::light::LightDirection;
use shading_lab::loaders::load_scene_file;
use shading_lab::manager::SceneManager;
use shading_lab::material::{Algorithm, StaticMaterialBank};
use shading_lab::scenes::builtin_descriptions;

// === Demo choreography ===

/// Picks the direction the demo steps the active light on this frame,
/// cycling through all six axes.
fn step_direction(frame_number: u64) -> LightDirection {
    LightDirection::ALL[frame_number as usize % LightDirection::ALL.len()]
}

/// Next algorithm in the bank list after `current`, when there is one to
/// swap to.
fn next_algorithm(algorithms: &[String], current: &str) -> Option<String> {
    if algorithms.len() < 2 {
        return None;
    }
    let position = algorithms.iter().position(|name| name == current)?;
    Some(algorithms[(position + 1) % algorithms.len()].clone())
}

/// Logs the uniform state one frame's sync pass produced, read back from the
/// first material the active scene binds.
fn log_frame(manager: &SceneManager, frame: &FrameInfo) {
    let scene = manager.active_scene();
    let material = match scene
        .materials_in_use()
        .first()
        .and_then(|&handle| scene.materials().material(handle))
    {
        Some(material) => material,
        None => return,
    };
    let uniforms = material.uniforms();
    log::info!(
        "frame {:>3} ({:.2} ms) | scene {} | {} | camera {:?} | {} light(s), light0 at {:?}",
        frame.number,
        frame.delta * 1000.0,
        scene.handle().index(),
        material.label(),
        uniforms.camera_position,
        uniforms.num_lights,
        &uniforms.light_positions[0][..3],
    );
}

// === Entry point ===

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let descriptions = match &cli.scene {
        Some(path) => load_scene_file(path)?,
        None => builtin_descriptions(),
    };

    let mut bank = StaticMaterialBank::new(cli.algorithms.clone());
    let mut manager = SceneManager::build_with_algorithm(
        &descriptions,
        &mut bank,
        Algorithm::new(&cli.algorithm),
    )
    .context("Failed to build the scene manager")?;

    manager
        .set_active_scene(cli.start_scene)
        .context("Failed to activate the starting scene")?;

    // Swap scene and algorithm halfway through so the hot-swap paths run
    // even in short sessions.
    let swap_frame = cli.frames / 2;
    let swap_algorithm = next_algorithm(&cli.algorithms, &cli.algorithm);

    log::info!(
        "driving {} scene(s) for {} frame(s), starting on scene {} with '{}'",
        manager.scene_count(),
        cli.frames,
        manager.active_scene_index(),
        manager.shading_algorithm()
    );

    for frame in FrameClock::new().take(cli.frames as usize) {
        if frame.number == swap_frame && frame.number != 0 {
            if let Some(name) = &swap_algorithm {
                manager.set_shading_algorithm(name.as_str())?;
            }
            if manager.scene_count() > 1 {
                let next = (manager.active_scene_index() + 1) % manager.scene_count();
                manager.set_active_scene(next)?;
            }
        }

        if !manager.active_scene().lights().is_empty() {
            manager.step_active_light(step_direction(frame.number))?;
        }

        manager.before_frame();
        log_frame(&manager, &frame);
    }

    log::info!("done after {} frame(s)", cli.frames);
    Ok(())
}
