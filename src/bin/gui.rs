use progressive_render::{DisplayConfig, LoggingConfig, init_logging, run_gui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    let config = DisplayConfig::from_env()?;
    let scene_source = match &config.scene_path {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    run_gui(config, scene_source)?;

    Ok(())
}
