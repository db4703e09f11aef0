use log::info;
use progressive_render::{
    DiscRendererFactory, DisplayConfig, FilePresenterPort, InteractiveController, LoggingConfig,
    PendingFrame, PpmFilePresenter, Renderer, RgbCanvas, init_logging,
};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "output/progressive.ppm";

/// Renders one full session headlessly.
///
/// Usage: `progressive_render [scene.json] [output.ppm]`. The scene argument
/// overrides `PROGRESSIVE_SCENE`.
fn run(args: &[String]) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut config = DisplayConfig::from_env()?;

    if let Some(scene) = args.first() {
        config.scene_path = Some(PathBuf::from(scene));
    }

    let output = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let scene_source = match &config.scene_path {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let mut controller = InteractiveController::new(
        &DiscRendererFactory,
        scene_source.as_deref(),
        &config,
        PendingFrame::new(),
    )?;
    let mut canvas = RgbCanvas::new(
        controller.renderer().width(),
        controller.renderer().height(),
        controller.pixel_size(),
    );

    controller.start()?;
    let ticks = controller.run_to_completion(&mut canvas)?;
    info!("{} passes painted", ticks);

    PpmFilePresenter::new().present(&canvas, &output)?;
    info!("wrote {}", output.display());

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)?;

    Ok(())
}
