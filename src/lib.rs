pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;
pub mod renderers;

pub use controllers::interactive::{
    ControllerError, DispatchOutcome, FrameHost, FrameRequestError, InteractiveController,
    PendingFrame, Renderer, RendererFactoryPort, SessionState, TickError, TickOutcome,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::config::display_config::{ConfigError, DisplayConfig};
pub use crate::core::data::input_event::InputEvent;
pub use crate::core::data::step_sequence::{StepSequence, StepSequenceError};
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use logging::{LoggingConfig, init_logging};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::surface::{RgbCanvas, RgbaSurface};
pub use renderers::discs::{DiscRenderer, DiscRendererFactory, Scene, SceneError};
