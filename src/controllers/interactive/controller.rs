use crate::controllers::interactive::frame_scheduler::{
    FrameScheduler, SessionState, TickError, TickOutcome,
};
use crate::controllers::interactive::hosts::PendingFrame;
use crate::controllers::interactive::input_dispatcher::{DispatchOutcome, InputDispatcher};
use crate::controllers::interactive::ports::frame_host::{FrameHost, FrameRequestError};
use crate::controllers::interactive::ports::renderer::{Renderer, RendererFactoryPort};
use crate::core::actions::cancellation::SessionToken;
use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::config::display_config::DisplayConfig;
use crate::core::data::input_event::InputEvent;
use crate::core::data::surface_geometry::SurfaceGeometry;
use log::{info, warn};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ControllerError {
    Scene(Box<dyn Error + Send + Sync>),
    FrameRequest(FrameRequestError),
    /// The renderer's frame magnified by the pixel size does not fit in `u32`.
    CanvasTooLarge {
        width: u32,
        height: u32,
        pixel_size: u32,
    },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene(err) => write!(f, "scene could not be loaded: {}", err),
            Self::FrameRequest(err) => write!(f, "render session could not start: {}", err),
            Self::CanvasTooLarge {
                width,
                height,
                pixel_size,
            } => write!(
                f,
                "a {}x{} frame at pixel size {} is too large to display",
                width, height, pixel_size
            ),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scene(err) => Some(err.as_ref()),
            Self::FrameRequest(err) => Some(err),
            Self::CanvasTooLarge { .. } => None,
        }
    }
}

impl From<FrameRequestError> for ControllerError {
    fn from(err: FrameRequestError) -> Self {
        Self::FrameRequest(err)
    }
}

/// Wires one renderer, the scheduler, the input dispatcher and a frame host.
pub struct InteractiveController<R: Renderer, H: FrameHost> {
    renderer: R,
    scheduler: FrameScheduler,
    dispatcher: InputDispatcher,
    host: H,
    pixel_size: u32,
    canvas_size: (u32, u32),
}

impl<R: Renderer, H: FrameHost> InteractiveController<R, H> {
    /// Builds the renderer from `scene_source`. No session is started yet.
    pub fn new<F>(
        factory: &F,
        scene_source: Option<&str>,
        config: &DisplayConfig,
        host: H,
    ) -> Result<Self, ControllerError>
    where
        F: RendererFactoryPort<Renderer = R>,
    {
        let renderer = factory
            .create(scene_source, &config.steps)
            .map_err(|err| ControllerError::Scene(Box::new(err)))?;
        let pixel_size = config.pixel_size.max(1);
        let canvas_size = Self::canvas_size_for(&renderer, pixel_size)?;

        info!(
            "renderer ready: {}x{}, passes {}",
            renderer.width(),
            renderer.height(),
            config.steps
        );

        Ok(Self {
            renderer,
            scheduler: FrameScheduler::new(config.steps.clone()),
            dispatcher: InputDispatcher::new(SurfaceGeometry::identity(
                canvas_size.0,
                canvas_size.1,
                pixel_size,
            )),
            host,
            pixel_size,
            canvas_size,
        })
    }

    fn canvas_size_for(renderer: &R, pixel_size: u32) -> Result<(u32, u32), ControllerError> {
        let width = renderer.width().checked_mul(pixel_size);
        let height = renderer.height().checked_mul(pixel_size);

        width
            .zip(height)
            .ok_or(ControllerError::CanvasTooLarge {
                width: renderer.width(),
                height: renderer.height(),
                pixel_size,
            })
    }

    pub fn start(&mut self) -> Result<SessionToken, FrameRequestError> {
        self.scheduler.start_session(&mut self.host)
    }

    /// Replaces the renderer with one built from `scene_source` and restarts.
    ///
    /// The new renderer follows the scheduler's step sequence. On failure nothing
    /// changes: the old renderer, session and displayed frame stay as they were.
    pub fn load_scene<F>(
        &mut self,
        factory: &F,
        scene_source: Option<&str>,
    ) -> Result<SessionToken, ControllerError>
    where
        F: RendererFactoryPort<Renderer = R>,
    {
        let renderer = match factory.create(scene_source, self.scheduler.steps()) {
            Ok(renderer) => renderer,
            Err(err) => {
                warn!("keeping current scene: {}", err);
                return Err(ControllerError::Scene(Box::new(err)));
            }
        };
        let canvas_size = Self::canvas_size_for(&renderer, self.pixel_size)?;

        self.scheduler.cancel(&mut self.host);
        self.renderer = renderer;

        if canvas_size != self.canvas_size {
            self.canvas_size = canvas_size;
            self.dispatcher.set_geometry(SurfaceGeometry::identity(
                canvas_size.0,
                canvas_size.1,
                self.pixel_size,
            ));
        }

        Ok(self.scheduler.start_session(&mut self.host)?)
    }

    pub fn handle_input(
        &mut self,
        event: InputEvent,
    ) -> Result<DispatchOutcome, FrameRequestError> {
        self.dispatcher
            .dispatch(event, &mut self.scheduler, &mut self.renderer, &mut self.host)
    }

    /// Delivers a host frame callback carrying `token`.
    pub fn on_frame<S>(
        &mut self,
        token: SessionToken,
        surface: &mut S,
    ) -> Result<TickOutcome, TickError>
    where
        S: DisplaySurface + ?Sized,
    {
        self.scheduler
            .tick(token, &mut self.renderer, surface, &mut self.host)
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.dispatcher.set_geometry(geometry);
    }

    #[must_use]
    pub fn geometry(&self) -> &SurfaceGeometry {
        self.dispatcher.geometry()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.scheduler.state()
    }

    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Device size of the displayed frame: renderer size times pixel size.
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }
}

impl<R: Renderer> InteractiveController<R, PendingFrame> {
    /// Delivers pending callbacks until none are left. Returns the ticks run.
    pub fn run_to_completion<S>(&mut self, surface: &mut S) -> Result<usize, TickError>
    where
        S: DisplaySurface + ?Sized,
    {
        let mut ticks = 0;

        while let Some(token) = self.host.take() {
            self.on_frame(token, surface)?;
            ticks += 1;
        }

        Ok(ticks)
    }
}
