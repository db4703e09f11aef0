//! Main GUI application loop.

use crate::controllers::interactive::{
    ControllerError, FrameRequestError, InteractiveController, Renderer, TickOutcome,
};
use crate::core::config::display_config::DisplayConfig;
use crate::core::data::input_event::InputEvent;
use crate::input::gui::frame_host::WinitFrameHost;
use crate::input::gui::key_map::key_press_code;
use crate::presenters::surface::RgbaSurface;
use crate::renderers::discs::{DiscRenderer, DiscRendererFactory};
use log::{debug, error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    error::{EventLoopError, OsError},
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Controller(ControllerError),
    FrameRequest(FrameRequestError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "window could not be created: {}", err),
            Self::Pixels(err) => write!(f, "pixels surface failed: {}", err),
            Self::Controller(err) => write!(f, "{}", err),
            Self::FrameRequest(err) => write!(f, "first frame could not be requested: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Controller(err) => Some(err),
            Self::FrameRequest(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<ControllerError> for GuiError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}

impl From<FrameRequestError> for GuiError {
    fn from(err: FrameRequestError) -> Self {
        Self::FrameRequest(err)
    }
}

/// Application state: the framebuffer and the controller driving it.
struct App {
    pixels: Pixels<'static>,
    controller: InteractiveController<DiscRenderer, WinitFrameHost>,
    factory: DiscRendererFactory,
    config: DisplayConfig,
    buffer_width: u32,
    buffer_height: u32,
    cursor: PhysicalPosition<f64>,
}

impl App {
    /// Delivers the pending frame callback, if any, then presents the framebuffer.
    fn redraw(&mut self) -> Result<(), pixels::Error> {
        if let Some(token) = self.controller.host_mut().take() {
            match RgbaSurface::new(
                self.pixels.frame_mut(),
                self.buffer_width,
                self.buffer_height,
                self.controller.pixel_size(),
            ) {
                Ok(mut surface) => match self.controller.on_frame(token, &mut surface) {
                    Ok(TickOutcome::Completed { .. }) => info!("render complete"),
                    Ok(_) => {}
                    Err(err) => error!("frame dropped: {}", err),
                },
                Err(err) => error!("framebuffer unusable: {}", err),
            }
        }

        self.pixels.render()
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
            error!("surface resize failed: {}", err);
        }
    }

    /// Clicks are mapped into framebuffer pixels by `pixels`, which accounts for
    /// the letterboxing it applies when the window and buffer aspect ratios differ.
    fn click(&mut self) {
        let position = (self.cursor.x as f32, self.cursor.y as f32);
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        let event = InputEvent::Click {
            client_x: x as f64,
            client_y: y as f64,
        };

        if let Err(err) = self.controller.handle_input(event) {
            warn!("click ignored: {}", err);
        }
    }

    fn key_press(&mut self, key_code: KeyCode) {
        if key_code == KeyCode::F5 {
            self.reload_scene();
            return;
        }

        let code = key_press_code(key_code);

        if let Err(err) = self.controller.handle_input(InputEvent::KeyPress { code }) {
            warn!("key {} did not restart rendering: {}", code, err);
        }
    }

    fn reload_scene(&mut self) {
        let Some(path) = self.config.scene_path.as_ref() else {
            debug!("no scene file configured");
            return;
        };

        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                warn!("cannot read {}: {}", path.display(), err);
                return;
            }
        };

        let width = self.controller.renderer().width();
        let height = self.controller.renderer().height();

        match self.controller.load_scene(&self.factory, Some(&source)) {
            Ok(_) => {
                let renderer = self.controller.renderer();
                if renderer.width() != width || renderer.height() != height {
                    warn!(
                        "scene size changed to {}x{}; restart to resize the window",
                        renderer.width(),
                        renderer.height()
                    );
                }
                info!("reloaded {}", path.display());
            }
            Err(err) => warn!("{}", err),
        }
    }
}

/// Opens a window showing `scene_source` (or the sample scene) and runs until closed.
pub fn run_gui(config: DisplayConfig, scene_source: Option<String>) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;
    let factory = DiscRendererFactory;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Progressive Render")
            .with_min_inner_size(PhysicalSize::new(64, 64))
            .build(&event_loop)?,
    ));

    let controller = InteractiveController::new(
        &factory,
        scene_source.as_deref(),
        &config,
        WinitFrameHost::new(window),
    )?;

    // The framebuffer shows the renderer's frame magnified by the pixel size.
    let (buffer_width, buffer_height) = controller.canvas_size();
    let _ = window.request_inner_size(PhysicalSize::new(buffer_width, buffer_height));

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

    let mut app = App {
        pixels,
        controller,
        factory,
        config,
        buffer_width,
        buffer_height,
        cursor: PhysicalPosition::new(0.0, 0.0),
    };

    app.controller.start()?;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.redraw() {
                    error!("render error: {}", err);
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                app.resize(size);
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => app.cursor = position,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => app.click(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => app.key_press(key_code),
            _ => {}
        }
    })?;

    Ok(())
}
