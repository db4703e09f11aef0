//! Windowed front end: winit for the window and events, pixels for the framebuffer.

mod app;
mod frame_host;
mod key_map;

pub use app::{GuiError, run_gui};
pub use frame_host::WinitFrameHost;
pub use key_map::{UNMAPPED_KEY_CODE, key_code_to_numeric, key_press_code};
