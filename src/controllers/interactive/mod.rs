//! Interactive controller for progressive rendering.
//!
//! Drives a renderer through a coarse-to-fine sequence of refinement passes,
//! one pass per host frame callback, and restarts the sequence on input.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s mapped by the `InputDispatcher`
//! - **Output**: `DisplaySurface` implementations receiving flat blocks
//! - **Ports**: `Renderer` produces pixels, `FrameHost` delivers frame callbacks
//! - **Core**: `FrameScheduler` owns the single active render session

mod controller;
pub mod frame_scheduler;
pub mod hosts;
pub mod input_dispatcher;
pub mod ports;
#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{ControllerError, InteractiveController};
pub use frame_scheduler::{FrameScheduler, RenderSession, SessionState, TickError, TickOutcome};
pub use hosts::PendingFrame;
pub use input_dispatcher::{DispatchOutcome, InputDispatcher};
pub use ports::frame_host::{FrameHost, FrameRequestError};
pub use ports::renderer::{Renderer, RendererFactoryPort};
