//! Port definitions for the interactive controller.
//!
//! Traits for the external collaborators the scheduler talks to: the renderer
//! that produces pixels and the host that delivers frame callbacks.

pub mod frame_host;
pub mod renderer;
