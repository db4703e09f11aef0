//! Renderers bundled with the crate.
//!
//! The scheduler treats renderers as external collaborators; `discs` is a small
//! one that makes the binaries runnable without a ray tracer behind them.

pub mod discs;
