//! Input adapters that turn platform events into controller calls.

#[cfg(feature = "gui")]
pub mod gui;
