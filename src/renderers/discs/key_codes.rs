//! Numeric key codes understood by [`DiscRenderer`](super::DiscRenderer).
//!
//! Values follow the DOM `keyCode` numbering.

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_I: u32 = 73;
pub const KEY_K: u32 = 75;
pub const KEY_L: u32 = 76;
pub const KEY_M: u32 = 77;
pub const KEY_O: u32 = 79;
pub const KEY_P: u32 = 80;
