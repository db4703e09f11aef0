pub mod factory;
pub mod key_codes;
pub mod renderer;
pub mod scene;

pub use factory::DiscRendererFactory;
pub use renderer::DiscRenderer;
pub use scene::{Disc, Scene, SceneError};
