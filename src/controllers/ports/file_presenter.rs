use crate::presenters::surface::RgbCanvas;
use std::path::Path;

pub trait FilePresenterPort {
    fn present(&self, canvas: &RgbCanvas, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
