use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::surface::RgbCanvas;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a canvas as a binary PPM (P6) image.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, canvas: &RgbCanvas, mut out: W) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", canvas.width(), canvas.height())?;
        writeln!(out, "255")?;
        out.write_all(canvas.bytes())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, canvas: &RgbCanvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(filepath)?;
        self.write_to(canvas, BufWriter::new(file))
    }
}
