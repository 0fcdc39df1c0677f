use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::canvas::Canvas;
use crate::error::ExportError;

/// Encode the canvas at its native size as a PNG held in memory.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        canvas.image().as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode the canvas and write it to `path`, replacing any existing file.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Saved {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
