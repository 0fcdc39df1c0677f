use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;

/// Keeps the GPU copy of the canvas in sync with its pixel buffer.
///
/// The canvas is uploaded again only when its version differs from the one
/// last uploaded, so idle frames cost nothing.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    upload_count: usize,
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("has_handle", &self.handle.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .field("upload_count", &self.upload_count)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a texture showing the current canvas, uploading it if stale.
    pub fn texture_id(&mut self, ctx: &Context, canvas: &Canvas) -> TextureId {
        let version = canvas.version();
        if let Some(handle) = &self.handle {
            if self.uploaded_version == Some(version) {
                return handle.id();
            }
        }

        let image = canvas.to_color_image();
        let id = match self.handle.as_mut() {
            Some(handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("drawing_board_canvas", image, TextureOptions::NEAREST);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        };
        self.uploaded_version = Some(version);
        self.upload_count += 1;
        log::trace!("Uploaded canvas texture v{}", version);
        id
    }

    /// Number of uploads performed so far.
    pub fn upload_count(&self) -> usize {
        self.upload_count
    }
}
