use egui::{Color32, ColorImage, Vec2, pos2, vec2};
use image::{Pixel, Rgba, RgbaImage};

use crate::stamp::Stamp;

/// Width of the drawing surface in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Height of the drawing surface in pixels (window height minus the toolbar).
pub const CANVAS_HEIGHT: u32 = 740;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The raster buffer behind the visible canvas.
///
/// Pixels are stored as unmultiplied RGBA. Every mutation bumps
/// [`Canvas::version`] so views can tell when to re-upload.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    version: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, TRANSPARENT),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size in pixels, as egui expects it for layout.
    pub fn size_vec2(&self) -> Vec2 {
        vec2(self.width() as f32, self.height() as f32)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Wipe every pixel to transparent.
    pub fn clear(&mut self) {
        self.fill_raw(TRANSPARENT);
    }

    /// Paint every pixel with `color`, replacing what was there.
    pub fn fill(&mut self, color: Color32) {
        self.fill_raw(to_rgba(color));
    }

    fn fill_raw(&mut self, pixel: Rgba<u8>) {
        for p in self.pixels.pixels_mut() {
            *p = pixel;
        }
        self.touch();
    }

    /// Composite `color` source-over onto every pixel covered by `stamp`.
    pub fn fill_stamp(&mut self, stamp: &Stamp, color: Color32) {
        let src = to_rgba(color);
        self.for_each_covered(stamp, |p| p.blend(&src));
    }

    /// Reset every pixel covered by `stamp` to transparent.
    pub fn clear_stamp(&mut self, stamp: &Stamp) {
        self.for_each_covered(stamp, |p| *p = TRANSPARENT);
    }

    /// Visit the pixels whose centers lie inside `stamp`, clipped to the buffer.
    fn for_each_covered(&mut self, stamp: &Stamp, mut f: impl FnMut(&mut Rgba<u8>)) {
        let bounds = stamp.bounds();
        let x0 = bounds.min.x.floor().max(0.0) as u32;
        let y0 = bounds.min.y.floor().max(0.0) as u32;
        let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                if stamp.contains(pos2(x as f32 + 0.5, y as f32 + 0.5)) {
                    f(self.pixels.get_pixel_mut(x, y));
                }
            }
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Copy the buffer into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

pub fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}
