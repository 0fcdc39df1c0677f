use egui::Color32;

/// Smallest brush width the size slider allows.
pub const MIN_WIDTH: u32 = 1;
/// Largest brush width the size slider allows.
pub const MAX_WIDTH: u32 = 50;
/// Brush width selected at startup.
pub const DEFAULT_WIDTH: u32 = 18;
/// Initial color of the color picker.
pub const CORNFLOWER_BLUE: Color32 = Color32::from_rgb(100, 149, 237);

/// Whether pointer drags paint or erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    #[default]
    Draw,
    Erase,
}

impl BrushMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Erase => "Erase",
        }
    }
}

/// Brush settings shared by the toolbar and the stroke renderer.
///
/// The width always stays within `MIN_WIDTH..=MAX_WIDTH`, and exactly one
/// [`BrushMode`] is active at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color32,
    width: u32,
    mode: BrushMode,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: CORNFLOWER_BLUE,
            width: DEFAULT_WIDTH,
            mode: BrushMode::Draw,
        }
    }
}

impl BrushState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Snap a raw slider value to an integer width inside the allowed range.
    ///
    /// Returns the width actually stored. A NaN value leaves the width unchanged.
    pub fn set_width(&mut self, value: f32) -> u32 {
        if !value.is_nan() {
            let snapped = value.round().clamp(MIN_WIDTH as f32, MAX_WIDTH as f32);
            self.width = snapped as u32;
        }
        self.width
    }

    /// Text shown next to the size slider.
    pub fn width_label(&self) -> String {
        format!("{}", self.width)
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == BrushMode::Draw
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == BrushMode::Erase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let brush = BrushState::new();
        assert_eq!(brush.color(), CORNFLOWER_BLUE);
        assert_eq!(brush.width(), 18);
        assert_eq!(brush.mode(), BrushMode::Draw);
        assert_eq!(brush.width_label(), "18");
    }

    #[test]
    fn test_width_is_rounded_and_clamped() {
        let mut brush = BrushState::new();
        assert_eq!(brush.set_width(7.4), 7);
        assert_eq!(brush.set_width(7.6), 8);
        assert_eq!(brush.set_width(0.0), MIN_WIDTH);
        assert_eq!(brush.set_width(-12.0), MIN_WIDTH);
        assert_eq!(brush.set_width(120.0), MAX_WIDTH);
        assert_eq!(brush.set_width(f32::NAN), MAX_WIDTH);
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut brush = BrushState::new();
        assert!(brush.is_drawing() && !brush.is_erasing());
        brush.set_mode(BrushMode::Erase);
        assert!(brush.is_erasing() && !brush.is_drawing());
        brush.set_mode(BrushMode::Draw);
        assert!(brush.is_drawing() && !brush.is_erasing());
    }
}
