use egui::{Context, Pos2, Rect, Response, Vec2, pos2};

/// Pointer events in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the button is held
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
}

/// Maps window coordinates onto the canvas buffer.
///
/// Pointer positions are reported relative to the whole window, so the
/// canvas rectangle's top-left corner (below the toolbar) is subtracted and
/// the result scaled from points to buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    rect: Rect,
    buffer_size: Vec2,
}

impl CanvasMapping {
    pub fn new(rect: Rect, buffer_size: Vec2) -> Self {
        Self { rect, buffer_size }
    }

    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        let local = pos - self.rect.min;
        let size = self.rect.size();
        let sx = if size.x > 0.0 { self.buffer_size.x / size.x } else { 1.0 };
        let sy = if size.y > 0.0 { self.buffer_size.y / size.y } else { 1.0 };
        pos2(local.x * sx, local.y * sy)
    }
}

/// Turns egui's per-frame pointer state into press/move/release events.
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: bool,
    last_pointer_pos: Option<Pos2>,
    mapping: Option<CanvasMapping>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mapping(&mut self, mapping: CanvasMapping) {
        self.mapping = Some(mapping);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn map(&self, pos: Pos2) -> Pos2 {
        match &self.mapping {
            Some(mapping) => mapping.to_canvas(pos),
            None => pos,
        }
    }

    /// Read the pointer for this frame from egui.
    pub fn process_input(&mut self, ctx: &Context, response: &Response, mapping: CanvasMapping) -> Vec<InputEvent> {
        self.set_mapping(mapping);
        let (button_down, pos) = ctx.input(|i| (i.pointer.primary_down(), i.pointer.interact_pos()));
        self.track(response.is_pointer_button_down_on(), button_down, pos)
    }

    /// Advance the press/drag state from one frame's pointer sample.
    ///
    /// `pressed_on_canvas` is true while a press that started on the canvas
    /// is held. A gesture never starts outside the canvas, but once started it
    /// keeps reporting moves anywhere in the window until release.
    pub fn track(&mut self, pressed_on_canvas: bool, button_down: bool, pos: Option<Pos2>) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !self.pressed {
            if let (true, true, Some(pos)) = (pressed_on_canvas, button_down, pos) {
                events.push(InputEvent::PointerDown { position: self.map(pos) });
                self.pressed = true;
                self.last_pointer_pos = Some(pos);
            }
            return events;
        }

        if button_down {
            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { position: self.map(pos) });
                    self.last_pointer_pos = Some(pos);
                }
            }
        } else {
            let last = pos.or(self.last_pointer_pos).unwrap_or(Pos2::ZERO);
            events.push(InputEvent::PointerUp { position: self.map(last) });
            self.pressed = false;
            self.last_pointer_pos = None;
        }

        events
    }
}
