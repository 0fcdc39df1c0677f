use egui::Pos2;

use crate::brush::{BrushMode, BrushState};
use crate::canvas::Canvas;
use crate::stamp::{Stamp, StampShape};

/// The pair of points painted by a single drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegment {
    pub from: Pos2,
    pub to: Pos2,
}

impl StrokeSegment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// Direction of the segment in radians, measured from the +x axis.
    pub fn angle(&self) -> f32 {
        let diff = self.to - self.from;
        diff.y.atan2(diff.x)
    }
}

/// Where the current drag gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

/// Turns a press/drag/release sequence into capsule stamps on the canvas.
///
/// Every drag event paints one stamp from the previous pointer position to
/// the current one, so the stroke stays continuous however far apart the
/// pointer samples are. The brush is read on each event; switching mode or
/// width mid-gesture affects the next stamp only.
#[derive(Debug, Default)]
pub struct StrokeRenderer {
    state: GestureState,
    last_point: Option<Pos2>,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.last_point
    }

    /// Start a gesture at `pos` (canvas space).
    pub fn press(&mut self, pos: Pos2) {
        log::debug!("Stroke pressed at {:?}", pos);
        self.state = GestureState::Pressed;
        self.last_point = Some(pos);
    }

    /// Paint from the last recorded point to `pos`.
    ///
    /// Returns the painted segment, or `None` when no gesture is in progress.
    pub fn drag(
        &mut self,
        pos: Pos2,
        brush: &BrushState,
        canvas: &mut Canvas,
    ) -> Option<StrokeSegment> {
        let from = match self.state {
            GestureState::Idle => return None,
            GestureState::Pressed | GestureState::Dragging => self.last_point?,
        };

        let segment = StrokeSegment::new(from, pos);
        let width = brush.width() as f32;
        match brush.mode() {
            BrushMode::Draw => {
                canvas.fill_stamp(&Stamp::new(&segment, width, StampShape::Oval), brush.color());
            }
            BrushMode::Erase => {
                canvas.clear_stamp(&Stamp::new(&segment, width, StampShape::Rect));
            }
        }

        self.state = GestureState::Dragging;
        self.last_point = Some(pos);
        Some(segment)
    }

    /// End the gesture. Further drags are ignored until the next press.
    pub fn release(&mut self) {
        if self.state != GestureState::Idle {
            log::debug!("Stroke released");
        }
        self.state = GestureState::Idle;
        self.last_point = None;
    }
}
