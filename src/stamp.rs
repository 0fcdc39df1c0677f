use egui::{Pos2, Rect, Vec2, vec2};

use crate::stroke::StrokeSegment;

/// Pixels whose centers lie this close to the segment are always covered,
/// so strokes stay connected however thin the brush or long the segment.
const MIN_COVERAGE_RADIUS: f32 = 0.75;

/// Shape painted for one stroke segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampShape {
    /// Oval inscribed in the stamp rectangle, used for drawing.
    Oval,
    /// The full stamp rectangle, used for erasing.
    Rect,
}

/// A capsule stamp covering one stroke segment.
///
/// In the stamp's local frame the origin sits on the segment start and the
/// x axis points along the segment. The stamp rectangle spans
/// `-w/2..=length + w/2` along x and `-w/2..=w/2` along y, so both segment
/// end points are covered for any segment length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    origin: Pos2,
    angle: f32,
    length: f32,
    width: f32,
    shape: StampShape,
}

impl Stamp {
    pub fn new(segment: &StrokeSegment, width: f32, shape: StampShape) -> Self {
        Self {
            origin: segment.from,
            angle: segment.angle(),
            length: segment.length(),
            width,
            shape,
        }
    }

    fn to_local(&self, p: Pos2) -> Vec2 {
        let d = p - self.origin;
        let (sin, cos) = self.angle.sin_cos();
        vec2(d.x * cos + d.y * sin, d.y * cos - d.x * sin)
    }

    fn to_world(&self, local: Vec2) -> Pos2 {
        let (sin, cos) = self.angle.sin_cos();
        self.origin + vec2(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }

    /// Distance from a local-frame point to the segment itself.
    fn distance_to_segment(&self, local: Vec2) -> f32 {
        let along = local.x.clamp(0.0, self.length);
        vec2(local.x - along, local.y).length()
    }

    /// Whether `p` (canvas space) lies inside the stamp.
    pub fn contains(&self, p: Pos2) -> bool {
        let local = self.to_local(p);
        if self.distance_to_segment(local) <= MIN_COVERAGE_RADIUS {
            return true;
        }
        let half = self.width / 2.0;
        match self.shape {
            StampShape::Rect => {
                local.x >= -half && local.x <= self.length + half && local.y.abs() <= half
            }
            StampShape::Oval => {
                let semi_major = (self.length + self.width) / 2.0;
                let nx = (local.x - self.length / 2.0) / semi_major;
                let ny = local.y / half;
                nx * nx + ny * ny <= 1.0
            }
        }
    }

    /// Axis-aligned bounds of the rotated stamp rectangle.
    pub fn bounds(&self) -> Rect {
        let half = (self.width / 2.0).max(MIN_COVERAGE_RADIUS);
        let corners = [
            vec2(-half, -half),
            vec2(self.length + half, -half),
            vec2(self.length + half, half),
            vec2(-half, half),
        ]
        .map(|corner| self.to_world(corner));
        Rect::from_points(&corners)
    }
}
