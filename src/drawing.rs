//! Boundary types for the drawing handed over by the canvas editor.
//!
//! A [`DrawingSnapshot`] is captured once when the AR view is constructed and is
//! never mutated afterwards. The editor itself lives outside this crate; all we
//! need from it is the stroke data and the rectangle the strokes should be
//! cropped to.

use glam::Vec2;
use smallvec::SmallVec;

/// Axis-aligned rectangle in drawing units, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// True when the rectangle cannot be rasterised: zero, negative or
    /// non-finite extent, or a non-finite origin.
    pub fn is_degenerate(&self) -> bool {
        !(self.origin.is_finite()
            && self.size.is_finite()
            && self.size.x > 0.0
            && self.size.y > 0.0)
    }

    /// Width over height. May be zero, infinite or NaN for degenerate
    /// rectangles; callers sanitise it.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.size.x / self.size.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePoint {
    pub position: Vec2,
    pub width: f32,
}

impl StrokePoint {
    pub const fn new(position: Vec2, width: f32) -> Self {
        Self { position, width }
    }
}

/// A single pen stroke. Most strokes are short, so points stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub points: SmallVec<[StrokePoint; 16]>,
    pub color: [u8; 4],
}

impl Stroke {
    pub fn new(color: [u8; 4]) -> Self {
        Self {
            points: SmallVec::new(),
            color,
        }
    }

    pub fn with_points(color: [u8; 4], points: impl IntoIterator<Item = StrokePoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
            color,
        }
    }

    pub fn push(&mut self, position: Vec2, width: f32) {
        self.points.push(StrokePoint::new(position, width));
    }
}

/// Immutable captured drawing: strokes plus the rectangle they are cropped to.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingSnapshot {
    strokes: Vec<Stroke>,
    bounds: Rect,
}

impl DrawingSnapshot {
    pub fn new(strokes: Vec<Stroke>, bounds: Rect) -> Self {
        Self { strokes, bounds }
    }

    /// Snapshot whose bounds tightly enclose every stroke, inflated by half the
    /// widest pen so round caps are not clipped. An empty drawing gets a
    /// zero-area rectangle.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut pad = 0.0f32;
        for p in strokes.iter().flat_map(|s| s.points.iter()) {
            if !p.position.is_finite() {
                continue;
            }
            min = min.min(p.position);
            max = max.max(p.position);
            if p.width.is_finite() {
                pad = pad.max(p.width * 0.5);
            }
        }
        let bounds = if min.x <= max.x && min.y <= max.y {
            let origin = min - Vec2::splat(pad);
            Rect::new(origin, (max + Vec2::splat(pad)) - origin)
        } else {
            Rect::from_size(0.0, 0.0)
        };
        Self { strokes, bounds }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.bounds.aspect_ratio()
    }
}

/// Supplier of the drawing to project. Queried exactly once, synchronously,
/// when an AR view is built; there is no live subscription to edits.
pub trait DrawingSource {
    fn snapshot(&self) -> DrawingSnapshot;
}

impl DrawingSource for DrawingSnapshot {
    fn snapshot(&self) -> DrawingSnapshot {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strokes_pads_by_half_the_widest_pen() {
        let stroke = Stroke::with_points(
            [0, 0, 0, 255],
            [
                StrokePoint::new(Vec2::new(10.0, 20.0), 4.0),
                StrokePoint::new(Vec2::new(110.0, 70.0), 2.0),
            ],
        );
        let snap = DrawingSnapshot::from_strokes(vec![stroke]);
        let b = snap.bounds();
        assert_eq!(b.origin, Vec2::new(8.0, 18.0));
        assert_eq!(b.size, Vec2::new(104.0, 54.0));
    }

    #[test]
    fn empty_drawing_has_degenerate_bounds() {
        let snap = DrawingSnapshot::from_strokes(Vec::new());
        assert!(snap.bounds().is_degenerate());
        assert_eq!(snap.bounds().area(), 0.0);
    }

    #[test]
    fn degenerate_rects() {
        assert!(Rect::from_size(0.0, 10.0).is_degenerate());
        assert!(Rect::from_size(10.0, -1.0).is_degenerate());
        assert!(Rect::from_size(f32::NAN, 10.0).is_degenerate());
        assert!(!Rect::from_size(10.0, 5.0).is_degenerate());
    }
}
