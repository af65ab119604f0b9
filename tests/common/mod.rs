// Shared fixtures for the host-side integration tests.

#![allow(dead_code)]

use glam::Vec2;
use paint_ar::{DrawingSnapshot, Rect, Stroke, StrokePoint, TrackingError, TrackingService};

/// Tracking service that counts calls and can be told to refuse starting.
#[derive(Default, Debug)]
pub struct RecordingTracker {
    pub starts: u32,
    pub pauses: u32,
    pub fail_with: Option<TrackingError>,
}

impl RecordingTracker {
    pub fn failing(err: TrackingError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }
}

impl TrackingService for RecordingTracker {
    fn start(&mut self) -> Result<(), TrackingError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.starts += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

pub const INK: [u8; 4] = [20, 40, 200, 255];

/// `width x height` snapshot with a single horizontal stroke through the middle.
pub fn snapshot(width: f32, height: f32) -> DrawingSnapshot {
    let y = height * 0.5;
    let stroke = Stroke::with_points(
        INK,
        [
            StrokePoint::new(Vec2::new(width * 0.1, y), 4.0),
            StrokePoint::new(Vec2::new(width * 0.9, y), 4.0),
        ],
    );
    DrawingSnapshot::new(vec![stroke], Rect::from_size(width, height))
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5 * a.abs().max(b.abs()).max(1.0)
}
