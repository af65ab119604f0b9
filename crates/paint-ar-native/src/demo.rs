use glam::Vec2;
use paint_ar::{DrawingSnapshot, Rect, Stroke};
use std::f32::consts::TAU;

const CANVAS_SIZE: Vec2 = Vec2::new(480.0, 240.0);

/// Landscape sketch standing in for the canvas editor: a sun, a house and
/// a wavy horizon.
pub fn demo_drawing() -> DrawingSnapshot {
    let mut strokes = Vec::new();

    let mut sun = Stroke::new([240, 170, 30, 255]);
    let center = Vec2::new(390.0, 60.0);
    for i in 0..=48 {
        let a = i as f32 / 48.0 * TAU;
        sun.push(center + Vec2::new(a.cos(), a.sin()) * 32.0, 6.0);
    }
    strokes.push(sun);

    let mut horizon = Stroke::new([40, 120, 60, 255]);
    for i in 0..=60 {
        let x = i as f32 / 60.0 * CANVAS_SIZE.x;
        horizon.push(Vec2::new(x, 200.0 + (x / 40.0).sin() * 8.0), 5.0);
    }
    strokes.push(horizon);

    let mut house = Stroke::new([30, 30, 40, 255]);
    for p in [
        (80.0, 190.0),
        (80.0, 120.0),
        (130.0, 80.0),
        (180.0, 120.0),
        (180.0, 190.0),
        (80.0, 190.0),
    ] {
        house.push(Vec2::new(p.0, p.1), 4.0);
    }
    strokes.push(house);

    DrawingSnapshot::new(strokes, Rect::new(Vec2::ZERO, CANVAS_SIZE))
}
