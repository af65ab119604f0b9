use glam::Vec2;
use paint_ar::{GesturePhase, PanEvent, PanRecognizer, PinchEvent, PinchRecognizer};

// One wheel line zooms by this factor.
const WHEEL_ZOOM_PER_LINE: f32 = 1.1;
// Pixel-precise wheels report roughly this many pixels per line.
const WHEEL_PIXELS_PER_LINE: f32 = 40.0;

/// Turns desktop pointer input into the pinch and pan streams a touch
/// screen would produce. Left-drag pans; the wheel and touchpad magnify pinch.
#[derive(Default, Debug)]
pub struct InputMapper {
    pan: PanRecognizer,
    pinch: PinchRecognizer,
    cursor: Option<Vec2>,
    dragging: bool,
    pan_began: bool,
}

impl InputMapper {
    pub fn cursor_moved(&mut self, position: Vec2) -> Option<PanEvent> {
        let previous = self.cursor.replace(position);
        if !self.dragging {
            return None;
        }
        let delta = position - previous?;
        if delta == Vec2::ZERO {
            return None;
        }
        self.pan.accumulate(delta);
        let phase = if self.pan_began {
            GesturePhase::Changed
        } else {
            self.pan_began = true;
            GesturePhase::Began
        };
        Some(self.pan.take_event(phase))
    }

    pub fn left_button(&mut self, pressed: bool) -> Option<PanEvent> {
        if pressed {
            self.dragging = true;
            self.pan_began = false;
            self.pan.reset();
            return None;
        }
        self.dragging = false;
        if std::mem::take(&mut self.pan_began) {
            Some(self.pan.take_event(GesturePhase::Ended))
        } else {
            None
        }
    }

    /// A wheel notch is a complete pinch: one delta, then the end.
    pub fn wheel_lines(&mut self, lines: f32) -> [PinchEvent; 2] {
        self.pinch.reset();
        self.pinch.accumulate(WHEEL_ZOOM_PER_LINE.powf(lines));
        [
            self.pinch.take_event(GesturePhase::Began),
            self.pinch.take_event(GesturePhase::Ended),
        ]
    }

    pub fn wheel_pixels(&mut self, pixels: f32) -> [PinchEvent; 2] {
        self.wheel_lines(pixels / WHEEL_PIXELS_PER_LINE)
    }

    /// Touchpad magnify reports additive deltas around zero.
    pub fn magnify(&mut self, phase: GesturePhase, delta: f32) -> PinchEvent {
        if phase == GesturePhase::Began {
            self.pinch.reset();
        }
        self.pinch.accumulate(1.0 + delta);
        self.pinch.take_event(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_without_button_does_not_pan() {
        let mut m = InputMapper::default();
        assert!(m.cursor_moved(Vec2::new(10.0, 10.0)).is_none());
        assert!(m.cursor_moved(Vec2::new(20.0, 10.0)).is_none());
    }

    #[test]
    fn drag_emits_began_changed_ended_with_incremental_deltas() {
        let mut m = InputMapper::default();
        m.cursor_moved(Vec2::new(0.0, 0.0));
        assert!(m.left_button(true).is_none());

        let first = m.cursor_moved(Vec2::new(5.0, 2.0)).unwrap();
        assert_eq!(first.phase, GesturePhase::Began);
        assert_eq!(first.translation, Vec2::new(5.0, 2.0));

        let second = m.cursor_moved(Vec2::new(8.0, 2.0)).unwrap();
        assert_eq!(second.phase, GesturePhase::Changed);
        assert_eq!(second.translation, Vec2::new(3.0, 0.0));

        let end = m.left_button(false).unwrap();
        assert_eq!(end.phase, GesturePhase::Ended);
        assert_eq!(end.translation, Vec2::ZERO);
    }

    #[test]
    fn click_without_motion_emits_nothing() {
        let mut m = InputMapper::default();
        m.cursor_moved(Vec2::new(1.0, 1.0));
        m.left_button(true);
        assert!(m.left_button(false).is_none());
    }

    #[test]
    fn wheel_notch_is_a_single_pinch_delta() {
        let mut m = InputMapper::default();
        let [began, ended] = m.wheel_lines(1.0);
        assert_eq!(began.phase, GesturePhase::Began);
        assert!((began.scale - 1.1).abs() < 1e-6);
        assert_eq!(ended.phase, GesturePhase::Ended);
        assert_eq!(ended.scale, 1.0);
    }

    #[test]
    fn magnify_deltas_are_relative() {
        let mut m = InputMapper::default();
        let a = m.magnify(GesturePhase::Began, 0.1);
        let b = m.magnify(GesturePhase::Changed, -0.05);
        assert!((a.scale - 1.1).abs() < 1e-6);
        assert!((b.scale - 0.95).abs() < 1e-6);
    }
}
