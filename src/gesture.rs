//! Gesture transform engine.
//!
//! Two continuous streams act on the plane node: pinch (uniform scale) and pan
//! (screen-space drag mapped onto the node's x/y). Every payload is a delta
//! relative to the previous callback, never cumulative from gesture start;
//! the recognizers below hand out a reading and reset themselves in one step
//! so re-applying a stale reading cannot compound.

use crate::config::GestureConfig;
use crate::scene::PlaneNode;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
}

/// Pinch callback: `scale` is the multiplicative change since the previous
/// callback, 1.0 meaning no change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    pub phase: GesturePhase,
    pub scale: f32,
}

/// Pan callback: `translation` is the screen-space movement since the
/// previous callback, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    pub translation: Vec2,
}

impl PinchEvent {
    pub fn new(phase: GesturePhase, scale: f32) -> Self {
        Self { phase, scale }
    }
}

impl PanEvent {
    pub fn new(phase: GesturePhase, translation: Vec2) -> Self {
        Self { phase, translation }
    }
}

/// Host-side pinch accumulator, the analogue of a platform recognizer's
/// running `scale` property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchRecognizer {
    scale: f32,
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PinchRecognizer {
    pub fn accumulate(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Reads the pending delta as an event and resets to 1.0.
    pub fn take_event(&mut self, phase: GesturePhase) -> PinchEvent {
        let ev = PinchEvent::new(phase, self.scale);
        self.reset();
        ev
    }
}

/// Host-side pan accumulator, the analogue of a platform recognizer's
/// translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanRecognizer {
    translation: Vec2,
}

impl PanRecognizer {
    pub fn accumulate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn reset(&mut self) {
        self.translation = Vec2::ZERO;
    }

    /// Reads the pending delta as an event and resets to zero.
    pub fn take_event(&mut self, phase: GesturePhase) -> PanEvent {
        let ev = PanEvent::new(phase, self.translation);
        self.reset();
        ev
    }
}

/// Per-gesture scratch state, reset to identity on touch-down and discarded
/// when the gesture ends.
///
/// Diagnostics only: the node transform is the source of truth, and the
/// engine never reads these back. Hosts can inspect them through
/// [`GestureEngine::pinch_state`] / [`GestureEngine::pan_state`] while a
/// gesture is live.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTransformState {
    /// Node scale after the most recent applied pinch step.
    pub last_scale: f32,
    /// World-space x/y offset of the most recent applied pan step.
    pub last_translation: Vec2,
}

impl GestureTransformState {
    pub const IDENTITY: Self = Self {
        last_scale: 1.0,
        last_translation: Vec2::ZERO,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    SessionPaused,
    NoNode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The node transform was updated.
    Applied,
    /// The gesture finished; the node keeps its last transform.
    Ended,
    Ignored(IgnoreReason),
    /// Non-finite or otherwise invalid payload, dropped before the node.
    Rejected,
}

#[derive(Clone, Debug)]
pub struct GestureEngine {
    config: GestureConfig,
    pinch: Option<GestureTransformState>,
    pan: Option<GestureTransformState>,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pinch: None,
            pan: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn pinch_state(&self) -> Option<&GestureTransformState> {
        self.pinch.as_ref()
    }

    pub fn pan_state(&self) -> Option<&GestureTransformState> {
        self.pan.as_ref()
    }

    /// `s' = clamp(s * d, min, max)`, applied uniformly on all axes.
    pub fn pinch(
        &mut self,
        event: PinchEvent,
        running: bool,
        node: Option<&mut PlaneNode>,
    ) -> GestureOutcome {
        if event.phase == GesturePhase::Ended {
            self.pinch = None;
            return GestureOutcome::Ended;
        }
        if !running {
            return GestureOutcome::Ignored(IgnoreReason::SessionPaused);
        }
        let Some(node) = node else {
            return GestureOutcome::Ignored(IgnoreReason::NoNode);
        };
        let d = event.scale;
        if !(d.is_finite() && d > 0.0) {
            log::warn!("[gesture] rejected pinch delta {}", d);
            return GestureOutcome::Rejected;
        }

        let state = begin_or_continue(&mut self.pinch, event.phase);
        let scaled = clamp_scale(node.scale() * d, &self.config);
        node.set_scale(scaled);
        state.last_scale = scaled;
        log::debug!("[gesture] pinch x{:.4} -> scale {:.4}", d, scaled);
        GestureOutcome::Applied
    }

    /// Adds `(dx / k, -dy / k, 0)` to the node position, `k` being the
    /// configured screen units per world unit. Depth never changes.
    pub fn pan(
        &mut self,
        event: PanEvent,
        running: bool,
        node: Option<&mut PlaneNode>,
    ) -> GestureOutcome {
        if event.phase == GesturePhase::Ended {
            self.pan = None;
            return GestureOutcome::Ended;
        }
        if !running {
            return GestureOutcome::Ignored(IgnoreReason::SessionPaused);
        }
        let Some(node) = node else {
            return GestureOutcome::Ignored(IgnoreReason::NoNode);
        };
        if !event.translation.is_finite() {
            log::warn!("[gesture] rejected pan delta {:?}", event.translation);
            return GestureOutcome::Rejected;
        }

        let offset = screen_to_world_offset(event.translation, self.config.pan_units_per_world_unit);
        let moved = node.position() + offset;
        if !moved.is_finite() {
            log::warn!("[gesture] pan would leave finite space; dropped");
            return GestureOutcome::Rejected;
        }

        let state = begin_or_continue(&mut self.pan, event.phase);
        node.set_position(moved);
        state.last_translation = offset.truncate();
        log::debug!(
            "[gesture] pan {:?} -> position ({:.3},{:.3},{:.3})",
            event.translation,
            moved.x,
            moved.y,
            moved.z
        );
        GestureOutcome::Applied
    }
}

/// Screen-space delta to node-space offset; screen y grows downwards.
#[inline]
pub fn screen_to_world_offset(delta: Vec2, units_per_world_unit: f32) -> Vec3 {
    Vec3::new(
        delta.x / units_per_world_unit,
        -delta.y / units_per_world_unit,
        0.0,
    )
}

#[inline]
pub fn clamp_scale(scale: f32, config: &GestureConfig) -> f32 {
    scale.clamp(config.min_scale, config.max_scale)
}

/// `Began` always starts from identity; `Changed` without a prior `Began`
/// starts the gesture implicitly.
fn begin_or_continue(
    slot: &mut Option<GestureTransformState>,
    phase: GesturePhase,
) -> &mut GestureTransformState {
    if phase == GesturePhase::Began {
        *slot = Some(GestureTransformState::IDENTITY);
    }
    slot.get_or_insert(GestureTransformState::IDENTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_recognizer_take_resets_to_one() {
        let mut r = PinchRecognizer::default();
        r.accumulate(1.2);
        r.accumulate(1.5);
        let ev = r.take_event(GesturePhase::Changed);
        assert!((ev.scale - 1.8).abs() < 1e-6);
        assert_eq!(r.scale(), 1.0);
    }

    #[test]
    fn pan_recognizer_take_resets_to_zero() {
        let mut r = PanRecognizer::default();
        r.accumulate(Vec2::new(3.0, -1.0));
        r.accumulate(Vec2::new(2.0, 4.0));
        let ev = r.take_event(GesturePhase::Changed);
        assert_eq!(ev.translation, Vec2::new(5.0, 3.0));
        assert_eq!(r.translation(), Vec2::ZERO);
    }

    #[test]
    fn began_resets_transform_state() {
        let mut slot = Some(GestureTransformState {
            last_scale: 2.0,
            last_translation: Vec2::ONE,
        });
        let s = begin_or_continue(&mut slot, GesturePhase::Began);
        assert_eq!(*s, GestureTransformState::IDENTITY);
    }

    #[test]
    fn changed_keeps_transform_state() {
        let prior = GestureTransformState {
            last_scale: 2.0,
            last_translation: Vec2::ONE,
        };
        let mut slot = Some(prior);
        let s = begin_or_continue(&mut slot, GesturePhase::Changed);
        assert_eq!(*s, prior);
    }

    #[test]
    fn screen_y_is_inverted() {
        let o = screen_to_world_offset(Vec2::new(250.0, -100.0), 500.0);
        assert_eq!(o, Vec3::new(0.5, 0.2, 0.0));
    }
}
