//! AR view: owns the scene, the tracking session and the gesture engine.
//!
//! Everything here runs on the one context that also drives rendering, so the
//! node has a single owner and gesture handlers take `&mut self` instead of
//! locking.

use crate::config::ArConfig;
use crate::drawing::DrawingSource;
use crate::error::ConfigError;
use crate::geometry::PlaneBuilder;
use crate::gesture::{GestureEngine, GestureOutcome, PanEvent, PinchEvent};
use crate::scene::{PlaneNode, Scene};
use crate::session::{TrackingPhase, TrackingService, TrackingSession, TrackingStatus};

pub struct ArView<S: TrackingService> {
    config: ArConfig,
    scene: Scene,
    session: TrackingSession<S>,
    gestures: GestureEngine,
}

impl<S: TrackingService> ArView<S> {
    /// Requests the drawing once, bakes it and inserts the plane node at the
    /// default pose. The session starts paused.
    pub fn new(source: &impl DrawingSource, service: S, config: ArConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let snapshot = source.snapshot();
        let node = PlaneBuilder::new(config).build(&snapshot);
        let scene = Scene::with_node(node);
        Ok(Self {
            config,
            scene,
            session: TrackingSession::new(service),
            gestures: GestureEngine::new(config.gesture),
        })
    }

    pub fn config(&self) -> &ArConfig {
        &self.config
    }

    /// View became visible: start tracking.
    pub fn appear(&mut self) {
        self.session.start();
    }

    /// View hidden: pause tracking, keep the scene as it is.
    pub fn disappear(&mut self) {
        self.session.pause();
    }

    pub fn on_tracked_frame(&mut self) {
        self.session.on_tracked_frame();
    }

    pub fn phase(&self) -> TrackingPhase {
        self.session.phase()
    }

    pub fn status(&self) -> TrackingStatus {
        self.session.status()
    }

    pub fn pinch(&mut self, event: PinchEvent) -> GestureOutcome {
        let running = self.session.is_running();
        self.gestures.pinch(event, running, self.scene.node_mut())
    }

    pub fn pan(&mut self, event: PanEvent) -> GestureOutcome {
        let running = self.session.is_running();
        self.gestures.pan(event, running, self.scene.node_mut())
    }

    pub fn node(&self) -> Option<&PlaneNode> {
        self.scene.node()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn session(&self) -> &TrackingSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TrackingSession<S> {
        &mut self.session
    }

    pub fn gestures(&self) -> &GestureEngine {
        &self.gestures
    }

    /// Pauses tracking and drops the node. Gestures delivered afterwards are
    /// ignored.
    pub fn teardown(&mut self) -> Option<PlaneNode> {
        self.session.pause();
        let node = self.scene.teardown();
        if node.is_some() {
            log::info!("[view] torn down");
        }
        node
    }
}
