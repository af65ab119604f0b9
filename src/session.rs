//! World-tracking session lifecycle.
//!
//! The session is the single authority on whether the scene is live. It has
//! two phases: `Paused` (initial) and `Running`. The view drives it from its
//! visibility callbacks; the platform tracking service behind it is reached
//! through [`TrackingService`].

use crate::error::TrackingError;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    #[default]
    Paused,
    Running,
}

/// What the host should show the user about tracking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackingStatus {
    Paused,
    /// Started, waiting for the first tracked frame.
    Initializing,
    Tracking,
    /// The last start attempt failed; the plane cannot become visible.
    Unavailable(TrackingError),
}

/// Platform world-tracking service.
pub trait TrackingService {
    /// Begin world tracking. Tracked frames may arrive much later.
    fn start(&mut self) -> Result<(), TrackingError>;
    /// Stop consuming tracked frames.
    fn pause(&mut self);
}

pub struct TrackingSession<S: TrackingService> {
    service: S,
    phase: TrackingPhase,
    started_at: Option<Instant>,
    first_frame_after: Option<Duration>,
    failure: Option<TrackingError>,
}

impl<S: TrackingService> TrackingSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            phase: TrackingPhase::Paused,
            started_at: None,
            first_frame_after: None,
            failure: None,
        }
    }

    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == TrackingPhase::Running
    }

    /// Paused -> Running. A second start while running is a no-op. When the
    /// service refuses, the session stays paused and reports unavailable.
    pub fn start(&mut self) {
        if self.is_running() {
            log::debug!("[session] start ignored: already running");
            return;
        }
        match self.service.start() {
            Ok(()) => {
                self.phase = TrackingPhase::Running;
                self.started_at = Some(Instant::now());
                self.first_frame_after = None;
                self.failure = None;
                log::info!("[session] running");
            }
            Err(err) => {
                log::warn!("[session] tracking unavailable: {}", err);
                self.failure = Some(err);
            }
        }
    }

    /// Running -> Paused. Scene contents are left untouched.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.service.pause();
        self.phase = TrackingPhase::Paused;
        self.started_at = None;
        log::info!("[session] paused");
    }

    /// Host callback for each tracked frame. Only the first frame of a run is
    /// interesting; frames while paused are dropped.
    pub fn on_tracked_frame(&mut self) {
        if !self.is_running() || self.first_frame_after.is_some() {
            return;
        }
        let elapsed = self
            .started_at
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        self.first_frame_after = Some(elapsed);
        log::info!("[session] first tracked frame after {:?}", elapsed);
    }

    pub fn status(&self) -> TrackingStatus {
        match (self.phase, &self.failure) {
            (TrackingPhase::Paused, Some(err)) => TrackingStatus::Unavailable(err.clone()),
            (TrackingPhase::Paused, None) => TrackingStatus::Paused,
            (TrackingPhase::Running, _) if self.first_frame_after.is_some() => {
                TrackingStatus::Tracking
            }
            (TrackingPhase::Running, _) => TrackingStatus::Initializing,
        }
    }

    /// Delay between the current run's start and its first tracked frame.
    pub fn time_to_first_frame(&self) -> Option<Duration> {
        self.first_frame_after
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }
}
