use instant::Instant;
use std::time::Duration;
use paint_ar::{TrackingError, TrackingService};

const DEFAULT_TRACKING_DELAY_MS: u64 = 600;

/// Stand-in for a platform world tracker. There is no camera on the desktop,
/// so tracking "initialises" after a fixed delay and then reports a frame
/// every tick.
#[derive(Clone, Debug)]
pub struct SimulatedTracking {
    supported: bool,
    delay: Duration,
    started_at: Option<Instant>,
}

impl SimulatedTracking {
    pub fn new(supported: bool, delay: Duration) -> Self {
        Self {
            supported,
            delay,
            started_at: None,
        }
    }

    /// Reads `PAINT_AR_TRACKING_DELAY_MS` and `PAINT_AR_TRACKING_UNSUPPORTED`.
    pub fn from_env() -> Self {
        let delay_ms = std::env::var("PAINT_AR_TRACKING_DELAY_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TRACKING_DELAY_MS);
        let supported = std::env::var_os("PAINT_AR_TRACKING_UNSUPPORTED").is_none();
        log::info!(
            "[tracking] simulated tracker: supported={} delay={}ms",
            supported,
            delay_ms
        );
        Self::new(supported, Duration::from_millis(delay_ms))
    }

    /// Whether a tracked frame is available at `now`.
    pub fn frame_ready(&self, now: Instant) -> bool {
        match self.started_at {
            Some(t) => now.saturating_duration_since(t) >= self.delay,
            None => false,
        }
    }
}

impl TrackingService for SimulatedTracking {
    fn start(&mut self) -> Result<(), TrackingError> {
        if !self.supported {
            return Err(TrackingError::Unsupported);
        }
        self.started_at = Some(Instant::now());
        Ok(())
    }

    fn pause(&mut self) {
        self.started_at = None;
    }
}
