use glam::Vec2;
use instant::Instant;
use paint_ar::{
    ArConfig, ArView, DrawingSnapshot, GesturePhase, GestureOutcome, PanEvent, PinchEvent,
    TrackingStatus,
};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::WindowBuilder;

mod demo;
mod gpu;
mod input;
mod tracking;

use tracking::SimulatedTracking;

/// Everything the window drives: the AR view, its input mapping and the
/// drawing it was built from (kept so `R` can start a fresh session).
struct Host {
    snapshot: DrawingSnapshot,
    view: ArView<SimulatedTracking>,
    input: input::InputMapper,
    visible: bool,
    title_status: Option<TrackingStatus>,
}

impl Host {
    fn new(snapshot: DrawingSnapshot) -> anyhow::Result<Self> {
        let view = ArView::new(&snapshot, SimulatedTracking::from_env(), ArConfig::default())?;
        Ok(Self {
            snapshot,
            view,
            input: input::InputMapper::default(),
            visible: false,
            title_status: None,
        })
    }

    /// Fresh session at the default pose.
    fn reset(&mut self) -> anyhow::Result<()> {
        self.view.teardown();
        self.view = ArView::new(
            &self.snapshot,
            SimulatedTracking::from_env(),
            ArConfig::default(),
        )?;
        self.input = input::InputMapper::default();
        if self.visible {
            self.view.appear();
        }
        log::info!("[host] view reset");
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.view.appear();
        } else {
            self.view.disappear();
        }
    }

    fn pan(&mut self, event: Option<PanEvent>) {
        if let Some(ev) = event {
            if ev.phase == GesturePhase::Ended {
                if let Some(state) = self.view.gestures().pan_state() {
                    log::debug!("[host] pan ended, last step {:?}", state.last_translation);
                }
            }
            log_rejected(self.view.pan(ev));
        }
    }

    fn pinch(&mut self, events: &[PinchEvent]) {
        for ev in events {
            if ev.phase == GesturePhase::Ended {
                if let Some(state) = self.view.gestures().pinch_state() {
                    log::debug!("[host] pinch ended at scale {:.3}", state.last_scale);
                }
            }
            log_rejected(self.view.pinch(*ev));
        }
    }

    fn tick(&mut self, now: Instant) {
        if self.view.session().service().frame_ready(now) {
            self.view.on_tracked_frame();
        }
    }

    /// The plane shows up once tracking delivered its first frame, and
    /// stays on screen while paused since the scene is retained.
    fn drawable(&self) -> Option<&paint_ar::PlaneNode> {
        let tracked = self.view.session().time_to_first_frame().is_some();
        if tracked {
            self.view.node()
        } else {
            None
        }
    }

    fn title_update(&mut self) -> Option<String> {
        let status = self.view.status();
        if self.title_status.as_ref() == Some(&status) {
            return None;
        }
        let label = match &status {
            TrackingStatus::Paused => "paused".to_string(),
            TrackingStatus::Initializing => "initializing tracking...".to_string(),
            TrackingStatus::Tracking => "tracking".to_string(),
            TrackingStatus::Unavailable(err) => format!("AR unavailable ({err})"),
        };
        self.title_status = Some(status);
        Some(format!("PaintAR - {label}"))
    }
}

fn log_rejected(outcome: GestureOutcome) {
    if outcome == GestureOutcome::Rejected {
        log::warn!("[host] gesture payload rejected");
    }
}

fn touch_phase(phase: TouchPhase) -> GesturePhase {
    match phase {
        TouchPhase::Started => GesturePhase::Began,
        TouchPhase::Moved => GesturePhase::Changed,
        TouchPhase::Ended | TouchPhase::Cancelled => GesturePhase::Ended,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut host = Host::new(demo::demo_drawing())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("PaintAR")
        .build(&event_loop)?;

    let plane = host
        .view
        .node()
        .ok_or_else(|| anyhow::anyhow!("view built without a plane node"))?;
    let mut state = pollster::block_on(gpu::GpuState::new(&window, plane))?;
    host.set_visible(true);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => {
                host.view.teardown();
                elwt.exit();
            }
            WindowEvent::Focused(focused) => host.set_visible(focused),
            WindowEvent::Occluded(occluded) => host.set_visible(!occluded),
            WindowEvent::CursorMoved { position, .. } => {
                let ev = host
                    .input
                    .cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                host.pan(ev);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let ev = host
                    .input
                    .left_button(button_state == ElementState::Pressed);
                host.pan(ev);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let events = match delta {
                    MouseScrollDelta::LineDelta(_, y) => host.input.wheel_lines(y),
                    MouseScrollDelta::PixelDelta(p) => host.input.wheel_pixels(p.y as f32),
                };
                host.pinch(&events);
            }
            WindowEvent::TouchpadMagnify { delta, phase, .. } => {
                let ev = host.input.magnify(touch_phase(phase), delta as f32);
                host.pinch(&[ev]);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Key::Character(c) = &event.logical_key {
                        if c.as_str().eq_ignore_ascii_case("r") {
                            if let Err(err) = host.reset() {
                                log::error!("[host] reset failed: {err:#}");
                            }
                        }
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            host.tick(Instant::now());
            if let Some(title) = host.title_update() {
                state.window.set_title(&title);
            }
            match state.render(host.drawable()) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
