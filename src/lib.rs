//! Analog-style 24-hour clock face with a time-proportional radial sweep.
//!
//! The dial maps the whole day onto one revolution: midnight at the bottom,
//! noon at the top. A filled arc grows clockwise from the bottom mark to the
//! current time, its fill depth animating in over the first second after
//! launch, and the background/accent pair is reselected from a fixed palette
//! every five minutes.
//!
//! [`ClockFace`] owns the window loop; the rendering/animation engine lives
//! in the submodules and runs headless in the crate tests.

pub mod animation;
pub mod coordinator;
pub mod digits;
pub mod face;
pub mod palette;
pub mod raster;
pub mod trig;

use std::error::Error;
use std::time::{Duration, Instant};

use bon::Builder;
use chrono::Timelike;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::animation::GROW_DURATION_MS;
use crate::coordinator::{FaceEvent, RedrawCoordinator, TimeOfDay};
use crate::palette::{legible_over, LegibilityFn};
use crate::raster::Canvas;

pub use crate::coordinator::DirtyLayers;
pub use crate::palette::{Color, Palette};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Window and selection settings. The face geometry itself is fixed; only
/// the ambient host parameters are configurable.
#[derive(Debug, Clone, Builder)]
pub struct FaceConfig {
    #[builder(default = "sweepface".to_string())]
    pub title: String,
    #[builder(default = 180)]
    pub window_width: usize,
    #[builder(default = 180)]
    pub window_height: usize,
    #[builder(default = 30.0)]
    pub max_framerate: f64,
    /// Fixed palette seed for reproducible runs; entropy-seeded when unset.
    pub seed: Option<u64>,
    /// Host legibility capability mapping a background to a readable
    /// foreground.
    #[builder(default = legible_over as LegibilityFn)]
    pub legibility: LegibilityFn,
}

/// The clock face application: owns the configuration and runs the window
/// loop.
pub struct ClockFace {
    config: FaceConfig,
}

impl ClockFace {
    pub fn new(config: FaceConfig) -> Self {
        Self { config }
    }

    /// Open the window and run until it is closed.
    ///
    /// The loop dispatches a [`FaceEvent::TimeTick`] on every minute
    /// rollover and [`FaceEvent::AnimationProgress`] at frame cadence while
    /// the startup animation runs; redraws happen only when a layer was
    /// marked dirty.
    pub fn show(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let fb_width = size.width as usize;
        let fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let (time, now_secs) = local_time();
        let mut coordinator =
            RedrawCoordinator::new(self.config.seed, self.config.legibility, time, now_secs);
        let mut last_minute = time.minute;

        let started = Instant::now();
        let mut grow_done = false;

        let frame_duration = Duration::from_secs_f64(1.0 / self.config.max_framerate);
        let mut last_frame = Instant::now();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        let _ = pixels.resize_surface(new_size.width, new_size.height);
                    }
                    WindowEvent::RedrawRequested => {
                        if coordinator.take_dirty().any() {
                            let palette = *coordinator.palette();
                            let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                            canvas.clear(palette.background);
                            face::draw_face(&mut canvas, &palette);
                            face::draw_hand(
                                &mut canvas,
                                &palette,
                                coordinator.time(),
                                coordinator.inset_percent(),
                            );
                        }
                        let _ = pixels.render();
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() < frame_duration {
                        return;
                    }
                    last_frame = Instant::now();

                    let (time, now_secs) = local_time();
                    if time.minute != last_minute {
                        last_minute = time.minute;
                        coordinator.handle(FaceEvent::TimeTick { time, now_secs });
                    }

                    if !grow_done {
                        let progress =
                            (started.elapsed().as_millis() as f64 / GROW_DURATION_MS as f64).min(1.0);
                        coordinator.handle(FaceEvent::AnimationProgress(progress));
                        grow_done = progress >= 1.0;
                    }

                    if coordinator.dirty().any() {
                        window_clone.request_redraw();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// HOST CLOCK
// ============================================================================

fn local_time() -> (TimeOfDay, u64) {
    let now = chrono::Local::now();
    let time = TimeOfDay {
        hour: now.hour() as u8,
        minute: now.minute() as u8,
    };
    (time, now.timestamp().max(0) as u64)
}
