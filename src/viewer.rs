//! Standalone demo window backed by winit.
//!
//! Opens a window, routes its events to a live [`Camera`], and polls
//! held movement keys once per redraw with measured delta time. No
//! drawing happens here; the viewer exists to exercise event delivery
//! and to hand the refreshed [`CameraUniform`] to whatever renders.
//!
//! ```no_run
//! # use vantage::Viewer;
//! Viewer::builder()
//!     .with_title("camera demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::{Camera, CameraUniform},
    error::VantageError,
    input::InputTranslator,
    options::Options,
    util::FrameTiming,
};

/// Redraws between FPS/eye-position debug log lines.
const LOG_INTERVAL_FRAMES: u32 = 300;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Vantage",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Vantage".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving an interactive camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop. Escape closes the window.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    pub fn run(self) -> Result<(), VantageError> {
        let event_loop =
            EventLoop::new().map_err(|e| VantageError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            camera: None,
            translator: InputTranslator::new(),
            uniform: CameraUniform::new(),
            timing: FrameTiming::new(),
            options: self.options.unwrap_or_default(),
            title: self.title,
            frames: 0,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    camera: Option<Camera>,
    translator: InputTranslator,
    uniform: CameraUniform,
    timing: FrameTiming,
    options: Options,
    title: String,
    frames: u32,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs =
            Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                log::error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let camera = self.options.camera.build_camera(size.width, size.height);
        log::info!(
            "viewer started: {}x{} viewport, eye at {:?}",
            size.width,
            size.height,
            camera.eye()
        );

        window.request_redraw();
        self.window = Some(window);
        self.camera = Some(camera);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(camera) = &mut self.camera {
                    let opts = &self.options.camera;
                    camera.projection_mut().set_perspective(
                        opts.fovy.to_radians(),
                        size.width.max(1),
                        size.height.max(1),
                        opts.znear,
                        opts.zfar,
                    );
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(camera)) =
                    (&self.window, &mut self.camera)
                {
                    let dt = self.timing.tick();
                    camera.on_key_poll(dt, self.translator.held_keys());
                    self.uniform.update(camera);

                    self.frames += 1;
                    if self.frames % LOG_INTERVAL_FRAMES == 0 {
                        log::debug!(
                            "fps {:.1}, eye {:?}",
                            self.timing.fps(),
                            camera.eye()
                        );
                    }
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if matches!(
                key_event.physical_key,
                PhysicalKey::Code(KeyCode::Escape)
            ) && key_event.state.is_pressed() =>
            {
                event_loop.exit();
            }

            other => {
                if let (Some(window), Some(camera)) =
                    (&self.window, &mut self.camera)
                {
                    if self.translator.handle_event(camera, &other) {
                        window.request_redraw();
                    }
                }
            }
        }
    }
}
