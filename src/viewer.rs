//! Windowed viewer: owns the field, the clock, and the renderer.
//!
//! The viewer is the frame driver from the field's point of view: it
//! ingests pointer samples and viewport resizes from winit, ticks the field
//! once per redraw, and hands the flat buffers to the GPU renderer. Ticks
//! run to completion on the event-loop thread, so pointer writes and field
//! updates never overlap.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::FieldConfig;
use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::input::Pointer;
use crate::time::Time;

/// A viewer builder.
///
/// Use method chaining to configure, then call `.run()` to open a window:
///
/// ```ignore
/// Viewer::new()
///     .with_title("ambient background")
///     .with_seed(7)
///     .run()?;
/// ```
///
/// By default the field density follows the viewport-width breakpoints and
/// the field is rebuilt when a resize crosses one. A fixed config from
/// [`with_config`](Viewer::with_config) opts out of breakpoint tracking.
///
/// # Controls
///
/// - **Space**: pause/resume the field
/// - **Escape**: quit
pub struct Viewer {
    title: String,
    config: Option<FieldConfig>,
    seed: Option<u64>,
}

impl Viewer {
    /// Create a viewer with breakpoint-driven density.
    pub fn new() -> Self {
        Self {
            title: "driftfield".to_string(),
            config: None,
            seed: None,
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a fixed field configuration instead of the viewport breakpoint
    /// table. Resizes will reconfigure the surface but never rebuild the
    /// field.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed the field's RNG for reproducible seeding (also applied to
    /// rebuilds after breakpoint crossings).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the window and run until closed. Blocks the calling thread.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.title, self.config, self.seed);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    title: String,
    fixed_config: Option<FieldConfig>,
    seed: Option<u64>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    pointer: Pointer,
    time: Time,
    /// Initialization errors surface here; winit's handler methods cannot
    /// return them directly.
    error: Option<ViewerError>,
}

impl App {
    fn new(title: String, fixed_config: Option<FieldConfig>, seed: Option<u64>) -> Self {
        Self {
            title,
            fixed_config,
            seed,
            window: None,
            gpu: None,
            field: None,
            pointer: Pointer::new(),
            time: Time::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();
        self.pointer.set_window_size(size.width, size.height);

        let mut config = self
            .fixed_config
            .clone()
            .unwrap_or_else(|| FieldConfig::for_viewport_width(size.width));
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        let field = ParticleField::new(config)?;
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            field.positions(),
            field.colors(),
            field.sizes(),
        ))?;

        window.request_redraw();
        self.window = Some(window);
        self.field = Some(field);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Space => self.time.toggle_pause(),
                KeyCode::Escape => event_loop.exit(),
                _ => {}
            },
            WindowEvent::Resized(physical_size) => {
                self.pointer
                    .set_window_size(physical_size.width, physical_size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                // Crossing a density breakpoint discards the field and
                // reseeds; the GPU buffers must follow the new count.
                if self.fixed_config.is_none() {
                    let rebuilt = match self.field.as_mut() {
                        Some(field) => field.resize(physical_size.width),
                        None => Ok(false),
                    };
                    match rebuilt {
                        Ok(true) => {
                            if let (Some(field), Some(gpu)) = (&self.field, &mut self.gpu) {
                                gpu.rebuild_particles(
                                    field.positions(),
                                    field.colors(),
                                    field.sizes(),
                                );
                            }
                        }
                        Ok(false) => {}
                        Err(e) => self.fail(event_loop, e.into()),
                    }
                }
            }
            WindowEvent::CursorMoved { .. } | WindowEvent::Touch(_) => {
                if self.pointer.handle_event(&event) {
                    if let Some(field) = &mut self.field {
                        let ndc = self.pointer.ndc();
                        field.set_pointer_sample(ndc.x, ndc.y);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let (elapsed, _delta) = self.time.update();

                if let (Some(field), Some(gpu)) = (&mut self.field, &mut self.gpu) {
                    if !self.time.is_paused() {
                        field.advance(elapsed);
                        gpu.write_positions(field.positions());
                    }

                    match gpu.render(field.rotation(), field.opacity()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            };
                            gpu.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
