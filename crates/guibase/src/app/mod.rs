//! Application window and event loop management.

mod input;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use pollster::FutureExt;
use winit::{dpi::LogicalSize, event_loop::ActiveEventLoop, window::Window};

use guibase_core::{ExitReason, Lifecycle, Options};
use guibase_render::RenderEngine;
use guibase_ui::{EguiIntegration, FontHandle};

/// One step of the ordered teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownStep {
    /// egui-winit state and egui-wgpu renderer.
    RendererBridge,
    /// wgpu surface, device and queue.
    GraphicsContext,
    /// The OS window.
    Window,
}

/// The guibase application state.
pub struct App {
    pub(super) options: Options,
    // Created before the window, dropped last
    pub(super) context: egui::Context,
    pub(super) window: Option<Arc<Window>>,
    pub(super) engine: Option<RenderEngine>,
    pub(super) egui: Option<EguiIntegration>,
    pub(super) font: Option<FontHandle>,
    pub(super) lifecycle: Lifecycle,
    pub(super) frames_rendered: u64,
}

impl App {
    /// Creates the application and its GUI context. The window and GPU
    /// context are created when the event loop resumes.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            context: egui::Context::default(),
            window: None,
            engine: None,
            egui: None,
            font: None,
            lifecycle: Lifecycle::default(),
            frames_rendered: 0,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of frames presented so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Whether the custom font was loaded.
    pub fn has_custom_font(&self) -> bool {
        self.font.is_some()
    }

    /// Requests termination. The first reason wins.
    pub fn terminate(&mut self, reason: ExitReason) {
        self.lifecycle.terminate(reason);
    }

    pub fn exit_code(&self) -> ExitCode {
        self.lifecycle.exit_code()
    }

    /// Creates the window, the GPU context and the renderer bridge, then
    /// loads the optional font.
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> guibase_core::Result<()> {
        let config = &self.options.window;
        let window_attributes = Window::default_attributes()
            .with_title(config.title())
            .with_inner_size(LogicalSize::new(config.width(), config.height()));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|err| guibase_core::InitError::WindowCreation(err.to_string()))?,
        );
        log::info!(
            "Created window '{}' ({}x{})",
            config.title(),
            config.width(),
            config.height()
        );

        let engine = RenderEngine::new_windowed(window.clone()).block_on()?;

        let egui = EguiIntegration::new(
            self.context.clone(),
            &engine.device,
            engine.surface_format(),
            &window,
        );

        self.font = match guibase_ui::load_font(&self.options.font) {
            Ok(font) => {
                log::info!("Loaded font {}", self.options.font.path.display());
                // Rebuilds the font atlas on the next frame
                Some(guibase_ui::install_font(&self.context, font))
            }
            Err(err) => {
                log::warn!("{err}; using the default font");
                None
            }
        };

        window.request_redraw();

        self.window = Some(window);
        self.engine = Some(engine);
        self.egui = Some(egui);
        Ok(())
    }

    /// Tears down the renderer bridge, the GPU context and the window, in
    /// that order. Returns the steps performed; each runs at most once over
    /// the life of the app.
    pub fn shutdown(&mut self) -> Vec<TeardownStep> {
        teardown(&mut self.egui, &mut self.engine, &mut self.window)
    }
}

/// Drops whichever of `bridge`, `engine` and `window` are still present, in
/// that order, and reports what was dropped.
fn teardown<B, E, W>(
    bridge: &mut Option<B>,
    engine: &mut Option<E>,
    window: &mut Option<W>,
) -> Vec<TeardownStep> {
    let mut steps = Vec::new();

    if let Some(bridge) = bridge.take() {
        drop(bridge);
        log::info!("Renderer bridge shut down");
        steps.push(TeardownStep::RendererBridge);
    }

    // The surface holds a window reference, so it goes before the window
    if let Some(engine) = engine.take() {
        drop(engine);
        log::info!("Graphics context destroyed");
        steps.push(TeardownStep::GraphicsContext);
    }

    if let Some(window) = window.take() {
        drop(window);
        log::info!("Window destroyed");
        steps.push(TeardownStep::Window);
    }

    steps
}
