//! The GUI renderer bridge: egui input from winit, egui drawing through wgpu.

use egui::{Context, TexturesDelta};
use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::window::Window;

/// Texture uploads from frames that were built but never drawn.
///
/// egui sends the font atlas in full only once and then patches it, so an
/// upload that is dropped with a skipped frame must reach the GPU later.
#[derive(Default)]
pub struct TextureBacklog {
    pending: TexturesDelta,
}

impl TextureBacklog {
    /// Keeps the uploads of a frame that will not be drawn.
    pub fn defer(&mut self, delta: TexturesDelta) {
        self.pending.append(delta);
    }

    /// Returns the deferred uploads followed by `current`, emptying the backlog.
    pub fn merge(&mut self, current: TexturesDelta) -> TexturesDelta {
        let mut merged = std::mem::take(&mut self.pending);
        merged.append(current);
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// egui state bound to one window and one GPU device.
pub struct EguiIntegration {
    pub context: Context,
    pub state: EguiWinitState,
    pub renderer: EguiRenderer,
    backlog: TextureBacklog,
    /// Input of the current frame, replayed (without events) on a rerun pass.
    last_raw_input: egui::RawInput,
}

impl EguiIntegration {
    /// Binds `context`, created earlier by the shell, to `window` and `device`.
    #[must_use]
    pub fn new(
        context: Context,
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        context.set_visuals(egui::Visuals::dark());

        let viewport_id = context.viewport_id();
        let max_texture_side = device.limits().max_texture_dimension_2d as usize;
        let state = EguiWinitState::new(
            context.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            window.theme(),
            Some(max_texture_side),
        );

        let renderer =
            EguiRenderer::new(device, output_format, egui_wgpu::RendererOptions::default());

        Self {
            context,
            state,
            renderer,
            backlog: TextureBacklog::default(),
            last_raw_input: egui::RawInput::default(),
        }
    }

    /// Feeds a window event into egui's input state.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Starts the frame with everything received since the last one.
    pub fn begin_frame(&mut self, window: &Window) {
        let raw_input = self.state.take_egui_input(window);
        self.last_raw_input = raw_input.clone();
        self.context.begin_pass(raw_input);
    }

    /// Starts a second pass of the same frame. Clicks and key presses were
    /// consumed by the first pass and are not replayed.
    pub fn begin_rerun_pass(&mut self) {
        self.context.begin_pass(self.last_raw_input.take());
    }

    pub fn end_pass(&mut self) -> egui::FullOutput {
        self.context.end_pass()
    }

    /// Applies cursor, clipboard and IME requests to the window.
    pub fn handle_platform_output(&mut self, window: &Window, output: &egui::PlatformOutput) {
        self.state.handle_platform_output(window, output.clone());
    }

    /// Drops a frame that has no surface to draw on, keeping its texture
    /// uploads for the next drawn frame.
    pub fn skip_frame(&mut self, output: egui::FullOutput) {
        self.backlog.defer(output.textures_delta);
    }

    /// Tessellates `output` and draws it over the already cleared `view`.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: &ScreenDescriptor,
        output: egui::FullOutput,
    ) {
        let textures = self.backlog.merge(output.textures_delta);
        let paint_jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        for (id, image_delta) in &textures.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, screen_descriptor);

        {
            let gui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gui pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            let mut gui_pass = gui_pass.forget_lifetime();
            self.renderer
                .render(&mut gui_pass, &paint_jobs, screen_descriptor);
        }

        for id in &textures.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_uploads(delta: &TexturesDelta) -> usize {
        delta.set.iter().filter(|(_, image)| image.is_whole()).count()
    }

    fn frame(ctx: &Context) -> egui::FullOutput {
        ctx.run(egui::RawInput::default(), |ctx| {
            crate::panels::build_frame(ctx, None);
        })
    }

    #[test]
    fn test_skipped_frame_keeps_font_atlas_upload() {
        let ctx = Context::default();
        let mut backlog = TextureBacklog::default();

        let first = frame(&ctx);
        assert!(full_uploads(&first.textures_delta) > 0);
        backlog.defer(first.textures_delta);
        assert!(!backlog.is_empty());

        let second = frame(&ctx);
        let drawn = backlog.merge(second.textures_delta);
        assert!(full_uploads(&drawn) > 0);
        assert!(drawn.set[0].1.is_whole());
        assert!(backlog.is_empty());
    }

    #[test]
    fn test_merge_without_backlog_passes_through() {
        let ctx = Context::default();
        let mut backlog = TextureBacklog::default();

        let output = frame(&ctx);
        let expected = output.textures_delta.set.len();
        let drawn = backlog.merge(output.textures_delta);
        assert_eq!(drawn.set.len(), expected);
        assert!(backlog.is_empty());
    }
}
