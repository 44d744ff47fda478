use egui_wgpu::ScreenDescriptor;

use guibase_core::ExitReason;

use super::App;

/// egui may ask to discard a pass (e.g. a window's first sizing pass); the
/// frame is then rebuilt once before drawing.
const MAX_EGUI_PASSES: u32 = 2;

impl App {
    /// Composes and presents one frame.
    pub(super) fn render(&mut self) {
        if !self.lifecycle.is_running() {
            return;
        }

        let (Some(engine), Some(egui), Some(window)) =
            (&mut self.engine, &mut self.egui, &self.window)
        else {
            return;
        };

        let mut egui_output = egui::FullOutput::default();
        let mut quit_request = None;

        for egui_pass in 0..MAX_EGUI_PASSES {
            if egui_pass == 0 {
                egui.begin_frame(window);
            } else {
                egui.begin_rerun_pass();
            }

            let request = guibase_ui::build_frame(&egui.context, self.font.as_ref());
            quit_request = quit_request.or(request);

            let pass_output = egui.end_pass();
            egui_output.append(pass_output);

            if !egui_output.platform_output.requested_discard() {
                break;
            }
            egui_output.platform_output.request_discard_reasons.clear();
        }

        egui.handle_platform_output(window, &egui_output.platform_output);

        if let Some(reason) = quit_request {
            self.lifecycle.terminate(reason);
            return;
        }

        let mut frame = match engine.begin_frame(self.options.clear_color()) {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                egui.skip_frame(egui_output);
                return;
            }
            Err(err) => {
                log::error!("{err}");
                self.lifecycle.terminate(ExitReason::RenderFailed);
                return;
            }
        };

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [engine.width, engine.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        egui.render(
            &engine.device,
            &engine.queue,
            &mut frame.encoder,
            &frame.view,
            &screen_descriptor,
            egui_output,
        );

        engine.present(frame);
        self.frames_rendered += 1;
    }
}
