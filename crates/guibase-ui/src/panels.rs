//! UI panel builders.

use egui::{Button, Context, Key, MenuBar, TopBottomPanel, Window};
use guibase_core::ExitReason;

use crate::font::{with_font, FontHandle};

/// Title of the welcome window.
pub const WELCOME_TITLE: &str = "Welcome Message";

/// The welcome window body: product, description, author, license, URL.
pub const WELCOME_LINES: [&str; 5] = [
    "Welcome to GuiBase",
    "This is a Demo for egui",
    "Developed by Loco Software",
    "Available under the MIT License",
    "URL: https://github.com/Loco-Software/PyGuiBase",
];

/// Shortcut hint shown next to File > Quit. Display only; the shortcut
/// itself is handled by [`quit_shortcut_held`].
pub const QUIT_SHORTCUT_LABEL: &str = "Ctrl+Q";

/// Returns true while Ctrl and Q are both held.
pub fn quit_shortcut_held(ctx: &Context) -> bool {
    ctx.input(|i| i.modifiers.ctrl && i.key_down(Key::Q))
}

/// Builds the main menu bar. Returns true if File > Quit was clicked.
pub fn build_menu_bar(ctx: &Context) -> bool {
    let mut quit_clicked = false;

    TopBottomPanel::top("main_menu_bar").show(ctx, |ui| {
        MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let quit = Button::new("Quit").shortcut_text(QUIT_SHORTCUT_LABEL);
                if ui.add(quit).clicked() {
                    quit_clicked = true;
                }
            });
        });
    });

    quit_clicked
}

/// Builds the static welcome window.
pub fn build_welcome_window(ctx: &Context) {
    Window::new(WELCOME_TITLE).show(ctx, |ui| {
        for line in WELCOME_LINES {
            ui.label(line);
        }
    });
}

/// Builds the whole UI for one frame and returns the termination request,
/// if any. The custom font covers everything built here, title bars and
/// popups included, and is switched off again before returning.
pub fn build_frame(ctx: &Context, font: Option<&FontHandle>) -> Option<ExitReason> {
    with_font(ctx, font, |ctx| {
        let mut request = None;

        if quit_shortcut_held(ctx) {
            request = Some(ExitReason::ShortcutQuit);
        }

        if build_menu_bar(ctx) {
            request = request.or(Some(ExitReason::MenuQuit));
        }

        build_welcome_window(ctx);

        request
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, Pos2, RawInput, Rect, Shape, Vec2};

    fn raw_input(modifiers: Modifiers, events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1600.0, 900.0))),
            modifiers,
            events,
            ..Default::default()
        }
    }

    fn key_q(modifiers: Modifiers) -> Event {
        Event::Key {
            key: Key::Q,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn run_frame(ctx: &Context, input: RawInput) -> (Option<ExitReason>, egui::FullOutput) {
        let mut request = None;
        let output = ctx.run(input, |ctx| {
            request = request.or(build_frame(ctx, None));
        });
        (request, output)
    }

    fn collect_text(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_owned()),
            Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_text(shape, out);
                }
            }
            _ => {}
        }
    }

    fn find_text(shape: &Shape, wanted: &str) -> Option<Pos2> {
        match shape {
            Shape::Text(text) if text.galley.text() == wanted => {
                Some(text.pos + text.galley.rect.center().to_vec2())
            }
            Shape::Vec(shapes) => shapes.iter().find_map(|shape| find_text(shape, wanted)),
            _ => None,
        }
    }

    /// Screen position of the center of the drawn text `wanted`.
    fn text_center(output: &egui::FullOutput, wanted: &str) -> Option<Pos2> {
        output
            .shapes
            .iter()
            .find_map(|clipped| find_text(&clipped.shape, wanted))
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Presses and releases the primary button at `pos` over two frames.
    fn click(ctx: &Context, pos: Pos2) -> (Option<ExitReason>, egui::FullOutput) {
        let (pressed, _) = run_frame(
            ctx,
            raw_input(
                Modifiers::NONE,
                vec![Event::PointerMoved(pos), pointer_button(pos, true)],
            ),
        );
        let (released, output) = run_frame(
            ctx,
            raw_input(Modifiers::NONE, vec![pointer_button(pos, false)]),
        );
        (pressed.or(released), output)
    }

    fn drawn_text(output: &egui::FullOutput) -> Vec<String> {
        let mut text = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut text);
        }
        text
    }

    #[test]
    fn test_no_input_keeps_running() {
        let ctx = Context::default();
        let (request, _) = run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));
        assert_eq!(request, None);
    }

    #[test]
    fn test_ctrl_q_requests_shortcut_quit() {
        let ctx = Context::default();
        let (request, _) = run_frame(
            &ctx,
            raw_input(Modifiers::CTRL, vec![key_q(Modifiers::CTRL)]),
        );
        assert_eq!(request, Some(ExitReason::ShortcutQuit));
    }

    #[test]
    fn test_file_quit_requests_menu_quit() {
        let ctx = Context::default();
        let (_, output) = run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));
        let file = text_center(&output, "File").expect("File menu drawn");

        let (request, _) = click(&ctx, file);
        assert_eq!(request, None);

        // Let the popup lay itself out before looking for the item
        run_frame(&ctx, raw_input(Modifiers::NONE, vec![Event::PointerMoved(file)]));
        let (_, output) = run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));
        let quit = text_center(&output, "Quit").expect("Quit item drawn");
        assert!(text_center(&output, QUIT_SHORTCUT_LABEL).is_some());

        let (request, _) = click(&ctx, quit);
        assert_eq!(request, Some(ExitReason::MenuQuit));
    }

    #[test]
    fn test_q_without_ctrl_is_ignored() {
        let ctx = Context::default();
        let (request, _) = run_frame(&ctx, raw_input(Modifiers::NONE, vec![key_q(Modifiers::NONE)]));
        assert_eq!(request, None);
    }

    #[test]
    fn test_ctrl_alone_is_ignored() {
        let ctx = Context::default();
        let (request, _) = run_frame(&ctx, raw_input(Modifiers::CTRL, vec![]));
        assert_eq!(request, None);
    }

    #[test]
    fn test_welcome_window_shows_five_lines_every_frame() {
        let ctx = Context::default();
        // The first frame may be a sizing pass for the window
        run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));

        for _ in 0..3 {
            let (_, output) = run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));
            let text = drawn_text(&output);
            let shown = WELCOME_LINES
                .iter()
                .filter(|line| text.iter().any(|t| t == *line))
                .count();
            assert_eq!(shown, WELCOME_LINES.len());
            assert!(text.iter().any(|t| t == WELCOME_TITLE));
            assert!(text.iter().any(|t| t == "File"));
        }
    }

    #[test]
    fn test_welcome_window_ignores_input() {
        let ctx = Context::default();
        run_frame(&ctx, raw_input(Modifiers::NONE, vec![]));

        let (_, output) = run_frame(
            &ctx,
            raw_input(Modifiers::SHIFT, vec![Event::Text("typed".into())]),
        );
        let text = drawn_text(&output);
        for line in WELCOME_LINES {
            assert!(text.iter().any(|t| t == line), "missing line: {line}");
        }
    }

    #[test]
    fn test_menu_quit_not_clicked_without_input() {
        let ctx = Context::default();
        let mut clicked = false;
        let _ = ctx.run(raw_input(Modifiers::NONE, vec![]), |ctx| {
            clicked |= build_menu_bar(ctx);
        });
        assert!(!clicked);
    }
}
