//! guibase: a minimal desktop GUI bootstrap.
//!
//! Opens a window, sets up an egui context on top of wgpu, and draws a menu
//! bar with File > Quit plus a static "Welcome Message" window every frame.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     guibase::run(guibase::Options::default())
//! }
//! ```
//!
//! # Quitting
//!
//! The application stops when the window is closed, when Ctrl+Q is held, or
//! when File > Quit is selected. All three paths run the same ordered
//! teardown (GUI renderer, GPU context, window) before `run` returns.
//!
//! # Environment
//!
//! - `RUST_LOG` controls logging (`env_logger`).
//! - `WGPU_BACKEND` selects the GPU backend, e.g. `gl` for OpenGL.
//! - A `wayland` value in `XDG_SESSION_TYPE` is rewritten to `x11` and the
//!   X11 backend is used.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
pub mod platform;

use std::process::ExitCode;

pub use app::{App, TeardownStep};
pub use guibase_core::{
    AssetError, ExitReason, FontConfig, InitError, Lifecycle, Options, WindowConfig,
};
pub use guibase_ui::{WELCOME_LINES, WELCOME_TITLE};

/// Runs the application until it terminates and returns the process exit
/// code: 0 after a normal or user-requested quit, 1 if the window or the
/// graphics context could not be created.
pub fn run(options: Options) -> ExitCode {
    let _ = env_logger::try_init();

    let force_x11 = platform::apply_session_override();

    let event_loop = match platform::build_event_loop(force_x11) {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("{err}");
            return ExitReason::InitFailed.into();
        }
    };

    let mut app = App::new(options);
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {err}");
        app.terminate(ExitReason::InitFailed);
    }

    // No-op when the loop already tore down on exit
    app.shutdown();
    log::info!("Windowing terminated");

    app.exit_code()
}
