//! Platform compatibility shims applied before any windowing call.

use guibase_core::InitError;
use winit::event_loop::EventLoop;

/// Environment variable naming the desktop session's display protocol.
pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";

/// Replacement session type for a given current one, if it must change.
pub fn session_override(current: Option<&str>) -> Option<&'static str> {
    match current {
        Some("wayland") => Some("x11"),
        _ => None,
    }
}

/// Rewrites a Wayland session type to X11. Returns true if the event loop
/// should be forced onto the X11 backend.
pub fn apply_session_override() -> bool {
    let current = std::env::var(SESSION_TYPE_VAR).ok();
    match session_override(current.as_deref()) {
        Some(replacement) => {
            log::info!("{SESSION_TYPE_VAR}: overriding {current:?} with {replacement:?}");
            std::env::set_var(SESSION_TYPE_VAR, replacement);
            true
        }
        None => false,
    }
}

/// Creates the winit event loop, on X11 when `force_x11` is set and the
/// platform has an X11 backend.
pub fn build_event_loop(force_x11: bool) -> Result<EventLoop<()>, InitError> {
    #[allow(unused_mut)]
    let mut builder = EventLoop::builder();

    #[cfg(any(
        target_os = "linux",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    ))]
    if force_x11 {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_x11();
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    )))]
    let _ = force_x11;

    builder
        .build()
        .map_err(|err| InitError::EventLoop(err.to_string()))
}
