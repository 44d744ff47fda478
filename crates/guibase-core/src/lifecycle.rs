//! Application run state.

use std::process::ExitCode;

/// Why the application stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The OS close control was used.
    WindowClosed,
    /// Ctrl+Q was held.
    ShortcutQuit,
    /// File > Quit was selected.
    MenuQuit,
    /// Window or graphics context creation failed.
    InitFailed,
    /// The GPU surface became unusable while running.
    RenderFailed,
}

impl ExitReason {
    /// Process exit code for this reason.
    pub fn code(self) -> u8 {
        match self {
            Self::WindowClosed | Self::ShortcutQuit | Self::MenuQuit => 0,
            Self::InitFailed | Self::RenderFailed => 1,
        }
    }
}

impl From<ExitReason> for ExitCode {
    fn from(reason: ExitReason) -> Self {
        ExitCode::from(reason.code())
    }
}

/// Two-state machine: `Running` until the first termination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Running,
    Terminated(ExitReason),
}

impl Lifecycle {
    /// Requests termination. Only the first request is recorded.
    ///
    /// Returns `true` if this call moved the state to `Terminated`.
    pub fn terminate(&mut self, reason: ExitReason) -> bool {
        match self {
            Self::Running => {
                log::info!("Terminating: {reason:?}");
                *self = Self::Terminated(reason);
                true
            }
            Self::Terminated(_) => false,
        }
    }

    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// The recorded exit reason, if terminated.
    pub fn exit_reason(self) -> Option<ExitReason> {
        match self {
            Self::Running => None,
            Self::Terminated(reason) => Some(reason),
        }
    }

    /// Exit code for the process. A loop that ended while still `Running`
    /// counts as a normal exit.
    pub fn exit_code(self) -> ExitCode {
        self.exit_reason().map_or(ExitCode::SUCCESS, ExitCode::from)
    }
}
