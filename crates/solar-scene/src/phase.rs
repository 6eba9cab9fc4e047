//! Application lifecycle state machine.

/// The two lifecycle states of the application loop.
///
/// The only transition is `Running → ShuttingDown`, taken when the platform
/// delivers a quit/close signal. Once shutting down, no further update or
/// render work happens; fatal errors abort outside this state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// The loop is polling input, updating, and rendering.
    #[default]
    Running,
    /// A quit signal was received; the loop is exiting.
    ShuttingDown,
}

impl AppPhase {
    /// Whether update/render work should still happen.
    pub fn is_running(&self) -> bool {
        matches!(self, AppPhase::Running)
    }

    /// Records a quit signal. Returns `true` only for the call that actually
    /// performed the `Running → ShuttingDown` transition.
    pub fn request_shutdown(&mut self) -> bool {
        match self {
            AppPhase::Running => {
                *self = AppPhase::ShuttingDown;
                true
            }
            AppPhase::ShuttingDown => false,
        }
    }
}
