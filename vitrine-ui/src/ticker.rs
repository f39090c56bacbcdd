//! Hover-pausable marquee state.
//!
//! The ticker strip animates continuously; the only interaction is holding
//! it still while the pointer is over it. Shells map the play state to
//! whatever their animation system calls pause/resume.

/// Play state of the marquee animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// Animation running.
    #[default]
    Running,
    /// Animation held by hover.
    Paused,
}

/// Hover-pausable ticker strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    state: PlayState,
}

impl Ticker {
    /// Create a running ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the strip.
    pub fn pointer_enter(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        self.state = PlayState::Running;
    }

    /// Current play state.
    pub fn play_state(&self) -> PlayState {
        self.state
    }
}
