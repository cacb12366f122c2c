//! The hero terminal: owns a script and replays it forever.

use serde::Serialize;
use tracing::debug;

use super::script::Script;
use super::state::{transition, PlaybackState, PlayerEvent};
use super::timing::PlaybackTiming;

/// What the terminal shows at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackFrame<'a> {
    /// Lines already typed in this pass (scrollback)
    pub completed: &'a [String],
    /// The line being typed, `None` only for an empty script
    pub in_progress: Option<&'a str>,
}

/// Typewriter simulation of someone using the CLI.
///
/// The host calls [`TerminalPlayer::tick`] on every timer period; the player
/// takes care of typing, dwelling and looping on its own.
#[derive(Debug, Clone)]
pub struct TerminalPlayer {
    script: Script,
    timing: PlaybackTiming,
    state: PlaybackState,
}

impl TerminalPlayer {
    pub fn new(script: Script, timing: PlaybackTiming) -> Self {
        Self {
            script,
            timing,
            state: PlaybackState::default(),
        }
    }

    /// Start looping. Calling it again while running has no effect.
    pub fn start(&mut self) {
        if !self.state.running {
            debug!(lines = self.script.len(), "terminal playback started");
        }
        self.apply(PlayerEvent::Start);
    }

    /// Stop looping. Safe before `start` and when already stopped.
    pub fn stop(&mut self) {
        if self.state.running {
            debug!(passes = self.state.passes, "terminal playback stopped");
        }
        self.apply(PlayerEvent::Stop);
    }

    pub fn tick(&mut self) {
        self.apply(PlayerEvent::Tick);
    }

    fn apply(&mut self, event: PlayerEvent) {
        self.state = transition(&self.state, &self.script, self.timing.dwell_ticks(), event);
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }

    pub fn typed_prefix(&self) -> &str {
        self.state.typed_prefix(&self.script)
    }

    /// Scrollback plus the line currently being typed.
    pub fn frame(&self) -> PlaybackFrame<'_> {
        let lines = self.script.lines();
        PlaybackFrame {
            completed: &lines[..self.state.script_index.min(lines.len())],
            in_progress: (!self.script.is_empty()).then(|| self.typed_prefix()),
        }
    }
}
