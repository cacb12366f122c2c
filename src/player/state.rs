//! Player state management
//!
//! Contains the `PlaybackState` struct for the typewriter terminal and the
//! pure `transition` function that moves it forward one event at a time.

use serde::Serialize;

use super::script::Script;

/// Events understood by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Begin (or keep) looping
    Start,
    /// Halt the loop; the current frame stays on screen
    Stop,
    /// One period of the fixed-rate timer elapsed
    Tick,
}

/// Typewriter position within the script.
///
/// `transition` keeps `script_index` valid for a non-empty script and
/// `typed_len` on a character boundary of the current line. A hand-built
/// state that breaks this reads as an empty prefix and restarts the line on
/// the next tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    /// Index of the line being typed or held
    pub script_index: usize,
    /// Byte length of the typed prefix of the current line
    pub typed_len: usize,
    /// Ticks spent holding the completed current line
    pub dwell_elapsed: u32,
    /// Completed passes over the whole script
    pub passes: u64,
    /// Whether the loop is active
    pub running: bool,
}

impl PlaybackState {
    /// The typed prefix of the current line.
    pub fn typed_prefix<'a>(&self, script: &'a Script) -> &'a str {
        script
            .line(self.script_index)
            .and_then(|line| line.get(..self.typed_len))
            .unwrap_or("")
    }

    /// Whether the current line has been typed out completely.
    pub fn line_complete(&self, script: &Script) -> bool {
        script
            .line(self.script_index)
            .is_some_and(|line| self.typed_len == line.len())
    }
}

/// Apply one event to the playback state.
///
/// On a tick the player either types the next character of the current
/// line or, once the line is complete, counts down the dwell period and
/// then moves to the next line, wrapping to the first line after the last.
/// An empty script and a stopped player ignore ticks.
pub fn transition(
    state: &PlaybackState,
    script: &Script,
    dwell_ticks: u32,
    event: PlayerEvent,
) -> PlaybackState {
    let mut next = state.clone();
    match event {
        PlayerEvent::Start => next.running = true,
        PlayerEvent::Stop => next.running = false,
        PlayerEvent::Tick => {
            if !next.running {
                return next;
            }
            let Some(line) = script.line(next.script_index) else {
                return next;
            };
            let Some(rest) = line.get(next.typed_len..) else {
                next.typed_len = 0;
                next.dwell_elapsed = 0;
                return next;
            };
            if let Some(ch) = rest.chars().next() {
                next.typed_len += ch.len_utf8();
            } else {
                next.dwell_elapsed += 1;
                if next.dwell_elapsed >= dwell_ticks.max(1) {
                    next.dwell_elapsed = 0;
                    next.typed_len = 0;
                    next.script_index += 1;
                    if next.script_index >= script.len() {
                        next.script_index = 0;
                        next.passes += 1;
                    }
                }
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> PlaybackState {
        PlaybackState {
            running: true,
            ..PlaybackState::default()
        }
    }

    fn tick_n(mut state: PlaybackState, script: &Script, dwell: u32, n: u64) -> PlaybackState {
        for _ in 0..n {
            state = transition(&state, script, dwell, PlayerEvent::Tick);
        }
        state
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlaybackState::default();
        assert_eq!(state.script_index, 0);
        assert_eq!(state.typed_len, 0);
        assert_eq!(state.passes, 0);
        assert!(!state.running);
    }

    #[test]
    fn tick_types_one_character() {
        let script = Script::new(["abc"]);
        let state = tick_n(running(), &script, 10, 1);
        assert_eq!(state.typed_prefix(&script), "a");
    }

    #[test]
    fn tick_types_multibyte_characters_whole() {
        let script = Script::new(["✨ok"]);
        let state = tick_n(running(), &script, 10, 1);
        assert_eq!(state.typed_prefix(&script), "✨");
        let state = tick_n(state, &script, 10, 1);
        assert_eq!(state.typed_prefix(&script), "✨o");
    }

    #[test]
    fn completed_line_dwells_before_advancing() {
        let script = Script::new(["ab", "cd"]);
        let state = tick_n(running(), &script, 3, 2);
        assert!(state.line_complete(&script));

        let state = tick_n(state, &script, 3, 2);
        assert_eq!(state.script_index, 0);
        assert_eq!(state.dwell_elapsed, 2);

        let state = tick_n(state, &script, 3, 1);
        assert_eq!(state.script_index, 1);
        assert_eq!(state.typed_prefix(&script), "");
        assert_eq!(state.dwell_elapsed, 0);
    }

    #[test]
    fn last_line_wraps_to_start() {
        let script = Script::new(["a"]);
        let state = tick_n(running(), &script, 1, 2);
        assert_eq!(state.script_index, 0);
        assert_eq!(state.typed_len, 0);
        assert_eq!(state.passes, 1);
    }

    #[test]
    fn full_pass_returns_to_start() {
        let script = Script::new(["$ ls", "", "📁 done", "x"]);
        let dwell = 10;
        let state = tick_n(running(), &script, dwell, script.pass_ticks(dwell));
        assert_eq!(state.script_index, 0);
        assert_eq!(state.typed_prefix(&script), "");
        assert_eq!(state.dwell_elapsed, 0);
        assert_eq!(state.passes, 1);
    }

    #[test]
    fn one_tick_short_of_a_pass_is_still_on_last_line() {
        let script = Script::new(["ab", "cd"]);
        let state = tick_n(running(), &script, 2, script.pass_ticks(2) - 1);
        assert_eq!(state.script_index, 1);
        assert_eq!(state.passes, 0);
    }

    #[test]
    fn prefix_is_always_a_prefix_and_grows_until_reset() {
        let script = Script::new(["$ blitz create", "✅ ok", ""]);
        let dwell = 4;
        let mut state = running();
        let mut prev_index = state.script_index;
        let mut prev_len = 0;

        for _ in 0..script.pass_ticks(dwell) * 3 {
            state = transition(&state, &script, dwell, PlayerEvent::Tick);
            let line = script.line(state.script_index).unwrap();
            let prefix = state.typed_prefix(&script);
            assert!(line.starts_with(prefix));

            let len = prefix.chars().count();
            if state.script_index == prev_index {
                assert!(len >= prev_len);
            } else {
                assert_eq!(len, 0);
            }
            prev_index = state.script_index;
            prev_len = len;
        }
    }

    #[test]
    fn stopped_player_ignores_ticks() {
        let script = Script::new(["abc"]);
        let state = tick_n(PlaybackState::default(), &script, 10, 5);
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn empty_script_stays_idle() {
        let script = Script::default();
        let state = transition(&PlaybackState::default(), &script, 10, PlayerEvent::Start);
        let ticked = tick_n(state.clone(), &script, 10, 1000);
        assert_eq!(ticked, state);
        assert_eq!(ticked.typed_prefix(&script), "");
    }

    #[test]
    fn out_of_range_position_reads_empty_and_restarts_line() {
        let script = Script::new(["✨ok"]);
        let inside_char = PlaybackState {
            typed_len: 1,
            ..running()
        };
        assert_eq!(inside_char.typed_prefix(&script), "");
        let state = tick_n(inside_char, &script, 10, 1);
        assert_eq!(state.typed_len, 0);

        let past_end = PlaybackState {
            typed_len: 99,
            dwell_elapsed: 3,
            ..running()
        };
        assert_eq!(past_end.typed_prefix(&script), "");
        assert!(!past_end.line_complete(&script));
        let state = tick_n(past_end, &script, 10, 3);
        assert_eq!(state.typed_prefix(&script), "✨o");
        assert_eq!(state.dwell_elapsed, 0);
    }

    #[test]
    fn start_and_stop_toggle_running() {
        let script = Script::new(["a"]);
        let state = transition(&PlaybackState::default(), &script, 1, PlayerEvent::Stop);
        assert!(!state.running);
        let state = transition(&state, &script, 1, PlayerEvent::Start);
        let state = transition(&state, &script, 1, PlayerEvent::Start);
        assert!(state.running);
        let state = transition(&state, &script, 1, PlayerEvent::Stop);
        assert!(!state.running);
    }
}
