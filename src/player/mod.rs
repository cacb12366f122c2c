//! Scripted terminal playback
//!
//! Drives the illusion of a live CLI session on the landing page by typing
//! a fixed script one character per tick, holding each finished line for a
//! dwell period and looping forever.
//!
//! # Architecture
//!
//! - `script`: the immutable list of lines (`Script`)
//! - `state`: `PlaybackState` and the pure `transition` function
//! - `timing`: tick/dwell configuration and the wall-clock `Ticker`
//! - `terminal`: `TerminalPlayer`, the stateful wrapper the host mounts
//!
//! # Usage
//!
//! ```
//! use blitz_landing::player::{PlaybackTiming, Script, TerminalPlayer};
//!
//! let mut player = TerminalPlayer::new(Script::new(["$ blitz"]), PlaybackTiming::default());
//! player.start();
//! player.tick();
//! assert_eq!(player.frame().in_progress, Some("$"));
//! ```

mod script;
pub mod state;
mod terminal;
mod timing;

pub use script::{Script, HERO_SCRIPT};
pub use state::{transition, PlaybackState, PlayerEvent};
pub use terminal::{PlaybackFrame, TerminalPlayer};
pub use timing::{PlaybackTiming, Ticker, MAX_CATCH_UP_TICKS};
