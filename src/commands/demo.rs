//! Headless playback of the hero terminal script

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use blitz_landing::cli::{DemoArgs, OutputFormat};
use blitz_landing::player::{PlaybackFrame, PlaybackState, TerminalPlayer};
use blitz_landing::theme::current_theme;
use blitz_landing::Config;

/// How a headless run is paced and printed.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Stop after this many passes, 0 for no limit
    pub passes: u64,
    pub format: OutputFormat,
    /// Sleep between ticks, `None` to run flat out
    pub delay: Option<Duration>,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    tick: u64,
    #[serde(flatten)]
    state: &'a PlaybackState,
    #[serde(flatten)]
    frame: PlaybackFrame<'a>,
}

/// Text emitted for one tick: new characters, or a newline when the
/// player moves on to the next line.
fn text_delta<'a>(prev: &PlaybackState, player: &'a TerminalPlayer) -> Option<&'a str> {
    let next = player.state();
    if next.script_index != prev.script_index || next.passes != prev.passes {
        return Some("\n");
    }
    if next.typed_len > prev.typed_len {
        let line = player.script().line(next.script_index)?;
        return line.get(prev.typed_len..next.typed_len);
    }
    None
}

/// Tick `player` until the pass limit or until `running` is cleared.
///
/// Returns the number of ticks played.
pub fn play<W: Write>(
    player: &mut TerminalPlayer,
    options: &PlayOptions,
    out: &mut W,
    running: &AtomicBool,
) -> Result<u64> {
    if player.script().is_empty() {
        return Ok(0);
    }
    let theme = current_theme();
    player.start();

    let mut ticks = 0u64;
    while running.load(Ordering::SeqCst) {
        if options.passes > 0 && player.state().passes >= options.passes {
            break;
        }
        let prev = player.state().clone();
        player.tick();
        ticks += 1;

        match options.format {
            OutputFormat::Text => {
                if let Some(text) = text_delta(&prev, player) {
                    if options.color && text != "\n" {
                        write!(out, "{}", theme.terminal_text(text))?;
                    } else {
                        write!(out, "{}", text)?;
                    }
                    out.flush()?;
                }
            }
            OutputFormat::Json => {
                let frame = JsonFrame {
                    tick: ticks,
                    state: player.state(),
                    frame: player.frame(),
                };
                serde_json::to_writer(&mut *out, &frame)?;
                writeln!(out)?;
            }
        }

        if let Some(delay) = options.delay {
            thread::sleep(delay);
        }
    }

    player.stop();
    debug!(ticks, passes = player.state().passes, "demo finished");
    Ok(ticks)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &DemoArgs) -> Result<()> {
    let mut timing = config.timing();
    if let Some(ms) = args.tick_ms {
        timing.tick = Duration::from_millis(ms);
    }
    if let Some(ms) = args.dwell_ms {
        timing.dwell = Duration::from_millis(ms);
    }

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let options = PlayOptions {
        passes: args.passes,
        format: args.format,
        delay: (!args.no_delay).then_some(timing.tick),
        color: args.format == OutputFormat::Text && atty::is(atty::Stream::Stdout),
    };
    info!(passes = options.passes, format = ?options.format, "starting demo");

    let mut player = TerminalPlayer::new(config.script(), timing);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    play(&mut player, &options, &mut out, &running)?;
    Ok(())
}
