//! Interactive landing page

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use blitz_landing::auth::SimulatedAuthenticator;
use blitz_landing::cli::RunArgs;
use blitz_landing::landing::LandingPage;
use blitz_landing::player::PlaybackTiming;
use blitz_landing::tui::LandingApp;
use blitz_landing::Config;

/// Config values with command-line overrides applied.
pub fn effective_settings(config: &Config, args: &RunArgs) -> (PlaybackTiming, Duration) {
    let mut timing = config.timing();
    if let Some(ms) = args.tick_ms {
        timing.tick = Duration::from_millis(ms);
    }
    if let Some(ms) = args.dwell_ms {
        timing.dwell = Duration::from_millis(ms);
    }
    let delay = args
        .auth_delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.auth_delay());
    (timing, delay)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &RunArgs) -> Result<()> {
    let (timing, delay) = effective_settings(config, args);
    info!(?timing, ?delay, "opening landing page");

    let page = LandingPage::new(
        config.script(),
        timing,
        Arc::new(SimulatedAuthenticator::new(delay)),
    );
    let mut app = LandingApp::new(page).context("Failed to initialize terminal")?;
    app.run()
}
