//! Command-line interface definition
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Version string with the git SHA (dev builds) and build date.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            sha,
            env!("BLITZ_BUILD_DATE")
        ),
        None => format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("BLITZ_BUILD_DATE")),
    })
}

#[derive(Debug, Parser)]
#[command(name = "blitz-landing")]
#[command(about = "BlitzCoder landing page in your terminal")]
#[command(version = long_version())]
#[command(after_help = concat!("Repository: ", env!("BLITZ_REPO_NAME")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive landing page (default)
    Run(RunArgs),

    /// Play the hero terminal script to stdout
    #[command(after_help = "\
Examples:
  blitz-landing demo --passes 1
  blitz-landing demo --format json --no-delay | jq .in_progress")]
    Demo(DemoArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Milliseconds between typed characters
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Milliseconds a finished line stays before the next one
    #[arg(long)]
    pub dwell_ms: Option<u64>,

    /// Simulated sign-in latency in milliseconds
    #[arg(long)]
    pub auth_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Characters as they are typed
    #[default]
    Text,
    /// One JSON frame per tick
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Stop after this many passes over the script (0 loops forever)
    #[arg(long, default_value_t = 1)]
    pub passes: u64,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not sleep between ticks
    #[arg(long)]
    pub no_delay: bool,

    /// Milliseconds between typed characters
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Milliseconds a finished line stays before the next one
    #[arg(long)]
    pub dwell_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add fields missing from an older config file
    Migrate {
        /// Apply without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
