mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use blitz_landing::cli::{Cli, Commands, ConfigCommands, RunArgs};
use blitz_landing::logging::{self, LogTarget};
use blitz_landing::theme::set_theme;
use blitz_landing::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        None | Some(Commands::Run(_)) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(target);

    // Config subcommands must still work when the file does not parse
    let config = Config::load();
    if let Ok(config) = &config {
        set_theme(config.theme());
    }

    match cli.command {
        None => {
            let config = config.context("Failed to load config")?;
            commands::run::handle(&config, &RunArgs::default())
        }
        Some(Commands::Run(args)) => {
            let config = config.context("Failed to load config")?;
            commands::run::handle(&config, &args)
        }
        Some(Commands::Demo(args)) => {
            let config = config.context("Failed to load config")?;
            commands::demo::handle(&config, &args)
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
