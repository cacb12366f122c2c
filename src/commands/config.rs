//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};

use blitz_landing::config::migrate_config;
use blitz_landing::theme::{ansi, current_theme};
use blitz_landing::Config;

/// Show the effective configuration as TOML, defaults filled in.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load_from(&path).context("Failed to load config")?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.secondary_text(&format!("# {}", path.display())));
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`), writing defaults first
/// if it does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default()
            .save_to(&config_path)
            .context("Failed to write default config")?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;
    if !status.success() {
        anyhow::bail!("{} exited with {}", editor, status);
    }

    // Parse errors are reported here, not on next launch
    Config::load_from(&config_path).context("Edited config is invalid")?;
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation unless `yes`.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if !file_exists {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        println!();
        print_diff_preview(&diff_preview_lines(&result.content, &[], &[], true));
        println!();

        if !yes && !prompt_confirmation(&format!("Create {}?", config_path.display()))? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, &result.content)?;
        println!(
            "{}",
            theme.success_text("Config file created successfully.")
        );
        return Ok(());
    }

    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();

    if total_sections > 0 {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("Found {} missing field(s):", total_fields))
        );
    }
    println!();

    print_diff_preview(&diff_preview_lines(
        &result.content,
        &result.added_fields,
        &result.sections_added,
        false,
    ));
    println!();

    if !yes
        && !prompt_confirmation(&format!(
            "Apply these changes to {}?",
            config_path.display()
        ))?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    fs::write(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));

    Ok(())
}

/// Lines of a diff-style preview of the migrated config.
///
/// New files are shown in full. Otherwise only added keys are shown, each
/// under its section header; the header is marked `+` when the whole
/// section is new.
fn diff_preview_lines(
    new_content: &str,
    added_fields: &[String],
    sections_added: &[String],
    is_new_file: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = String::new();
    let mut pending_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].to_string();
            pending_header = Some(line.to_string());
            continue;
        }

        let key = trimmed.split('=').next().unwrap_or("").trim();
        let is_added = added_fields.contains(&format!("{}.{}", section, key));
        if !is_new_file && !is_added {
            continue;
        }
        if let Some(header) = pending_header.take() {
            if is_new_file || sections_added.contains(&section) {
                lines.push(format!("+ {}", header));
            } else {
                lines.push(format!("  {}", header));
            }
        }
        lines.push(format!("+ {}", line));
    }
    lines
}

fn print_diff_preview(lines: &[String]) {
    for line in lines {
        match line.strip_prefix('+') {
            Some(rest) => println!("{}+{}{}", ansi::GREEN, rest, ansi::RESET),
            None => println!("{}", line),
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_only_added_keys_under_existing_section() {
        let content = "[playback]\ntick_ms = 50\ndwell_ms = 1000\n";
        let lines = diff_preview_lines(content, &["playback.dwell_ms".to_string()], &[], false);
        assert_eq!(lines, vec!["  [playback]", "+ dwell_ms = 1000"]);
    }

    #[test]
    fn preview_marks_new_section_header() {
        let content = "[ui]\ntheme = \"blitz\"\n";
        let lines = diff_preview_lines(
            content,
            &["ui.theme".to_string()],
            &["ui".to_string()],
            false,
        );
        assert_eq!(lines, vec!["+ [ui]", "+ theme = \"blitz\""]);
    }

    #[test]
    fn preview_of_new_file_shows_everything() {
        let content = "[auth]\nsimulated_delay_ms = 1500\n";
        let lines = diff_preview_lines(content, &[], &[], true);
        assert_eq!(lines, vec!["+ [auth]", "+ simulated_delay_ms = 1500"]);
    }

    #[test]
    fn preview_is_empty_without_additions() {
        let content = "[auth]\nsimulated_delay_ms = 1500\n";
        assert!(diff_preview_lines(content, &[], &[], false).is_empty());
    }
}
