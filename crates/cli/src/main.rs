//! CLI to go along with the sprout launcher
//!
//! Drives the same config and dispatch logic as the GUI, so workspaces can be
//! opened from a terminal or a window-manager keybinding.
use std::process::exit;

use clap::{Parser, Subcommand};
use prettytable::{Table, row};

use common::{Config, Dispatcher, SystemLauncher, Workspace, load_config};

#[derive(Parser, Debug)]
/// The CLI for the sprout launcher
struct Cli {
    /// The [Action] to perform
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Clone, Debug)]
/// Different things the CLI can do
enum Action {
    /// List all workspaces with their hotkey positions. See [list]
    #[command(about = "List all workspaces")]
    List,
    /// Open a workspace by position or name. See [open]
    #[command(about = "Open a workspace by position (1-9) or name")]
    Open {
        /// 1-based position or case-insensitive workspace name
        workspace: String,
    },
}

/// Print a table of all workspaces
///
/// ## Output
///
/// One row per workspace with the following columns:
/// - Key: the hotkey position (1-based)
/// - Name: the workspace name
/// - Apps: number of app entries
/// - URLs: number of URLs
fn list(config: &Config) {
    let mut table = Table::new();

    table.add_row(row!["Key", "Name", "Apps", "URLs"]);

    for (index, ws) in config.workspaces.iter().enumerate() {
        table.add_row(row![index + 1, ws.name, ws.apps.len(), ws.urls.len()]);
    }

    table.printstd();
}

/// Find a workspace by 1-based position or case-insensitive name
fn find_workspace<'a>(config: &'a Config, selector: &str) -> Option<&'a Workspace> {
    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| config.workspaces.get(i));
    }

    config
        .workspaces
        .iter()
        .find(|ws| ws.name.eq_ignore_ascii_case(selector))
}

/// Open every app and URL of the selected workspace
fn open(config: &Config, selector: &str) {
    let Some(ws) = find_workspace(config, selector) else {
        log::error!("No workspace matching: {selector}");

        exit(1);
    };

    Dispatcher::new(SystemLauncher).open_workspace(ws);
}

fn main() {
    let args = Cli::parse();
    simple_logger::SimpleLogger::new().env().init().unwrap();

    let config = load_config();

    match args.action {
        Action::List => list(&config),
        Action::Open { workspace } => open(&config, &workspace),
    };
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_config() -> Config {
        Config {
            workspaces: vec![
                Workspace {
                    name: String::from("Work"),
                    ..Workspace::default()
                },
                Workspace {
                    name: String::from("Play"),
                    ..Workspace::default()
                },
            ],
        }
    }

    #[test]
    fn find_by_position_is_one_based() {
        let config = sample_config();

        assert_eq!(find_workspace(&config, "1").map(|w| w.name.as_str()), Some("Work"));
        assert_eq!(find_workspace(&config, "2").map(|w| w.name.as_str()), Some("Play"));
        assert_eq!(find_workspace(&config, "0"), None);
        assert_eq!(find_workspace(&config, "3"), None);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let config = sample_config();

        assert_eq!(find_workspace(&config, "play").map(|w| w.name.as_str()), Some("Play"));
        assert_eq!(find_workspace(&config, "nope"), None);
    }
}
