//! Command-line interface argument parsing.
//!
//! The tracker launches straight into the chart view; the CLI only selects
//! the color theme and how repeated same-day entries are applied:
//! - `personal-tracker --theme dark`
//! - `personal-tracker --entry-mode replace`

use clap::Parser;

use crate::tracker::EntryMode;

/// A keyboard-driven terminal dashboard for recording daily water intake and
/// hours of sleep.
///
/// Press 'w' or 's' on the chart view to add today's entry.
#[derive(Parser, Debug)]
#[command(name = "personal-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the bundled color theme (e.g. "default", "dark")
    #[arg(short, long, default_value = "default")]
    pub theme: String,

    /// How an entry for a day that already has a value is applied
    #[arg(short, long, value_enum, default_value_t)]
    pub entry_mode: EntryMode,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: String,
    pub entry_mode: EntryMode,
}

impl AppConfig {
    /// Create AppConfig from parsed CLI arguments
    pub fn from_cli(cli: Cli) -> Self {
        AppConfig {
            theme: cli.theme,
            entry_mode: cli.entry_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cli = Cli::try_parse_from(["personal-tracker"]).unwrap();
        let config = AppConfig::from_cli(cli);
        assert_eq!(config.theme, "default");
        assert_eq!(config.entry_mode, EntryMode::Append);
    }

    #[test]
    fn test_custom_theme() {
        let cli = Cli::try_parse_from(["personal-tracker", "--theme", "dark"]).unwrap();
        assert_eq!(cli.theme, "dark");
    }

    #[test]
    fn test_replace_entry_mode() {
        let cli = Cli::try_parse_from(["personal-tracker", "--entry-mode", "replace"]).unwrap();
        assert_eq!(cli.entry_mode, EntryMode::Replace);
    }

    #[test]
    fn test_unknown_entry_mode_rejected() {
        assert!(Cli::try_parse_from(["personal-tracker", "--entry-mode", "upsert"]).is_err());
    }
}
