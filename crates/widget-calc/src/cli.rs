//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Verbosity, WidgetConfig};

/// Keypad calculator with a history log and base-color theming
#[derive(Parser, Debug)]
#[command(name = "widget-calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base color the theme is derived from (#rrggbb or #rgb)
    #[arg(long, env = "WIDGET_CALC_THEME")]
    pub theme: Option<String>,

    /// Hide the clickable keypad
    #[arg(long)]
    pub no_keypad: bool,

    /// Run headless: feed these space-separated tokens and print the result
    #[arg(long, value_name = "TOKENS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// With --keys, print the history as JSON
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Folds the arguments into a configuration
    #[must_use]
    pub fn to_config(&self) -> WidgetConfig {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_count(self.verbose)
        };

        let mut config = WidgetConfig::new()
            .with_keypad(!self.no_keypad)
            .with_verbosity(verbosity);
        if let Some(theme) = &self.theme {
            config = config.with_theme(theme.as_str());
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.as_path());
        }
        config
    }

    /// Tokens for headless mode
    #[must_use]
    pub fn tokens(&self) -> Option<Vec<&str>> {
        self.keys
            .as_deref()
            .map(|keys| keys.split_whitespace().collect())
    }
}
