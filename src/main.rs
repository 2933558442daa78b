//! personal-tracker: a keyboard-driven terminal dashboard for recording
//! daily water intake and sleep hours, charted by day of week.

mod app;
mod cli;
mod data;
mod tracker;
mod ui;

use anyhow::Result;
use cli::{AppConfig, Cli};

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set; log output on stderr would fight the
    // alternate screen otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(cli);

    log::info!(
        "starting personal-tracker (theme {:?}, {} mode)",
        config.theme,
        config.entry_mode
    );

    app::run(config)
}
