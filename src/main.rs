use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::config::{Config, ThemeSetting};
use pomo::error::PomoError;
use pomo::timer::TimerConfig;
use pomo::tui::App;
use pomo::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    // CLI flags win over the config file; everything is clamped on use.
    let timer_config = TimerConfig::new(
        cli.work.unwrap_or(config.timer.work_minutes),
        cli.r#break.unwrap_or(config.timer.break_minutes),
        cli.sessions.unwrap_or(config.timer.total_sessions),
    );

    let sound_enabled = !cli.no_sound && config.ui.sound;
    let theme = if cli.light {
        ThemeSetting::Light
    } else {
        config.ui.theme
    };

    let mut app = App::new(timer_config, sound_enabled, theme);
    pomo::tui::run(&mut app)
}
