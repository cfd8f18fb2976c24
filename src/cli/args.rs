use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A terminal Pomodoro timer")]
#[command(long_about = "pomo - A terminal Pomodoro timer

Alternates timed work and break phases through a fixed number of
sessions, with a progress gauge, dark/light theming, a sound cue, and a
motivational quote when a work phase completes.

Durations come from ~/.pomo/config.yaml and can be overridden with the
flags below; out-of-range values are clamped, never rejected.

CONTROLS:
  space   start / pause
  r       reset
  s       settings panel
  d       dark / light theme
  m       sound on / off
  q       quit")]
#[command(version)]
pub struct Cli {
    /// Work phase length in minutes (clamped to 20-60)
    #[arg(short, long)]
    pub work: Option<u32>,

    /// Break phase length in minutes (clamped to 5-30)
    #[arg(short, long)]
    pub r#break: Option<u32>,

    /// Number of work sessions (minimum 1)
    #[arg(short, long)]
    pub sessions: Option<u32>,

    /// Disable the sound cue and desktop notification
    #[arg(long)]
    pub no_sound: bool,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Path to an alternate config file
    #[arg(short, long, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli =
            Cli::parse_from(["pomo", "--work", "40", "--break", "10", "--sessions", "2"]);

        assert_eq!(cli.work, Some(40));
        assert_eq!(cli.r#break, Some(10));
        assert_eq!(cli.sessions, Some(2));
        assert!(!cli.no_sound);
        assert!(!cli.light);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["pomo"]);

        assert_eq!(cli.work, None);
        assert_eq!(cli.r#break, None);
        assert_eq!(cli.sessions, None);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["pomo", "--no-sound", "--light"]);

        assert!(cli.no_sound);
        assert!(cli.light);
    }
}
