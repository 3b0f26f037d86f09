//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use meetstatus_core::{AllDayMode, Locale};

/// Answers "is the calendar owner in a meeting right now?".
#[derive(Debug, Parser)]
#[command(name = "meetstatus", version, about)]
pub struct Cli {
    /// Path to the config file (default: $XDG_CONFIG_HOME/meetstatus/config.toml).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Calendar to query (overrides the config file).
    #[arg(long)]
    pub calendar_id: Option<String>,

    /// Path to a service-account JSON key file.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_file: Option<PathBuf>,

    /// Service-account email (split credential shape).
    #[arg(long, env = "GOOGLE_CLIENT_EMAIL")]
    pub client_email: Option<String>,

    /// PEM private key, literal or with escaped newlines (split shape).
    #[arg(long, env = "GOOGLE_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Token endpoint override.
    #[arg(long, env = "GOOGLE_TOKEN_URI")]
    pub token_uri: Option<String>,

    /// Message phrasing.
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// How all-day events are anchored: full local day or full UTC day.
    #[arg(long, value_enum)]
    pub all_day_mode: Option<AllDayModeArg>,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// CLI mirror of [`Locale`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    Ja,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ja => Locale::Ja,
            LocaleArg::En => Locale::En,
        }
    }
}

/// CLI mirror of [`AllDayMode`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AllDayModeArg {
    Local,
    Utc,
}

impl From<AllDayModeArg> for AllDayMode {
    fn from(arg: AllDayModeArg) -> Self {
        match arg {
            AllDayModeArg::Local => AllDayMode::Local,
            AllDayModeArg::Utc => AllDayMode::Utc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "meetstatus",
            "--calendar-id",
            "team@example.com",
            "--locale",
            "en",
            "--all-day-mode",
            "utc",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.calendar_id.as_deref(), Some("team@example.com"));
        assert!(matches!(cli.locale, Some(LocaleArg::En)));
        assert!(matches!(cli.all_day_mode, Some(AllDayModeArg::Utc)));
        assert!(cli.debug);
    }

    #[test]
    fn cli_defaults_to_no_overrides() {
        let cli = Cli::try_parse_from(["meetstatus"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.calendar_id.is_none());
        assert!(!cli.debug);
        assert!(!cli.json_logs);
    }
}
