//! Command-line and environment configuration.

use crate::domain::language::Language;
use crate::error::{Result, UssdError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "USSD menu gateway for loan and account self-service", long_about = None)]
pub struct Cli {
    /// Port the HTTP gateway listens on
    #[arg(long, env = "PORT", default_value_t = 8090)]
    pub port: u16,

    /// Service code the menu is dialled with
    #[arg(long, env = "USSD_CODE", default_value = "*183#")]
    pub ussd_code: String,

    /// Idle time after which a session expires, in milliseconds
    #[arg(long, env = "SESSION_TIMEOUT", default_value_t = 300_000)]
    pub session_timeout_ms: u64,

    /// Interval between expired-session sweeps, in milliseconds
    #[arg(long, env = "SESSION_SWEEP_INTERVAL", default_value_t = 60_000)]
    pub sweep_interval_ms: u64,

    /// Consecutive wrong PINs before an account is locked
    #[arg(long, env = "MAX_PIN_ATTEMPTS", default_value_t = 3,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pin_attempts: u32,

    /// Language used before a subscriber picks one (en, sw, so)
    #[arg(long, env = "DEFAULT_LANGUAGE", default_value = "en")]
    pub default_language: String,

    /// Currency label shown in front of amounts
    #[arg(long, env = "CURRENCY_LABEL", default_value = "KES")]
    pub currency: String,

    /// JSON file with subscriber records to seed the store with
    #[arg(long, env = "SUBSCRIBERS_FILE")]
    pub subscribers: Option<PathBuf>,

    /// Path to persistent database (optional). Requires the `storage-rocksdb` feature.
    #[arg(long, env = "DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

/// Settings the menu handlers consult on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    pub max_pin_attempts: u32,
    pub currency: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            max_pin_attempts: 3,
            currency: "KES".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub ussd_code: String,
    pub session_timeout: Duration,
    pub sweep_interval: Duration,
    pub default_language: Language,
    pub menu: MenuSettings,
    pub subscribers_file: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            ussd_code: "*183#".to_string(),
            session_timeout: Duration::from_millis(300_000),
            sweep_interval: Duration::from_millis(60_000),
            default_language: Language::English,
            menu: MenuSettings::default(),
            subscribers_file: None,
            db_path: None,
            log_json: false,
        }
    }
}

impl TryFrom<Cli> for ServiceConfig {
    type Error = UssdError;

    fn try_from(cli: Cli) -> Result<Self> {
        if cli.session_timeout_ms == 0 {
            return Err(UssdError::ConfigError(
                "session timeout must be greater than zero".into(),
            ));
        }
        if cli.sweep_interval_ms == 0 {
            return Err(UssdError::ConfigError(
                "sweep interval must be greater than zero".into(),
            ));
        }
        if cli.max_pin_attempts == 0 {
            return Err(UssdError::ConfigError(
                "max PIN attempts must be at least 1".into(),
            ));
        }
        if cli.currency.trim().is_empty() {
            return Err(UssdError::ConfigError("currency label must not be empty".into()));
        }

        Ok(Self {
            port: cli.port,
            ussd_code: cli.ussd_code,
            session_timeout: Duration::from_millis(cli.session_timeout_ms),
            sweep_interval: Duration::from_millis(cli.sweep_interval_ms),
            default_language: cli.default_language.parse()?,
            menu: MenuSettings {
                max_pin_attempts: cli.max_pin_attempts,
                currency: cli.currency,
            },
            subscribers_file: cli.subscribers,
            db_path: cli.db_path,
            log_json: cli.log_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses a full command line where `overrides` replace the baseline flags.
    fn parse(overrides: &[(&str, &str)]) -> Result<ServiceConfig> {
        let mut flags = vec![
            ("--port", "9000"),
            ("--session-timeout-ms", "1000"),
            ("--sweep-interval-ms", "500"),
            ("--max-pin-attempts", "3"),
            ("--default-language", "en"),
            ("--currency", "KES"),
        ];
        for &(flag, value) in overrides {
            match flags.iter_mut().find(|(f, _)| *f == flag) {
                Some(entry) => entry.1 = value,
                None => flags.push((flag, value)),
            }
        }
        let argv = std::iter::once("ussd-menu")
            .chain(flags.into_iter().flat_map(|(flag, value)| [flag, value]));
        ServiceConfig::try_from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8090);
        assert_eq!(config.ussd_code, "*183#");
        assert_eq!(config.session_timeout, Duration::from_secs(300));
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
        assert_eq!(config.menu.max_pin_attempts, 3);
        assert_eq!(config.default_language, Language::English);
    }

    #[test]
    fn test_cli_overrides() {
        let config = parse(&[("--default-language", "so"), ("--max-pin-attempts", "5")]).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.session_timeout, Duration::from_secs(1));
        assert_eq!(config.sweep_interval, Duration::from_millis(500));
        assert_eq!(config.default_language, Language::Somali);
        assert_eq!(config.menu.max_pin_attempts, 5);
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = parse(&[("--default-language", "fr")]).unwrap_err();
        assert!(matches!(err, UssdError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = parse(&[("--session-timeout-ms", "0")]).unwrap_err();
        assert!(matches!(err, UssdError::ConfigError(_)));
    }

    #[test]
    fn test_zero_attempts_is_a_parse_error() {
        let result = Cli::try_parse_from(["ussd-menu", "--max-pin-attempts", "0"]);
        assert!(result.is_err());
    }
}
