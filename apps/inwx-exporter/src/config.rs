use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use inwx_model::{Credentials, Environment, ModelError};
use inwx_observe::{LoggerConfig, LoggerError, LoggerFormat};
use thiserror::Error;

pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: u16 = 9412;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}: expected a port number")]
    InvalidPort(String),

    #[error(transparent)]
    Environment(#[from] ModelError),

    #[error(transparent)]
    Logger(#[from] LoggerError),
}

#[derive(Debug, Parser)]
#[command(name = "inwx-exporter", version, about = "Prometheus exporter for INWX domain expiration")]
pub struct Cli {
    /// INWX system: LIVE or OTE.
    #[arg(long, env = "INWX_SYSTEM", default_value = "OTE")]
    pub system: String,

    /// INWX account username.
    #[arg(long, env = "INWX_USERNAME", default_value = "")]
    pub username: String,

    /// INWX account password.
    #[arg(long, env = "INWX_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Page size requested from domain.list (registrar default when unset).
    #[arg(long, env = "INWX_PAGE_LIMIT")]
    pub page_limit: Option<u32>,

    /// Log filter directive.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format: text or json.
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

/// Fully resolved startup configuration.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub credentials: Credentials,
    pub page_limit: Option<u32>,
    pub listen: SocketAddr,
    pub logger: LoggerConfig,
}

impl ExporterConfig {
    /// Combine parsed flags with the raw `PORT` variable.
    pub fn resolve(cli: Cli, port: Option<String>) -> Result<Self, ConfigError> {
        let environment: Environment = cli.system.parse()?;
        let port = parse_port(port.as_deref())?;
        let logger = LoggerConfig::from_flags(&cli.log_level, &cli.log_format)?;

        Ok(Self {
            credentials: Credentials::new(environment, cli.username, cli.password),
            page_limit: cli.page_limit,
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            logger,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(Cli::parse(), std::env::var(PORT_ENV).ok())
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["inwx-exporter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn port_defaults_and_overrides() {
        assert_eq!(parse_port(None).unwrap(), 9412);
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert!(matches!(
            parse_port(Some("http")),
            Err(ConfigError::InvalidPort(v)) if v == "http"
        ));
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn resolves_flags() {
        let cfg = ExporterConfig::resolve(
            cli(&[
                "--system",
                "LIVE",
                "--username",
                "alice",
                "--password",
                "s3cret",
                "--page-limit",
                "500",
                "--log-format",
                "json",
            ]),
            Some("9000".into()),
        )
        .unwrap();

        assert_eq!(cfg.credentials.environment, Environment::Production);
        assert_eq!(cfg.credentials.username, "alice");
        assert_eq!(cfg.credentials.password, "s3cret");
        assert_eq!(cfg.page_limit, Some(500));
        assert_eq!(cfg.listen.port(), 9000);
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
        assert_eq!(cfg.logger.level, "info");
    }

    #[test]
    fn unknown_system_is_rejected() {
        let err = ExporterConfig::resolve(cli(&["--system", "PROD2"]), None).unwrap_err();
        assert!(matches!(err, ConfigError::Environment(_)));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err =
            ExporterConfig::resolve(cli(&["--log-level", "inwx=notalevel"]), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Logger(LoggerError::InvalidLogLevel(v)) if v == "inwx=notalevel"
        ));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ExporterConfig::resolve(cli(&["--system", "OTE"]), Some("abc".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
