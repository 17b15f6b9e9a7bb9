use std::io::IsTerminal;

use crate::logger::{error::LoggerError, format::LoggerFormat, log::mk_filter};

/// Log output settings taken from `--log-level` / `--log-format`.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `info` or `info,inwx_client=debug`.
    pub level: String,
    /// ANSI colours for text output; off when stdout is not a terminal.
    pub use_color: bool,
}

impl LoggerConfig {
    /// Validate raw flag values up front so a bad directive fails before anything else starts.
    pub fn from_flags(level: &str, format: &str) -> Result<Self, LoggerError> {
        mk_filter(level)?;
        Ok(Self {
            format: format.parse()?,
            level: level.trim().to_string(),
            ..Default::default()
        })
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            use_color: std::io::stdout().is_terminal(),
        }
    }
}
