use std::{fmt, str::FromStr};

use crate::ModelError;

/// Registrar endpoint selector.
///
/// `Production` talks to the live account, `Sandbox` to the operational test environment (OTE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    /// JSON-RPC endpoint for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.domrobot.com/jsonrpc/",
            Environment::Sandbox => "https://api.ote.domrobot.com/jsonrpc/",
        }
    }

    /// Short name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "LIVE",
            Environment::Sandbox => "OTE",
        }
    }
}

impl FromStr for Environment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "live" | "production" => Ok(Environment::Production),
            "ote" | "sandbox" => Ok(Environment::Sandbox),
            _ => Err(ModelError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
