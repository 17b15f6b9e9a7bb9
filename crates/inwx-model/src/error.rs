use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid environment: {0} (expected: LIVE|OTE)")]
    InvalidEnvironment(String),
}
