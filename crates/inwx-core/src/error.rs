use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("registrar login failed: {0}")]
    Auth(#[source] BoxError),

    #[error("domain listing failed: {0}")]
    Fetch(#[source] BoxError),
}

impl CoreError {
    pub fn auth(e: impl Into<BoxError>) -> Self {
        CoreError::Auth(e.into())
    }

    pub fn fetch(e: impl Into<BoxError>) -> Self {
        CoreError::Fetch(e.into())
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, CoreError::Auth(_))
    }
}
