use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} rejected with code {code}: {msg}")]
    Rejected {
        method: &'static str,
        code: i64,
        msg: String,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
