use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("exposition is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
