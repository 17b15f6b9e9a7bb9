//! Scrape endpoint for the exporter.
//!
//! ```rust,ignore
//! let listener = inwx_api::bind(([0, 0, 0, 0], 9412).into()).await?;
//! inwx_api::serve(listener, HttpApi::new(metrics).router()).await?;
//! ```

mod error;
pub use error::ApiError;

mod http;
pub use http::{HttpApi, METRICS_PATH, bind, serve};
