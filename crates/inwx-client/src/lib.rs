//! INWX DomRobot JSON-RPC client.
//!
//! [`InwxClient`] speaks the two calls the exporter needs (`account.login`, `domain.list`).
//! [`InwxSessionFactory`] adapts it to [`inwx_core::SessionFactory`].

mod client;
pub use client::InwxClient;

mod session;
pub use session::{InwxSession, InwxSessionFactory};

mod wire;

mod errors;
pub use errors::ClientError;
