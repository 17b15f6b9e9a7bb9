use async_trait::async_trait;
use inwx_core::{CoreError, DomainSession, SessionFactory};
use inwx_model::{Credentials, DomainList};
use tracing::debug;

use crate::client::InwxClient;

/// Opens a fresh, logged-in [`InwxSession`] for every refresh.
#[derive(Debug, Clone, Default)]
pub struct InwxSessionFactory {
    endpoint: Option<String>,
    page_limit: Option<u32>,
}

impl InwxSessionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the credentials' environment and talk to `endpoint` instead.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Ask `domain.list` for up to `limit` records.
    pub fn with_page_limit(mut self, limit: Option<u32>) -> Self {
        self.page_limit = limit;
        self
    }
}

#[async_trait]
impl SessionFactory for InwxSessionFactory {
    type Session = InwxSession;

    async fn open(&self, credentials: &Credentials) -> Result<InwxSession, CoreError> {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| credentials.environment.base_url().to_string());
        debug!(%endpoint, environment = %credentials.environment, "opening registrar session");

        let client = InwxClient::new(endpoint).map_err(CoreError::auth)?;
        client
            .login(&credentials.username, &credentials.password)
            .await
            .map_err(CoreError::auth)?;

        Ok(InwxSession {
            client,
            page_limit: self.page_limit,
        })
    }
}

pub struct InwxSession {
    client: InwxClient,
    page_limit: Option<u32>,
}

#[async_trait]
impl DomainSession for InwxSession {
    async fn list_domains(&self) -> Result<DomainList, CoreError> {
        self.client
            .domain_list(self.page_limit)
            .await
            .map_err(CoreError::fetch)
    }
}
