use inwx_model::{DomainList, DomainRecord};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::wire::{
    DomainListData, DomainListParams, LoginParams, METHOD_DOMAIN_LIST, METHOD_LOGIN, RpcRequest,
    RpcResponse, parse_ex_date,
};

const USER_AGENT: &str = concat!("inwx-exporter/", env!("CARGO_PKG_VERSION"));

/// JSON-RPC client bound to one endpoint.
///
/// Holds its own cookie jar, so a successful [`login`](Self::login) authenticates every later call
/// made through the same instance.
#[derive(Debug, Clone)]
pub struct InwxClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InwxClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// `account.login`; credentials are sent as given.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let params = LoginParams {
            user: username,
            pass: password,
            lang: "en",
        };
        self.call::<_, serde_json::Value>(METHOD_LOGIN, params).await?;
        debug!(endpoint = %self.endpoint, "logged in");
        Ok(())
    }

    /// `domain.list`, first page only.
    ///
    /// Records without an expiration date are skipped; `count` is passed through untouched.
    pub async fn domain_list(&self, page_limit: Option<u32>) -> Result<DomainList, ClientError> {
        let params = DomainListParams {
            pagelimit: page_limit,
        };
        let data: DomainListData = self
            .call(METHOD_DOMAIN_LIST, params)
            .await?
            .unwrap_or_default();

        let mut domains = Vec::with_capacity(data.domain.len());
        for wire in data.domain {
            let Some(raw) = wire.ex_date.as_deref() else {
                warn!(domain = %wire.domain, "domain has no expiration date, skipping");
                continue;
            };
            let expires_at = parse_ex_date(raw).ok_or_else(|| {
                ClientError::InvalidResponse(format!(
                    "unparsable exDate {raw:?} for domain {}",
                    wire.domain
                ))
            })?;
            domains.push(DomainRecord::new(wire.domain, expires_at));
        }

        debug!(count = data.count, listed = domains.len(), "domain list fetched");
        Ok(DomainList {
            count: data.count,
            domains,
        })
    }

    async fn call<P, R>(&self, method: &'static str, params: P) -> Result<Option<R>, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = RpcRequest { method, params };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: RpcResponse<R> = serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!(
                "failed to parse {method} response: {e}, body: {body}"
            ))
        })?;

        if !envelope.is_success() {
            return Err(ClientError::Rejected {
                method,
                code: envelope.code,
                msg: envelope.msg,
            });
        }
        Ok(envelope.res_data)
    }
}
