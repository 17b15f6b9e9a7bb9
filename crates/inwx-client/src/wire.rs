use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

pub const METHOD_LOGIN: &str = "account.login";
pub const METHOD_DOMAIN_LIST: &str = "domain.list";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub method: &'a str,
    pub params: P,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<R> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(rename = "resData")]
    pub res_data: Option<R>,
}

impl<R> RpcResponse<R> {
    /// 1xxx codes are successes, everything else is an error.
    pub fn is_success(&self) -> bool {
        (1000..2000).contains(&self.code)
    }
}

#[derive(Debug, Serialize)]
pub struct LoginParams<'a> {
    pub user: &'a str,
    pub pass: &'a str,
    pub lang: &'a str,
}

#[derive(Debug, Default, Serialize)]
pub struct DomainListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagelimit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DomainListData {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub domain: Vec<WireDomain>,
}

#[derive(Debug, Deserialize)]
pub struct WireDomain {
    pub domain: String,
    #[serde(rename = "exDate")]
    pub ex_date: Option<String>,
}

/// Parse an expiration date as sent by the API (RFC 3339 or `YYYY-MM-DD HH:MM:SS` in UTC).
pub fn parse_ex_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let t_sep = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, &spaced)
        .or_else(|_| PrimitiveDateTime::parse(raw, &t_sep))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
