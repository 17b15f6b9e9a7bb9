use time::OffsetDateTime;

use crate::DomainName;

/// One registered domain with its expiration instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: DomainName,
    pub expires_at: OffsetDateTime,
}

impl DomainRecord {
    pub fn new(name: impl Into<DomainName>, expires_at: OffsetDateTime) -> Self {
        Self {
            name: name.into(),
            expires_at,
        }
    }
}

/// Result of a single domain listing call.
///
/// `count` is the registrar's own figure and may differ from `domains.len()`
/// (the listing is a single page).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainList {
    pub count: u64,
    pub domains: Vec<DomainRecord>,
}
