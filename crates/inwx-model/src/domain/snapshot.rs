use time::OffsetDateTime;

use crate::{DomainList, DomainName};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours from `now` until `expires_at`; negative once expired.
pub fn hours_until(expires_at: OffsetDateTime, now: OffsetDateTime) -> f64 {
    (expires_at - now).as_seconds_f64() / SECONDS_PER_HOUR
}

/// Remaining lifetime of a single domain.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainExpiry {
    pub domain: DomainName,
    pub hours_left: f64,
}

/// Complete result of one refresh cycle.
///
/// Replaces the previous snapshot in full; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Domain count as reported by the registrar.
    pub count: u64,
    /// Per-domain hours left, in listing order.
    pub entries: Vec<DomainExpiry>,
}

impl Snapshot {
    /// Build a snapshot from a listing, measuring every entry against the same `now`.
    pub fn from_domain_list(list: &DomainList, now: OffsetDateTime) -> Self {
        let entries = list
            .domains
            .iter()
            .map(|record| DomainExpiry {
                domain: record.name.clone(),
                hours_left: hours_until(record.expires_at, now),
            })
            .collect();

        Self {
            count: list.count,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.domain.as_str())
    }
}
