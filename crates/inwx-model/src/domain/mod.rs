mod environment;
pub use environment::Environment;

mod credentials;
pub use credentials::Credentials;

mod domain_record;
pub use domain_record::{DomainList, DomainRecord};

mod snapshot;
pub use snapshot::{DomainExpiry, Snapshot, hours_until};

/// Fully qualified domain name as reported by the registrar.
pub type DomainName = String;
