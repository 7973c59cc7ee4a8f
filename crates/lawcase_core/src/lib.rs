//! Core domain logic for legal case tracking.
//! This crate is the single source of truth for case registry invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::legal_case::{
    parse_deadline, CaseId, DeadlineFormatError, LegalCase, DEADLINE_FORMAT, PRIORITY_HIGH,
    PRIORITY_LOW, PRIORITY_MEDIUM,
};
pub use repo::case_repo::{CaseRepository, InMemoryCaseRepository, RepoError, RepoResult};
pub use search::client::{search_by_client, ClientQuery};
pub use service::case_registry::{CaseRegistry, RegistryError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
