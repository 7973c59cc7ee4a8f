//! Case registry use-case service.
//!
//! # Responsibility
//! - Register cases and track the set of case types seen.
//! - Provide priority, overdue, summary and client-search queries.
//!
//! # Invariants
//! - A rejected `add_case` leaves both storage and `case_types` unchanged.
//! - `cases_by_priority` is sorted by deadline; equal deadlines keep
//!   insertion order.
//! - `case_summary` only contains types with at least one stored case.

use crate::model::legal_case::{CaseId, LegalCase};
use crate::repo::case_repo::{CaseRepository, InMemoryCaseRepository, RepoError};
use crate::search::client::search_by_client;
use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for registry use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A case with this ID is already registered.
    DuplicateCaseId(CaseId),
    /// No case with this ID is registered.
    CaseNotFound(CaseId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCaseId(id) => write!(f, "case {id} already exists"),
            Self::CaseNotFound(id) => write!(f, "case not found: {id}"),
        }
    }
}

impl Error for RegistryError {}

impl From<RepoError> for RegistryError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateCaseId(id) => Self::DuplicateCaseId(id),
        }
    }
}

/// In-memory collection of legal cases.
#[derive(Debug, Default)]
pub struct CaseRegistry<R: CaseRepository = InMemoryCaseRepository> {
    repo: R,
    case_types: BTreeSet<String>,
}

impl CaseRegistry<InMemoryCaseRepository> {
    /// Creates an empty registry over in-memory storage.
    pub fn new() -> Self {
        Self::with_repository(InMemoryCaseRepository::new())
    }
}

impl<R: CaseRepository> CaseRegistry<R> {
    /// Creates a registry using the provided repository implementation.
    ///
    /// Case types already present in `repo` are picked up.
    pub fn with_repository(repo: R) -> Self {
        let case_types = repo
            .list_cases()
            .into_iter()
            .map(|case| case.case_type.clone())
            .collect();
        Self { repo, case_types }
    }

    /// Registers a case.
    ///
    /// # Errors
    /// - Returns `RegistryError::DuplicateCaseId` when the ID is taken; the
    ///   registry is left unchanged.
    pub fn add_case(&mut self, case: LegalCase) -> Result<CaseId, RegistryError> {
        let case_type = case.case_type.clone();
        match self.repo.create_case(case) {
            Ok(id) => {
                self.case_types.insert(case_type);
                info!("event=case_add module=registry status=ok case_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=case_add module=registry status=rejected reason=\"{err}\"");
                Err(err.into())
            }
        }
    }

    pub fn get_case(&self, case_id: &str) -> Option<&LegalCase> {
        self.repo.get_case(case_id)
    }

    /// Attaches a document to a registered case.
    ///
    /// Returns `true` when the document was newly attached.
    pub fn add_document(
        &mut self,
        case_id: &str,
        doc_id: impl Into<String>,
    ) -> Result<bool, RegistryError> {
        let case = self
            .repo
            .get_case_mut(case_id)
            .ok_or_else(|| RegistryError::CaseNotFound(case_id.to_string()))?;
        Ok(case.add_document(doc_id))
    }

    /// All registered cases in insertion order.
    pub fn cases(&self) -> Vec<&LegalCase> {
        self.repo.list_cases()
    }

    /// Distinct case types seen so far, in ascending order.
    pub fn case_types(&self) -> &BTreeSet<String> {
        &self.case_types
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Cases with the given priority, earliest deadline first.
    pub fn cases_by_priority(&self, priority: u8) -> Vec<&LegalCase> {
        let mut matching: Vec<&LegalCase> = self
            .repo
            .list_cases()
            .into_iter()
            .filter(|case| case.priority == priority)
            .collect();
        // Stable sort: equal deadlines stay in insertion order.
        matching.sort_by_key(|case| case.deadline);
        matching
    }

    /// Cases whose deadline is strictly earlier than `now`.
    pub fn overdue_cases(&self, now: NaiveDateTime) -> Vec<&LegalCase> {
        self.repo
            .list_cases()
            .into_iter()
            .filter(|case| case.is_overdue_at(now))
            .collect()
    }

    /// Cases overdue as of the current local time.
    pub fn overdue_cases_now(&self) -> Vec<&LegalCase> {
        self.overdue_cases(Local::now().naive_local())
    }

    /// Number of stored cases per case type.
    pub fn case_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for case in self.repo.list_cases() {
            *summary.entry(case.case_type.clone()).or_insert(0) += 1;
        }
        summary
    }

    /// Cases whose client name contains `text`, ignoring case.
    pub fn search_by_client(&self, text: &str) -> Vec<&LegalCase> {
        search_by_client(self.repo.list_cases(), text)
    }
}
