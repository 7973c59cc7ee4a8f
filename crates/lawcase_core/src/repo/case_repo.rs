//! Case repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed insert/lookup APIs over stored cases.
//! - Preserve insertion order for deterministic list results.
//!
//! # Invariants
//! - `create_case` rejects an existing `CaseId` without touching storage.
//! - `list_cases` returns cases in the order they were created.

use crate::model::legal_case::{CaseId, LegalCase};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for case storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateCaseId(CaseId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCaseId(id) => write!(f, "case already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for case storage.
pub trait CaseRepository {
    fn create_case(&mut self, case: LegalCase) -> RepoResult<CaseId>;
    fn get_case(&self, id: &str) -> Option<&LegalCase>;
    /// Mutable access for document attachment; the key itself stays fixed.
    fn get_case_mut(&mut self, id: &str) -> Option<&mut LegalCase>;
    fn list_cases(&self) -> Vec<&LegalCase>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local case storage.
///
/// Cases live in a vector to keep insertion order; the map indexes
/// `CaseId -> position`.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: Vec<LegalCase>,
    index: HashMap<CaseId, usize>,
}

impl InMemoryCaseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn create_case(&mut self, case: LegalCase) -> RepoResult<CaseId> {
        if self.index.contains_key(case.case_id()) {
            return Err(RepoError::DuplicateCaseId(case.case_id().to_string()));
        }

        let id = case.case_id().to_string();
        self.index.insert(id.clone(), self.cases.len());
        self.cases.push(case);
        Ok(id)
    }

    fn get_case(&self, id: &str) -> Option<&LegalCase> {
        self.index.get(id).map(|&position| &self.cases[position])
    }

    fn get_case_mut(&mut self, id: &str) -> Option<&mut LegalCase> {
        let position = *self.index.get(id)?;
        self.cases.get_mut(position)
    }

    fn list_cases(&self) -> Vec<&LegalCase> {
        self.cases.iter().collect()
    }

    fn len(&self) -> usize {
        self.cases.len()
    }
}
