//! Legal case domain model.
//!
//! # Responsibility
//! - Define the case record tracked by the registry.
//! - Parse textual deadlines with the single canonical date format.
//! - Keep attached document IDs unique.
//!
//! # Invariants
//! - `case_id` is fixed at construction; no setter exists.
//! - `documents` never contains the same ID twice.
//! - `deadline` is a calendar date; overdue checks treat it as midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unique case identifier used as the registry key.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CaseId = String;

/// Canonical textual deadline format (`YYYY-MM-DD`).
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Highest urgency rank.
pub const PRIORITY_HIGH: u8 = 1;
/// Middle urgency rank.
pub const PRIORITY_MEDIUM: u8 = 2;
/// Lowest urgency rank.
pub const PRIORITY_LOW: u8 = 3;

// chrono alone accepts signs, padding spaces and short years for `%Y`.
static DEADLINE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid deadline shape regex")
});

/// Deadline text did not match [`DEADLINE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineFormatError {
    /// Raw input as given by the caller.
    pub value: String,
    /// `None` when the text was rejected before reaching the date parser.
    source: Option<chrono::ParseError>,
}

impl Display for DeadlineFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "invalid deadline `{}`: {source} (expected YYYY-MM-DD)",
                self.value
            ),
            None => write!(f, "invalid deadline `{}` (expected YYYY-MM-DD)", self.value),
        }
    }
}

impl Error for DeadlineFormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}

/// Parses a deadline string in the canonical `YYYY-MM-DD` format.
///
/// The year must be exactly four ASCII digits; month and day take one or two.
pub fn parse_deadline(value: &str) -> Result<NaiveDate, DeadlineFormatError> {
    if !DEADLINE_SHAPE_RE.is_match(value) {
        return Err(DeadlineFormatError {
            value: value.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(value, DEADLINE_FORMAT).map_err(|source| DeadlineFormatError {
        value: value.to_string(),
        source: Some(source),
    })
}

/// One legal matter with scheduling metadata and attached documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalCase {
    case_id: CaseId,
    /// Client display name, free text.
    pub client_name: String,
    /// Free-text category, e.g. `Contract Dispute`.
    pub case_type: String,
    /// Urgency rank, 1 (high) to 3 (low).
    pub priority: u8,
    /// Date by which the case requires action.
    pub deadline: NaiveDate,
    documents: BTreeSet<String>,
}

impl LegalCase {
    /// Creates a case, parsing `deadline` as `YYYY-MM-DD`.
    ///
    /// # Errors
    /// - Returns [`DeadlineFormatError`] when `deadline` does not match the
    ///   canonical format or names a non-existent date.
    pub fn new(
        case_id: impl Into<CaseId>,
        client_name: impl Into<String>,
        case_type: impl Into<String>,
        priority: u8,
        deadline: &str,
    ) -> Result<Self, DeadlineFormatError> {
        let deadline = parse_deadline(deadline)?;
        Ok(Self::with_deadline(
            case_id,
            client_name,
            case_type,
            priority,
            deadline,
        ))
    }

    /// Creates a case from an already-parsed deadline.
    ///
    /// The document set starts empty.
    pub fn with_deadline(
        case_id: impl Into<CaseId>,
        client_name: impl Into<String>,
        case_type: impl Into<String>,
        priority: u8,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            client_name: client_name.into(),
            case_type: case_type.into(),
            priority,
            deadline,
            documents: BTreeSet::new(),
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Attached document IDs in ascending order.
    pub fn documents(&self) -> &BTreeSet<String> {
        &self.documents
    }

    pub fn has_document(&self, doc_id: &str) -> bool {
        self.documents.contains(doc_id)
    }

    /// Attaches a document ID.
    ///
    /// Returns `true` when the ID was not attached before. Adding an existing
    /// ID is a no-op.
    pub fn add_document(&mut self, doc_id: impl Into<String>) -> bool {
        let doc_id = doc_id.into();
        let inserted = self.documents.insert(doc_id.clone());
        if inserted {
            info!(
                "event=document_add module=model status=ok case_id={} doc_id={}",
                self.case_id, doc_id
            );
        } else {
            debug!(
                "event=document_add module=model status=noop case_id={} doc_id={}",
                self.case_id, doc_id
            );
        }
        inserted
    }

    /// Returns whether the deadline (at midnight) is strictly before `now`.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        self.deadline.and_time(NaiveTime::MIN) < now
    }
}

impl Display for LegalCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Case {}: {} ({}), Priority: {}, Deadline: {}",
            self.case_id, self.client_name, self.case_type, self.priority, self.deadline
        )
    }
}
