//! Domain model for legal case tracking.
//!
//! # Responsibility
//! - Define the canonical case record used by registry and search logic.
//!
//! # Invariants
//! - Every case is identified by a `CaseId` that never changes after creation.
//! - Deadlines are calendar dates without a time-of-day component.

pub mod legal_case;
