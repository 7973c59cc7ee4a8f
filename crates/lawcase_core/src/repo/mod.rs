//! Repository layer abstractions and in-memory storage.
//!
//! # Responsibility
//! - Define the storage contract the registry service is written against.
//! - Keep key-uniqueness and ordering details out of the service layer.
//!
//! # Invariants
//! - A repository never holds two cases with the same `CaseId`.
//! - Rejected writes leave storage unchanged.

pub mod case_repo;
