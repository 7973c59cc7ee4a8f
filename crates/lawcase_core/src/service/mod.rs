//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into registry-level APIs.
//! - Keep callers decoupled from storage details.

pub mod case_registry;
