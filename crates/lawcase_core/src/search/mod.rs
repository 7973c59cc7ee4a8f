//! Case search entry points.
//!
//! # Responsibility
//! - Expose client-name lookup over stored cases.
//! - Keep matching rules (case folding, substring semantics) inside core.

pub mod client;
