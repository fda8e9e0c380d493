//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`] - typed identifiers for edits, groups, users and votes
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod ids;
