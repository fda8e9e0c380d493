//! Reviewers

pub mod entities;

pub use entities::{User, UserAccuracy};
