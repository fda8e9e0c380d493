//! Reviewer votes

pub mod entities;

pub use entities::{NewVote, UserClassification, tally_votes};
