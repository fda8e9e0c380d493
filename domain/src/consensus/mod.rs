//! Consensus over reviewer votes
//!
//! Independent reviewer votes on an edit are reduced to a [`VoteTally`], and
//! the tally is turned into an [`EditStatus`] and a settled
//! [`Classification`] by the functions in [`rule`].

pub mod classification;
pub mod rule;
pub mod status;
pub mod tally;

pub use classification::Classification;
pub use rule::{calculate_classification, calculate_status};
pub use status::EditStatus;
pub use tally::VoteTally;
