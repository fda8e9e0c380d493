//! Edits and edit groups

pub mod entities;

pub use entities::{Edit, EditGroup, EditReview};
