//! Machine-learning training data

pub mod entities;

pub use entities::{PageInfo, Revision, RevisionAuthor, TrainingData, TrainingPayload};
