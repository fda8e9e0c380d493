//! Vote tally for a single edit

use super::classification::Classification;
use super::rule::{calculate_classification, calculate_status};
use super::status::EditStatus;
use serde::{Deserialize, Serialize};

/// Per-class vote counts for one edit.
///
/// Tallies are always derived from the vote log and never stored.
///
/// # Example
///
/// ```
/// use reviewng_domain::{Classification, EditStatus, VoteTally};
///
/// let tally = VoteTally::from_classifications([
///     Classification::Constructive,
///     Classification::Constructive,
///     Classification::Constructive,
///     Classification::Vandalism,
/// ]);
/// assert_eq!(tally.status(3), EditStatus::Done);
/// assert_eq!(tally.classification(3), Classification::Constructive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub constructive: u32,
    pub vandalism: u32,
    pub skip: u32,
}

impl VoteTally {
    pub fn new(constructive: u32, vandalism: u32, skip: u32) -> Self {
        Self {
            constructive,
            vandalism,
            skip,
        }
    }

    /// Count a sequence of vote classifications.
    ///
    /// `Unknown` entries are not votes and are ignored.
    pub fn from_classifications(votes: impl IntoIterator<Item = Classification>) -> Self {
        votes.into_iter().fold(Self::default(), |mut tally, c| {
            tally.record(c);
            tally
        })
    }

    /// Add one vote to the tally
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Constructive => self.constructive += 1,
            Classification::Vandalism => self.vandalism += 1,
            Classification::Skip => self.skip += 1,
            Classification::Unknown => {}
        }
    }

    /// Total number of votes
    pub fn sum(&self) -> u32 {
        self.constructive + self.vandalism + self.skip
    }

    /// Size of the largest class
    pub fn max(&self) -> u32 {
        self.constructive.max(self.vandalism).max(self.skip)
    }

    pub fn status(&self, required: u32) -> EditStatus {
        calculate_status(self, required)
    }

    pub fn classification(&self, required: u32) -> Classification {
        calculate_classification(self, required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_votes_are_ignored() {
        let tally = VoteTally::from_classifications([
            Classification::Unknown,
            Classification::Skip,
            Classification::Vandalism,
        ]);
        assert_eq!(tally, VoteTally::new(0, 1, 1));
        assert_eq!(tally.sum(), 2);
        assert_eq!(tally.max(), 1);
    }
}
