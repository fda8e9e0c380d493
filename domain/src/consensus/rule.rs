//! The consensus rule.
//!
//! These two functions are the only place where a vote tally is turned into a
//! status or a settled classification. Every caller (vote gating, work
//! selection, training-data reconciliation, statistics, exports) goes through
//! them.
//!
//! # Rule
//!
//! With `sum = c + v + s` and `max = max(c, v, s)`:
//!
//! - status: `sum == 0` → not started, `max >= required` → done, else partial
//! - classification (only once `max >= required`, otherwise unknown):
//!   1. `2s > sum` → skip
//!   2. `c >= 3v` → constructive
//!   3. `v >= 3c` → vandalism
//!   4. otherwise unknown
//!
//! An edit can be done while its classification is still unknown: the
//! required number of votes was reached but without a 3:1 majority.

use super::classification::Classification;
use super::status::EditStatus;
use super::tally::VoteTally;

/// Progress of an edit towards its required vote count
pub fn calculate_status(tally: &VoteTally, required: u32) -> EditStatus {
    if tally.sum() == 0 {
        EditStatus::NotStarted
    } else if tally.max() >= required {
        EditStatus::Done
    } else {
        EditStatus::Partial
    }
}

/// Settled classification of an edit
pub fn calculate_classification(tally: &VoteTally, required: u32) -> Classification {
    if tally.max() < required {
        return Classification::Unknown;
    }

    let c = u64::from(tally.constructive);
    let v = u64::from(tally.vandalism);
    let s = u64::from(tally.skip);
    let sum = c + v + s;

    if 2 * s > sum {
        Classification::Skip
    } else if c >= 3 * v {
        Classification::Constructive
    } else if v >= 3 * c {
        Classification::Vandalism
    } else {
        Classification::Unknown
    }
}
