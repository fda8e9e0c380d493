//! Typed identifiers.
//!
//! Edit ids are revision ids issued by the wiki, so they are taken as-is
//! rather than generated here. The other ids are assigned by the store.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| DomainError::InvalidId(s.to_string()))
            }
        }
    };
}

numeric_id!(
    /// Revision id of an edit under review
    EditId
);
numeric_id!(
    /// Identifier of an edit group
    GroupId
);
numeric_id!(
    /// Identifier of a reviewer
    UserId
);
numeric_id!(
    /// Identifier of a recorded vote
    VoteId
);
