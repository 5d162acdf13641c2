//! Store-allocated integer identifiers for board entities.

use super::{BoardDomainError, ParseIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Behaviour shared by the integer identifiers of every entity collection.
pub trait EntityId:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Wraps a raw identifier value.
    fn from_value(value: u64) -> Self;

    /// Returns the raw identifier value.
    fn value(self) -> u64;

    /// Allocates the identifier following the largest existing one.
    ///
    /// An empty collection starts at `1`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IdentifiersExhausted`] when the largest
    /// existing identifier is `u64::MAX`.
    fn allocate(existing: impl IntoIterator<Item = Self>) -> Result<Self, BoardDomainError> {
        let next = match existing.into_iter().map(Self::value).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(BoardDomainError::IdentifiersExhausted)?,
            None => 1,
        };
        Ok(Self::from_value(next))
    }
}

/// Parses a decimal identifier, tolerating surrounding whitespace.
fn parse_raw_id(value: &str) -> Result<u64, ParseIdError> {
    match value.trim().parse::<u64>() {
        Ok(raw) if raw > 0 => Ok(raw),
        _ => Err(ParseIdError(value.to_owned())),
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl EntityId for $name {
            fn from_value(value: u64) -> Self {
                Self(value)
            }

            fn value(self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                parse_raw_id(value).map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a task record.
    TaskId
);

entity_id!(
    /// Unique identifier for a project record.
    ProjectId
);
