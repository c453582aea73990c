//! Typed IDs for type-safe references to remote-ledger entities.
//!
//! The remote expense-sharing service assigns integer identifiers; wrapping
//! them prevents accidentally passing a `ParticipantId` where a `GroupId` is
//! expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers over externally-assigned integers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw remote-service identifier.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(
    ParticipantId,
    "Unique identifier for a participant within a group."
);
typed_id!(GroupId, "Unique identifier for a remote expense group.");
typed_id!(
    ExpenseId,
    "Opaque identifier assigned by the remote ledger to a created expense."
);
