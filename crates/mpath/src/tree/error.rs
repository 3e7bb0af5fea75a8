use derive_more::Display;

use crate::tree::RecordId;

/// Reasons a build can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BuildError {
    /// No id on the record's path exists in the flat collection
    #[display(fmt = "no root for path for record {}", record)]
    RootNotFound {
        /// The record whose path could not be anchored
        record: RecordId,
    },

    /// The record descends from a different root than the established one
    ///
    /// Only raised under [`MixedRootPolicy::Reject`](crate::tree::MixedRootPolicy::Reject).
    #[display(fmt = "record {} does not descend from root {}", record, root)]
    MixedRoot {
        /// The offending record
        record: RecordId,
        /// The root the tree was already anchored at
        root: RecordId,
    },
}

impl BuildError {
    /// The id of the record that caused the failure
    pub fn record(&self) -> RecordId {
        match *self {
            BuildError::RootNotFound { record } | BuildError::MixedRoot { record, .. } => record,
        }
    }
}

impl std::error::Error for BuildError {}
