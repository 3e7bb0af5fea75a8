//! Record identifiers

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Unique identifier of a record
///
/// Zero is reserved: a root slot whose id is [`RecordId::UNSET`] has not been
/// resolved yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// The placeholder id of a root that has not been established
    pub const UNSET: RecordId = RecordId(0);

    /// Create a new RecordId from a u64
    pub const fn new(id: u64) -> Self {
        RecordId(id)
    }

    /// Get the inner u64 value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true for the reserved zero id
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Convert a slice of raw ids into a path
pub fn path_of(ids: &[u64]) -> Vec<RecordId> {
    ids.iter().copied().map(RecordId).collect()
}
