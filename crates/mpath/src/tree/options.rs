//! Configuration options for the tree builder.
//!
//! `BuildOptions` controls what happens to records that belong to another
//! root and whether child lists are ordered by position once the tree is built.

use serde::{Deserialize, Serialize};

/// What to do with a record whose path does not pass through the established root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedRootPolicy {
    /// Leave the record out of the tree without failing.
    ///
    /// Skipped records are reported in the build summary and logged, but they
    /// are lost from the tree.
    #[default]
    Skip,
    /// Fail the build with `BuildError::MixedRoot`.
    Reject,
}

/// Configuration options for a build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Handling of records from a different root tree.
    pub mixed_roots: MixedRootPolicy,

    /// Stable-sort every child list by position after construction.
    ///
    /// Off by default: children stay in the order they were first attached.
    pub sort_by_position: bool,
}

impl BuildOptions {
    /// Create new build options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mixed root policy.
    pub fn mixed_roots(mut self, policy: MixedRootPolicy) -> Self {
        self.mixed_roots = policy;
        self
    }

    /// Enable or disable sorting children by position.
    pub fn sort_by_position(mut self, sort: bool) -> Self {
        self.sort_by_position = sort;
        self
    }

    /// Shorthand for `mixed_roots(MixedRootPolicy::Reject)`.
    pub fn strict(self) -> Self {
        self.mixed_roots(MixedRootPolicy::Reject)
    }
}
