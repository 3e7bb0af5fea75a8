//! Tree reconstruction from materialized paths
//!
//! Records carry their own ancestor chain (root first, ending in their own id)
//! and a sibling position. This module turns a flat, unordered collection of
//! such records into a single rooted tree, synthesizing placeholder nodes for
//! ancestors that are referenced in paths but missing from the collection.

mod builder;
mod error;
mod id;
mod node;
mod options;
mod traits;
mod traversal;

pub use builder::{
    build_tree, locate_or_create, resolve_root, walk_path, BuildSummary, TreeBuilder,
};
pub use error::BuildError;
pub use id::{path_of, RecordId};
pub use node::{Node, Path};
pub use options::{BuildOptions, MixedRootPolicy};
pub use traits::{Record, RecordIndex, Records};
pub use traversal::{RecordWalker, TraversalOrder, TreeTraversal};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        build_tree, BuildError, BuildOptions, BuildSummary, MixedRootPolicy, Node, Record,
        RecordId, RecordIndex, Records, TraversalOrder, TreeBuilder, TreeTraversal,
    };
}
