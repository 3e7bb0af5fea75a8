//! Materialized Path Trees
//!
//! A library for rebuilding a hierarchy from a flat list of records, each of
//! which stores its own materialized path.
//!
//! # Core Concepts
//!
//! - **Record**: trait for anything with an id, a position, a path and children
//! - **Records**: a flat collection the builder reads from (slices, `Vec`, `RecordIndex`)
//! - **TreeBuilder**: anchors the tree at the shallowest ancestor present in the
//!   input and attaches every record below it
//!
//! # Example
//!
//! ```
//! use mpath::prelude::*;
//!
//! let records = vec![
//!     Node::new(4, 0, &[1, 2, 4], "item 4"),
//!     Node::new(2, 0, &[1, 2], "item 2"),
//!     Node::new(5, 1, &[1, 2, 5], "item 5"),
//! ];
//!
//! // Record 1 is absent, so the tree is rooted at 2
//! let tree = TreeBuilder::new(&records).build().expect("no root for input");
//! assert_eq!(tree.id, RecordId(2));
//!
//! for (depth, node) in tree.walk(TraversalOrder::PreOrder) {
//!     println!("{:indent$}{}", "", node, indent = depth * 2);
//! }
//! ```
//!
//! Records whose path does not pass through the established root are skipped
//! unless [`MixedRootPolicy::Reject`](tree::MixedRootPolicy::Reject) is set.

pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
}
