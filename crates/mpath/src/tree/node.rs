//! Concrete record type carrying an opaque payload

use crate::tree::{Record, RecordId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for a materialized path; most hierarchies are shallow
pub type Path = SmallVec<[RecordId; 8]>;

/// A single record, both as flat input and as a node of the built tree
///
/// Generic over the payload `D`, which the builder never looks at. Placeholder
/// nodes get `D::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<D> {
    /// The record's id
    pub id: RecordId,
    /// Sibling ordering hint
    #[serde(default)]
    pub position: i64,
    /// Ancestor ids, root first, ending with `id`
    #[serde(default)]
    pub path: Path,
    /// Children attached by the builder
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node<D>>,
    /// Caller-defined attributes
    #[serde(flatten)]
    pub data: D,
}

impl<D> Node<D> {
    /// Create a new node with no children
    pub fn new(id: u64, position: i64, path: &[u64], data: D) -> Self {
        Self {
            id: RecordId(id),
            position,
            path: path.iter().copied().map(RecordId).collect(),
            children: Vec::new(),
            data,
        }
    }

    /// Attach a child, builder style
    pub fn with_child(mut self, child: Node<D>) -> Self {
        self.children.push(child);
        self
    }

    /// Returns true if no children were attached
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<D: Default> Node<D> {
    /// Create a new node with default data
    pub fn new_default(id: u64, position: i64, path: &[u64]) -> Self {
        Self::new(id, position, path, D::default())
    }
}

impl<D: Clone + Default> Record for Node<D> {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn set_position(&mut self, position: i64) {
        self.position = position;
    }

    fn path(&self) -> &[RecordId] {
        &self.path
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}

impl<D: fmt::Display> fmt::Display for Node<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{} - {}", self.id, self.position, self.data)
    }
}
