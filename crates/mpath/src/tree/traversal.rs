//! Walking, searching and ordering a built tree

use crate::tree::{Record, RecordId};
use std::collections::VecDeque;
use std::fmt::Write;

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing traversal and search over a record and its descendants
///
/// This trait is automatically implemented for all types that implement `Record`.
pub trait TreeTraversal: Record {
    /// Walk the tree below and including `self`, yielding `(depth, node)`
    fn walk(&self, order: TraversalOrder) -> RecordWalker<'_, Self> {
        RecordWalker::new(self, order)
    }

    /// Count this node and all its descendants
    fn node_count(&self) -> usize {
        self.walk(TraversalOrder::PreOrder).count()
    }

    /// Ids in pre-order
    fn ids(&self) -> Vec<RecordId> {
        self.walk(TraversalOrder::PreOrder)
            .map(|(_, node)| node.id())
            .collect()
    }

    /// Find a node by id
    fn find_node(&self, id: RecordId) -> Option<&Self> {
        self.walk(TraversalOrder::PreOrder)
            .map(|(_, node)| node)
            .find(|node| node.id() == id)
    }

    /// Find a node by id for modification
    fn find_node_mut(&mut self, id: RecordId) -> Option<&mut Self> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children_mut().iter_mut().rev());
        }
        None
    }

    /// Depth of the node with `id` (self = 0)
    fn depth_of(&self, id: RecordId) -> Option<usize> {
        self.walk(TraversalOrder::PreOrder)
            .find(|(_, node)| node.id() == id)
            .map(|(depth, _)| depth)
    }

    /// All nodes without children
    fn leaves(&self) -> Vec<&Self> {
        self.walk(TraversalOrder::PreOrder)
            .map(|(_, node)| node)
            .filter(|node| node.children().is_empty())
            .collect()
    }

    /// Stable-sort every child list by position
    fn sort_by_position(&mut self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let children = node.children_mut();
            children.sort_by_key(|child| child.position());
            stack.extend(children.iter_mut());
        }
    }

    /// Render an indented outline, one `id @position` line per node
    fn outline(&self) -> String {
        let mut out = String::new();
        for (depth, node) in self.walk(TraversalOrder::PreOrder) {
            let _ = writeln!(
                out,
                "{}{} @{}",
                "  ".repeat(depth),
                node.id(),
                node.position()
            );
        }
        out
    }
}

// Blanket implementation for all Record types
impl<R: Record> TreeTraversal for R {}

/// Iterator over a record tree in a given order
pub struct RecordWalker<'a, R> {
    order: TraversalOrder,
    /// Pending nodes; used as a queue for breadth-first
    pending: VecDeque<(usize, &'a R)>,
    /// Nodes whose children were already pushed (post-order only)
    expanded: Vec<bool>,
}

impl<'a, R: Record> RecordWalker<'a, R> {
    /// Create a new walker starting from `start`
    pub fn new(start: &'a R, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back((0, start));
        Self {
            order,
            pending,
            expanded: vec![false],
        }
    }

    fn next_preorder(&mut self) -> Option<(usize, &'a R)> {
        let (depth, current) = self.pending.pop_back()?;

        // Add children in reverse order so they're popped in correct order
        for child in current.children().iter().rev() {
            self.pending.push_back((depth + 1, child));
        }

        Some((depth, current))
    }

    fn next_postorder(&mut self) -> Option<(usize, &'a R)> {
        while let Some(&(depth, current)) = self.pending.back() {
            if self.expanded.last().copied().unwrap_or(false) {
                self.pending.pop_back();
                self.expanded.pop();
                return Some((depth, current));
            }

            if let Some(flag) = self.expanded.last_mut() {
                *flag = true;
            }
            for child in current.children().iter().rev() {
                self.pending.push_back((depth + 1, child));
                self.expanded.push(false);
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<(usize, &'a R)> {
        let (depth, current) = self.pending.pop_front()?;

        for child in current.children() {
            self.pending.push_back((depth + 1, child));
        }

        Some((depth, current))
    }
}

impl<'a, R: Record> Iterator for RecordWalker<'a, R> {
    type Item = (usize, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
