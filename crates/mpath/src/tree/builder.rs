//! Reconstruction of a tree from records carrying materialized paths
//!
//! The driver visits every record of the flat collection once. The first record
//! anchors the tree at the shallowest ancestor on its path that exists in the
//! collection; every later record is attached under that root by walking the
//! rest of its path and creating missing nodes along the way.
//!
//! Records whose path does not pass through the established root are skipped
//! by default. That can silently drop data from mixed-root input; see
//! [`MixedRootPolicy`] and [`BuildSummary::skipped`].

use log::{debug, trace, warn};

use crate::tree::{
    BuildError, BuildOptions, MixedRootPolicy, Record, RecordId, Records, TreeTraversal,
};

/// How the sibling locator satisfied a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Located {
    /// The parent already had the child
    Existing,
    /// Copied from the flat collection
    Adopted,
    /// Synthesized because the id is missing from the collection
    Placeholder,
}

/// What a successful build did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// The root the tree is anchored at
    pub root: RecordId,
    /// Records whose path was walked under the root
    pub attached: usize,
    /// Nodes copied from the collection while walking paths
    pub adopted: Vec<RecordId>,
    /// Nodes synthesized for ids missing from the collection
    pub placeholders: Vec<RecordId>,
    /// Records left out because they descend from another root
    pub skipped: Vec<RecordId>,
}

/// Builds a tree from a flat collection
///
/// # Example
///
/// ```
/// use mpath::prelude::*;
///
/// let records = vec![
///     Node::new(1, 0, &[1], "root"),
///     Node::new(2, 0, &[1, 2], "child"),
/// ];
///
/// let tree = TreeBuilder::new(&records).build().unwrap();
/// assert_eq!(tree.id, RecordId(1));
/// assert_eq!(tree.children[0].data, "child");
/// ```
pub struct TreeBuilder<'c, C: Records + ?Sized> {
    collection: &'c C,
    options: BuildOptions,
}

impl<'c, C: Records + ?Sized> TreeBuilder<'c, C> {
    /// Create a builder over a flat collection with default options
    pub fn new(collection: &'c C) -> Self {
        Self {
            collection,
            options: BuildOptions::default(),
        }
    }

    /// Replace the build options
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current options
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a new tree from an unset root and return it
    pub fn build(&self) -> Result<C::Item, BuildError> {
        let mut root = C::Item::default();
        self.build_into(&mut root)?;
        Ok(root)
    }

    /// Populate `root` in place
    ///
    /// If `root` is unset, the first record processed establishes it. If it
    /// already has an id, the tree is anchored at that id.
    ///
    /// On error the root may hold a partially built tree.
    pub fn build_into(&self, root: &mut C::Item) -> Result<BuildSummary, BuildError> {
        let collection = self.collection;
        // Index of the root id within the root's own path, once established
        let mut anchor: Option<usize> = None;
        let mut summary = BuildSummary::default();

        for record in collection.records() {
            let path_index = match anchor {
                Some(index) => index,
                None => {
                    let index = resolve_root(root, collection, record).ok_or(
                        BuildError::RootNotFound {
                            record: record.id(),
                        },
                    )?;
                    // Later records are anchored through the root's own path
                    if let Some(own) = root.root_path_index() {
                        debug!("Tree anchored at root {} (path index {})", root.id(), own);
                        anchor = Some(own);
                    }
                    index
                }
            };
            let root_id = root.id();

            if record.path().get(path_index) != Some(&root_id) {
                match self.options.mixed_roots {
                    MixedRootPolicy::Skip => {
                        debug!(
                            "Skipping record {}: path does not pass through root {}",
                            record.id(),
                            root_id
                        );
                        summary.skipped.push(record.id());
                        continue;
                    }
                    MixedRootPolicy::Reject => {
                        return Err(BuildError::MixedRoot {
                            record: record.id(),
                            root: root_id,
                        });
                    }
                }
            }

            walk(
                root,
                collection,
                record.path_after(path_index),
                record.position(),
                &mut summary,
            );
            summary.attached += 1;
        }

        if self.options.sort_by_position {
            root.sort_by_position();
        }

        if !summary.skipped.is_empty() {
            warn!(
                "{} record(s) skipped as not descending from root {}",
                summary.skipped.len(),
                root.id()
            );
        }

        summary.root = root.id();
        Ok(summary)
    }
}

/// Build `root` from `collection`
///
/// Fails with [`BuildError::RootNotFound`] as soon as a record's path has no
/// id present in the collection. Records from another root are skipped.
pub fn build_tree<C: Records + ?Sized>(
    root: &mut C::Item,
    collection: &C,
) -> Result<(), BuildError> {
    TreeBuilder::new(collection).build_into(root).map(|_| ())
}

/// Find the path index at which `record` is anchored to the tree's root
///
/// If `root` is already established, returns the index of its id in its own
/// path, regardless of `record`. Otherwise the first id on `record`'s path
/// that exists in the collection becomes the root: the matched record is
/// copied into `root` and the index of the match in `record`'s path is
/// returned.
///
/// Returns `None` when no root can be established or confirmed.
pub fn resolve_root<C: Records + ?Sized>(
    root: &mut C::Item,
    collection: &C,
    record: &C::Item,
) -> Option<usize> {
    if !root.id().is_unset() {
        return root.root_path_index();
    }

    for (index, &id) in record.path().iter().enumerate() {
        if let Some(found) = collection.find(id) {
            *root = found.detached();
            return Some(index);
        }
    }

    None
}

/// Attach `path` below `parent`, one level per element
///
/// Every node created along the way gets `position`, the position of the
/// record whose path is being walked.
pub fn walk_path<C: Records + ?Sized>(
    parent: &mut C::Item,
    collection: &C,
    path: &[RecordId],
    position: i64,
) {
    walk(parent, collection, path, position, &mut BuildSummary::default());
}

fn walk<C: Records + ?Sized>(
    parent: &mut C::Item,
    collection: &C,
    path: &[RecordId],
    position: i64,
    summary: &mut BuildSummary,
) {
    let mut node = parent;
    for &id in path {
        let (child, located) = locate(node, collection, id, position);
        match located {
            Located::Existing => {}
            Located::Adopted => summary.adopted.push(id),
            Located::Placeholder => summary.placeholders.push(id),
        }
        node = child;
    }
}

/// Get the child of `parent` with `id`, creating it if needed
///
/// A new child is copied from the collection when the id exists there and is
/// a placeholder with only `id` and `position` otherwise. Either way it is
/// appended to the end of `parent`'s children.
pub fn locate_or_create<'p, C: Records + ?Sized>(
    parent: &'p mut C::Item,
    collection: &C,
    id: RecordId,
    position: i64,
) -> &'p mut C::Item {
    locate(parent, collection, id, position).0
}

fn locate<'p, C: Records + ?Sized>(
    parent: &'p mut C::Item,
    collection: &C,
    id: RecordId,
    position: i64,
) -> (&'p mut C::Item, Located) {
    let existing = parent.children().iter().position(|c| c.id() == id);

    let (index, located) = match existing {
        Some(index) => (index, Located::Existing),
        None => {
            let (child, located) = match collection.find(id) {
                Some(record) => (record.detached(), Located::Adopted),
                None => (C::Item::placeholder(id, position), Located::Placeholder),
            };
            trace!("Attaching {:?} node {} under {}", located, id, parent.id());

            let children = parent.children_mut();
            children.push(child);
            (children.len() - 1, located)
        }
    };

    (&mut parent.children_mut()[index], located)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    type Item = Node<&'static str>;

    fn item(id: u64, position: i64, path: &[u64]) -> Item {
        Node::new(id, position, path, "payload")
    }

    fn ids(children: &[Item]) -> Vec<u64> {
        children.iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn test_resolve_root_picks_shallowest_present_ancestor() {
        let records = vec![item(2, 0, &[1, 2]), item(4, 0, &[1, 2, 4])];
        let mut root = Item::default();

        let index = resolve_root(&mut root, &records, &records[1]);
        assert_eq!(index, Some(1));
        assert_eq!(root.id, RecordId(2));
        assert_eq!(root.data, "payload");
    }

    #[test]
    fn test_resolve_root_is_stable_once_established() {
        let records = vec![item(2, 0, &[1, 2]), item(6, 0, &[1, 3, 6])];
        let mut root = Item::default();

        assert_eq!(resolve_root(&mut root, &records, &records[0]), Some(1));
        // Uses the root's own path, not the record's
        assert_eq!(resolve_root(&mut root, &records, &records[1]), Some(1));
        assert_eq!(root.id, RecordId(2));
    }

    #[test]
    fn test_resolve_root_none_when_nothing_matches() {
        let records = vec![item(7, 0, &[1, 2])];
        let mut root = Item::default();

        assert_eq!(resolve_root(&mut root, &records, &records[0]), None);
        assert!(root.id.is_unset());
    }

    #[test]
    fn test_resolve_root_established_without_own_id_in_path() {
        let records = vec![item(1, 0, &[1])];
        let mut root = item(5, 0, &[1, 2]);

        assert_eq!(resolve_root(&mut root, &records, &records[0]), None);
    }

    #[test]
    fn test_locate_or_create_is_idempotent() {
        let records = vec![item(1, 0, &[1]), item(2, 3, &[1, 2])];
        let mut root = item(1, 0, &[1]);

        let first = locate_or_create(&mut root, &records, RecordId(2), 0) as *const Item;
        let second = locate_or_create(&mut root, &records, RecordId(2), 0) as *const Item;

        assert_eq!(first, second);
        assert_eq!(ids(&root.children), vec![2]);
        // Adopted from the collection, so its own position wins
        assert_eq!(root.children[0].position, 3);
    }

    #[test]
    fn test_locate_or_create_placeholder() {
        let records = vec![item(1, 0, &[1])];
        let mut root = item(1, 0, &[1]);

        let child = locate_or_create(&mut root, &records, RecordId(9), 4);
        assert_eq!(child.id, RecordId(9));
        assert_eq!(child.position, 4);
        assert_eq!(child.data, "");
        assert!(child.path.is_empty());
    }

    #[test]
    fn test_locate_or_create_appends_in_order() {
        let records: Vec<Item> = Vec::new();
        let mut root = item(1, 0, &[1]);

        for id in [5, 3, 4, 3, 5] {
            locate_or_create(&mut root, &records, RecordId(id), 0);
        }
        assert_eq!(ids(&root.children), vec![5, 3, 4]);
    }

    #[test]
    fn test_walk_path_threads_position() {
        let records = vec![item(1, 0, &[1]), item(3, 8, &[1, 2, 3])];
        let mut root = item(1, 0, &[1]);

        walk_path(&mut root, &records, &[RecordId(2), RecordId(3)], 5);

        let two = &root.children[0];
        assert_eq!(two.id, RecordId(2));
        assert_eq!(two.position, 5);
        assert_eq!(two.children[0].id, RecordId(3));
        assert_eq!(two.children[0].position, 8);
    }

    #[test]
    fn test_walk_path_empty_is_noop() {
        let records = vec![item(1, 0, &[1])];
        let mut root = item(1, 0, &[1]);

        walk_path(&mut root, &records, &[], 0);
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            item(1, 0, &[1]),
            item(4, 2, &[1, 3, 4]),
            item(6, 0, &[9, 6]),
        ];
        let mut root = Item::default();

        let summary = TreeBuilder::new(&records).build_into(&mut root).unwrap();
        assert_eq!(summary.root, RecordId(1));
        assert_eq!(summary.attached, 2);
        assert_eq!(summary.adopted, vec![RecordId(4)]);
        assert_eq!(summary.placeholders, vec![RecordId(3)]);
        assert_eq!(summary.skipped, vec![RecordId(6)]);
    }

    #[test]
    fn test_preset_root_anchors_build() {
        let records = vec![item(2, 0, &[1, 2]), item(4, 0, &[1, 2, 4])];
        let mut root = item(2, 0, &[1, 2]);

        build_tree(&mut root, &records).unwrap();
        assert_eq!(ids(&root.children), vec![4]);
    }

    #[test]
    fn test_short_path_is_skipped_after_anchor() {
        let records = vec![item(2, 0, &[1, 2]), item(8, 0, &[8])];
        let mut root = Item::default();

        let summary = TreeBuilder::new(&records).build_into(&mut root).unwrap();
        assert_eq!(summary.skipped, vec![RecordId(8)]);
        assert!(root.children.is_empty());
    }
}
