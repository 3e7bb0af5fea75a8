use mpath::prelude::*;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;

type Item = Node<u64>;

/// Flatten a random hierarchy rooted at 1; the node with id `n` hangs under
/// one of the nodes with a smaller id. The payload is the id itself.
fn flatten(parents: &[Index]) -> Vec<Item> {
    let mut paths: Vec<Vec<u64>> = vec![vec![1]];
    for (i, parent) in parents.iter().enumerate() {
        let mut path = paths[parent.index(i + 1)].clone();
        path.push(i as u64 + 2);
        paths.push(path);
    }

    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let id = i as u64 + 1;
            Node::new(id, (id % 3) as i64, path, id)
        })
        .collect()
}

fn flat_tree() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(any::<Index>(), 0..40)
        .prop_map(|parents| flatten(&parents))
        .prop_shuffle()
}

proptest! {
    #[test]
    fn every_record_is_attached_once(records in flat_tree()) {
        let tree = TreeBuilder::new(&records).build().unwrap();

        prop_assert_eq!(tree.id, RecordId(1));
        let ids = tree.ids();
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), records.len());
        prop_assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn nodes_sit_where_their_path_says(records in flat_tree()) {
        let tree = TreeBuilder::new(&records).build().unwrap();

        for record in &records {
            let node = tree.find_node(record.id).unwrap();
            prop_assert_eq!(&node.path, &record.path);
            prop_assert_eq!(node.data, record.data);
            prop_assert_eq!(tree.depth_of(record.id), Some(record.path.len() - 1));

            if let [.., parent, _] = record.path.as_slice() {
                let parent = tree.find_node(*parent).unwrap();
                prop_assert!(parent.children.iter().any(|c| c.id == record.id));
            }
        }
    }

    #[test]
    fn missing_ancestors_become_placeholders(
        records in flat_tree(),
        keep in prop::collection::vec(any::<bool>(), 40),
    ) {
        let kept: Vec<Item> = records
            .into_iter()
            .enumerate()
            .filter(|(i, r)| r.id == RecordId(1) || keep[*i])
            .map(|(_, r)| r)
            .collect();
        let present: HashSet<RecordId> = kept.iter().map(|r| r.id).collect();
        let referenced: HashSet<RecordId> =
            kept.iter().flat_map(|r| r.path.iter().copied()).collect();

        let tree = TreeBuilder::new(&RecordIndex::new(kept)).build().unwrap();

        prop_assert_eq!(tree.node_count(), referenced.len());
        for (_, node) in tree.walk(TraversalOrder::PreOrder) {
            if present.contains(&node.id) {
                prop_assert_eq!(node.data, node.id.get());
            } else {
                prop_assert_eq!(node.data, 0);
                prop_assert!(node.path.is_empty());
            }
        }
    }
}
