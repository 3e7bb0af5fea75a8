//! Core record traits for materialized-path trees

use crate::tree::RecordId;
use std::collections::HashMap;

/// A record that knows its own materialized path
///
/// The same type is used for the flat input and for the nodes of the tree
/// built from it. Implementations only provide the accessors; the derived
/// methods cover what the builder needs beyond that.
///
/// # Example
///
/// ```ignore
/// fn print_path<R: Record>(record: &R) {
///     let ids: Vec<_> = record.path().iter().map(|id| id.to_string()).collect();
///     println!("{} -> {}", record.id(), ids.join("/"));
/// }
/// ```
pub trait Record: Clone + Default {
    /// Get the record's id
    fn id(&self) -> RecordId;

    /// Set the record's id
    fn set_id(&mut self, id: RecordId);

    /// Sibling ordering hint
    fn position(&self) -> i64;

    /// Set the sibling ordering hint
    fn set_position(&mut self, position: i64);

    /// Ancestor ids, root first, ending with the record's own id
    fn path(&self) -> &[RecordId];

    /// Children attached by the builder, in insertion order
    fn children(&self) -> &[Self];

    /// Mutable access to the children list
    fn children_mut(&mut self) -> &mut Vec<Self>;

    /// The part of the path strictly after `index`
    ///
    /// Returns an empty slice when `index` is the last element or beyond.
    fn path_after(&self, index: usize) -> &[RecordId] {
        self.path().get(index + 1..).unwrap_or(&[])
    }

    /// Index of the record's own id within its own path
    ///
    /// Returns `None` if the id does not occur in the path.
    fn root_path_index(&self) -> Option<usize> {
        let id = self.id();
        self.path().iter().position(|&p| p == id)
    }

    /// A bare record carrying only an id and a position
    fn placeholder(id: RecordId, position: i64) -> Self {
        let mut record = Self::default();
        record.set_id(id);
        record.set_position(position);
        record
    }

    /// A copy of this record with no children
    ///
    /// Records are copied out of the flat collection through this method so that
    /// children never leak in from the input.
    fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.children_mut().clear();
        copy
    }
}

/// A flat, unordered collection of records
///
/// Must not change while a build is running.
pub trait Records {
    /// The record type held by this collection
    type Item: Record;

    /// Iterate over all records
    fn records(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;

    /// Find a record by id
    ///
    /// If several records share an id, the first in iteration order wins.
    fn find(&self, id: RecordId) -> Option<&Self::Item> {
        self.records().find(|r| r.id() == id)
    }

    /// Copy a record out of the collection, or synthesize a placeholder
    fn find_or_placeholder(&self, id: RecordId, position: i64) -> Self::Item {
        match self.find(id) {
            Some(record) => record.detached(),
            None => Self::Item::placeholder(id, position),
        }
    }

    /// Number of records
    fn len(&self) -> usize {
        self.records().count()
    }

    /// Returns true if the collection holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> Records for [R] {
    type Item = R;

    fn records(&self) -> Box<dyn Iterator<Item = &R> + '_> {
        Box::new(self.iter())
    }

    fn len(&self) -> usize {
        <[R]>::len(self)
    }
}

impl<R: Record> Records for Vec<R> {
    type Item = R;

    fn records(&self) -> Box<dyn Iterator<Item = &R> + '_> {
        Box::new(self.iter())
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// A flat collection with a hash index by id
///
/// Keeps insertion order for iteration. Use this instead of a plain slice when
/// the collection is large, since the builder looks records up once per path
/// element.
#[derive(Debug, Clone)]
pub struct RecordIndex<R> {
    records: Vec<R>,
    by_id: HashMap<RecordId, usize>,
}

impl<R: Record> RecordIndex<R> {
    /// Index a list of records
    pub fn new(records: Vec<R>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_id.entry(record.id()).or_insert(index);
        }
        Self { records, by_id }
    }

    /// Get the indexed records in insertion order
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Give back the records
    pub fn into_inner(self) -> Vec<R> {
        self.records
    }
}

impl<R: Record> FromIterator<R> for RecordIndex<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Record> Records for RecordIndex<R> {
    type Item = R;

    fn records(&self) -> Box<dyn Iterator<Item = &R> + '_> {
        Box::new(self.records.iter())
    }

    fn find(&self, id: RecordId) -> Option<&R> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
