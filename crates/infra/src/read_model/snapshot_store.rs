use std::collections::HashMap;
use std::collections::hash_map::Entry;

use dashboard_core::{DomainError, DomainResult, Entity};

/// Read-only store over an immutable snapshot of entities.
///
/// `list` preserves insertion order; listing code relies on it for stable
/// ordering of equal sort keys.
pub trait SnapshotStore<V: Entity>: Send + Sync {
    fn get(&self, id: &V::Id) -> Option<&V>;
    fn list(&self) -> &[V];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// In-memory snapshot with an id index built once at load.
#[derive(Debug, Clone)]
pub struct InMemorySnapshotStore<V: Entity> {
    records: Vec<V>,
    index: HashMap<V::Id, usize>,
}

impl<V: Entity> InMemorySnapshotStore<V> {
    /// Build a store from records in dataset order.
    ///
    /// Duplicate ids are rejected.
    pub fn from_records(records: Vec<V>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            match index.entry(record.id().clone()) {
                Entry::Occupied(_) => {
                    return Err(DomainError::invariant(format!(
                        "duplicate id in snapshot: {:?}",
                        record.id()
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
            }
        }
        Ok(Self { records, index })
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: Entity> Default for InMemorySnapshotStore<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> SnapshotStore<V> for InMemorySnapshotStore<V>
where
    V: Entity + Send + Sync,
    V::Id: Send + Sync,
{
    fn get(&self, id: &V::Id) -> Option<&V> {
        self.index.get(id).map(|pos| &self.records[*pos])
    }

    fn list(&self) -> &[V] {
        &self.records
    }
}
