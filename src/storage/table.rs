//! Table - one entity collection plus its id counter.

use std::collections::BTreeMap;

use crate::schema::Id;

/// Rows keyed by store-assigned id.
///
/// Ids are handed out in increasing order, so iterating the map yields
/// insertion order.
pub(crate) struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Reserve the next id, build the row from it, store it and return a copy.
    pub fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}
