//! In-memory collection of to-do items, the single source of truth for a
//! session.
//!
//! The store is plain owned state: no interior mutability, no callbacks.
//! Callers that want to react to changes poll [`ItemStore::revision`], which
//! moves on every mutating call, and re-read the snapshot when it differs
//! from the last value they saw.

use crate::types::{Item, ItemId};

/// Ordered list of items plus a revision counter for change detection.
///
/// Insertion order is preserved; ids are unique. Mutations go through
/// [`replace_all`](Self::replace_all), [`add`](Self::add),
/// [`update`](Self::update) and [`remove`](Self::remove), all of which bump
/// the revision even when they end up changing nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
    revision: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Monotonically increasing change counter. Compare against a previously
    /// observed value to decide whether to re-read the items.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Discard the current contents and adopt `items` wholesale.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.revision += 1;
    }

    /// Append an item. The caller is responsible for id uniqueness; the
    /// server allocates ids, so a duplicate here means a logic error upstream.
    pub fn add(&mut self, item: Item) {
        debug_assert!(
            self.get(item.id).is_none(),
            "duplicate item id {}",
            item.id
        );
        self.items.push(item);
        self.revision += 1;
    }

    /// Replace the stored item with the same id. Returns `false` and stores
    /// nothing when no item has that id; position and the other items are
    /// untouched either way.
    pub fn update(&mut self, item: Item) -> bool {
        let updated = match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        };
        self.revision += 1;
        updated
    }

    /// Remove the item with the given id, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let removed = self
            .items
            .iter()
            .position(|item| item.id == id)
            .map(|index| self.items.remove(index));
        self.revision += 1;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, title: &str, completed: bool) -> Item {
        Item {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.remaining(), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn replace_all_adopts_the_snapshot_and_discards_prior_content() {
        let mut store = ItemStore::new();
        store.add(item(7, "Stale", true));

        store.replace_all(vec![
            item(1, "Go to the Gym", true),
            item(2, "Go to the Store", false),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.remaining(), 1);
        assert_eq!(store.items()[0].title, "Go to the Gym");
        assert_eq!(store.items()[1].title, "Go to the Store");
        assert!(store.get(7).is_none());
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        store.add(item(2, "Go to the Store", false));
        store.add(item(3, "Milk", false));
        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.remaining(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        store.add(item(2, "Go to the Store", false));
        assert_eq!(store.get(2).unwrap().title, "Go to the Store");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn update_replaces_in_place_and_leaves_others_alone() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        store.add(item(2, "Go to the Store", false));
        let before = store.get(1).unwrap().clone();

        assert!(store.update(item(2, "Go to the Store", true)));

        assert_eq!(store.items()[1].id, 2);
        assert!(store.items()[1].completed);
        assert_eq!(store.get(1).unwrap(), &before);
        assert_eq!(store.remaining(), 0);
    }

    #[test]
    fn update_of_unknown_id_stores_nothing() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        let snapshot = store.items().to_vec();

        assert!(!store.update(item(42, "Phantom", false)));

        assert_eq!(store.items(), snapshot.as_slice());
    }

    #[test]
    fn remove_returns_the_item_and_preserves_order() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        store.add(item(2, "Go to the Store", false));
        store.add(item(3, "Milk", false));

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.title, "Go to the Store");

        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.remove(2).is_none());
    }

    #[test]
    fn remaining_counts_only_open_items() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", true));
        store.add(item(2, "Go to the Store", false));
        assert_eq!(store.remaining(), 1);

        store.update(item(2, "Go to the Store", true));
        assert_eq!(store.remaining(), 0);
    }

    #[test]
    fn every_mutating_call_bumps_the_revision() {
        let mut store = ItemStore::new();
        assert_eq!(store.revision(), 0);

        store.replace_all(Vec::new());
        assert_eq!(store.revision(), 1);

        store.add(item(1, "Go to the Gym", false));
        assert_eq!(store.revision(), 2);

        store.update(item(1, "Go to the Gym", true));
        assert_eq!(store.revision(), 3);

        store.update(item(9, "absent", false));
        assert_eq!(store.revision(), 4);

        store.remove(9);
        assert_eq!(store.revision(), 5);

        store.remove(1);
        assert_eq!(store.revision(), 6);
    }

    #[test]
    fn reads_do_not_move_the_revision() {
        let mut store = ItemStore::new();
        store.add(item(1, "Go to the Gym", false));
        let seen = store.revision();

        let _ = store.items();
        let _ = store.get(1);
        let _ = store.remaining();
        let _ = store.len();

        assert_eq!(store.revision(), seen);
    }
}
