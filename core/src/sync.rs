//! Sync operations: each one drives a full build, execute, parse round trip
//! against the API and folds the accepted result into the store.
//!
//! The store is only touched after a response has parsed successfully, so a
//! failed operation of any kind leaves local state exactly as it was (apart
//! from the revision counter, which only moves on an actual mutation).

use tracing::debug;

use crate::client::ApiClient;
use crate::error::SyncError;
use crate::http::Transport;
use crate::store::ItemStore;
use crate::types::{Item, ItemId, ItemPatch, NewItem};

/// Binds an [`ApiClient`] to a [`Transport`] and applies server responses to
/// an [`ItemStore`]. The store itself is passed per call rather than owned,
/// so one syncer can serve several stores and tests can inspect the store
/// freely between operations.
#[derive(Debug)]
pub struct Syncer<T> {
    client: ApiClient,
    transport: T,
}

impl<T: Transport> Syncer<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the full list from the server and replace the store's contents
    /// with it. Returns the number of items fetched.
    pub fn refresh(&self, store: &mut ItemStore) -> Result<usize, SyncError> {
        let request = self.client.build_list_items();
        let response = self.transport.execute(request)?;
        let items = self.client.parse_list_items(response)?;
        let count = items.len();
        store.replace_all(items);
        debug!(count, "refreshed items from server");
        Ok(count)
    }

    /// Create an item with the given title. The server assigns the id and
    /// starts the item as not completed; the returned item is what the
    /// server stored, and it is appended to the store.
    pub fn create(&self, store: &mut ItemStore, title: &str) -> Result<Item, SyncError> {
        let input = NewItem {
            title: title.to_string(),
        };
        let request = self.client.build_create_item(&input)?;
        let response = self.transport.execute(request)?;
        let item = self.client.parse_create_item(response)?;
        store.add(item.clone());
        debug!(id = item.id, "created item");
        Ok(item)
    }

    /// Apply a partial patch to the item with the given id. On success the
    /// server's merged item replaces the local one wholesale. If the id is
    /// unknown locally the server result is still returned, but the store
    /// keeps its current contents.
    pub fn update(
        &self,
        store: &mut ItemStore,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Item, SyncError> {
        let request = self.client.build_update_item(id, patch)?;
        let response = self.transport.execute(request)?;
        let item = self.client.parse_update_item(response)?;
        if !store.update(item.clone()) {
            debug!(id, "updated item not present locally");
        }
        Ok(item)
    }
}
