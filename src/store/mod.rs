use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{CreateItem, Item};

/// In-memory collection of items for the lifetime of the process.
///
/// - `items`   → `indexmap::IndexMap` keyed by id: O(1) lookup, and iteration
///               follows insertion order
/// - `created` → number of items ever created; the next id is `created + 1`
///
/// Ids come from `created`, not from the current length, so a delete never
/// causes a later create to hand out an id that is still live.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: IndexMap<u64, Item>,
    created: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All current items in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item. Fails without touching the collection when `name` is
    /// absent or empty.
    pub fn create(&mut self, payload: CreateItem) -> AppResult<Item> {
        let name = payload
            .name
            .filter(|name| !name.is_empty())
            .ok_or(AppError::MissingField("Name"))?;

        let id = self.created + 1;
        let item = Item {
            id,
            name,
            description: payload.description.unwrap_or_default(),
        };

        self.items.insert(id, item.clone());
        self.created = id;
        Ok(item)
    }

    pub fn get(&self, id: u64) -> AppResult<&Item> {
        self.items.get(&id).ok_or(AppError::NotFound("Item"))
    }

    /// Remove one item, keeping the relative order of the rest.
    pub fn delete(&mut self, id: u64) -> AppResult<()> {
        self.items
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound("Item"))
    }
}
