// src/repositories/item_repository.rs
//
// Item persistence (in-memory)

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::domain::item::{validate_item, Item};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    /// Validate and insert. Rejects duplicates; the store is untouched on error.
    fn add(&self, item: Item) -> AppResult<()>;
    fn get(&self, id: &str) -> AppResult<Item>;
    /// Copy of every stored item, in no particular order
    fn list(&self) -> AppResult<Vec<Item>>;
    fn count(&self) -> AppResult<usize>;
}

#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<String, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn add(&self, item: Item) -> AppResult<()> {
        validate_item(&item)?;

        let mut items = self
            .items
            .write()
            .map_err(|_| AppError::LockPoisoned("item write"))?;

        if items.contains_key(&item.id) {
            return Err(DomainError::AlreadyExists {
                entity: "Item",
                id: item.id,
            }
            .into());
        }

        debug!("storing item {} ({})", item.id, item.title);
        items.insert(item.id.clone(), item);
        Ok(())
    }

    fn get(&self, id: &str) -> AppResult<Item> {
        let items = self
            .items
            .read()
            .map_err(|_| AppError::LockPoisoned("item read"))?;

        items
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::item_not_found(id))
    }

    fn list(&self) -> AppResult<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| AppError::LockPoisoned("item read"))?;

        Ok(items.values().cloned().collect())
    }

    fn count(&self) -> AppResult<usize> {
        let items = self
            .items
            .read()
            .map_err(|_| AppError::LockPoisoned("item read"))?;

        Ok(items.len())
    }
}
