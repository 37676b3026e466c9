use super::generate_id;
use crate::{
    error::{ItemqlError, Result},
    model::{Item, ItemPatch, NewItem},
    validation,
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local item store. Items are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Item>>> {
        self.items
            .read()
            .map_err(|_| ItemqlError::Storage("Memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Item>>> {
        self.items
            .write()
            .map_err(|_| ItemqlError::Storage("Memory store lock poisoned".to_string()))
    }

    pub fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.read()?.clone())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        validation::validate_id(id)?;
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    pub fn insert(&self, new_item: NewItem) -> Result<Item> {
        let mut items = self.write()?;
        let mut id = generate_id();
        while items.iter().any(|item| item.id == id) {
            id = generate_id();
        }

        let item = Item::new(id, new_item);
        tracing::info!(id = %item.id, name = %item.name, "Creating item");
        items.push(item.clone());
        Ok(item)
    }

    pub fn update_by_id(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>> {
        validation::validate_id(id)?;
        let mut items = self.write()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        tracing::info!(id = %id, "Updating item");
        patch.apply(item);
        Ok(Some(item.clone()))
    }

    pub fn delete_by_id(&self, id: &str) -> Result<Option<Item>> {
        validation::validate_id(id)?;
        let mut items = self.write()?;
        let Some(pos) = items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };

        tracing::info!(id = %id, "Deleting item");
        Ok(Some(items.remove(pos)))
    }
}
