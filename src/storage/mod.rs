//! Document store layer for items.
//!
//! [`ItemStore`] is the single seam the resolvers talk to. The backend is
//! chosen from the connection string:
//!
//! | URI                              | Backend        |
//! |----------------------------------|----------------|
//! | `mongodb://…`, `mongodb+srv://…` | [`MongoStore`] |
//! | `file://<dir>`                   | [`FileStore`]  |
//! | `memory://`                      | [`MemoryStore`]|
//!
//! Lookups by ID return `Ok(None)` when nothing matches. A malformed ID is
//! an error, as is any failure reported by the backend.

mod file_store;
mod memory_store;
mod mongo_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;

use crate::{
    config::StoreConfig,
    error::Result,
    model::{Item, ItemPatch, NewItem},
    validation,
};

/// Length of IDs generated by the local backends.
pub const ID_LENGTH: usize = 12;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub(crate) fn generate_id() -> String {
    nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)
}

pub enum ItemStore {
    Memory(MemoryStore),
    File(FileStore),
    Mongo(MongoStore),
}

impl ItemStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let store = match config {
            StoreConfig::Mongo { uri } => ItemStore::Mongo(MongoStore::connect(uri).await?),
            StoreConfig::File { path } => ItemStore::File(FileStore::open(path)?),
            StoreConfig::Memory => ItemStore::Memory(MemoryStore::new()),
        };
        tracing::debug!(backend = config.backend_name(), "Item store ready");
        Ok(store)
    }

    pub async fn find_all(&self) -> Result<Vec<Item>> {
        match self {
            ItemStore::Memory(store) => store.find_all(),
            ItemStore::File(store) => store.find_all(),
            ItemStore::Mongo(store) => store.find_all().await,
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        match self {
            ItemStore::Memory(store) => store.find_by_id(id),
            ItemStore::File(store) => store.find_by_id(id),
            ItemStore::Mongo(store) => store.find_by_id(id).await,
        }
    }

    /// Persist a new item. Both fields are required and must be non-empty.
    pub async fn insert(&self, new_item: NewItem) -> Result<Item> {
        validation::validate_required("name", &new_item.name)?;
        validation::validate_required("description", &new_item.description)?;

        match self {
            ItemStore::Memory(store) => store.insert(new_item),
            ItemStore::File(store) => store.insert(new_item),
            ItemStore::Mongo(store) => store.insert(new_item).await,
        }
    }

    /// Apply `patch` and return the item as stored afterwards.
    pub async fn update_by_id(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>> {
        match self {
            ItemStore::Memory(store) => store.update_by_id(id, patch),
            ItemStore::File(store) => store.update_by_id(id, patch),
            ItemStore::Mongo(store) => store.update_by_id(id, patch).await,
        }
    }

    /// Remove an item and return its last known state.
    pub async fn delete_by_id(&self, id: &str) -> Result<Option<Item>> {
        match self {
            ItemStore::Memory(store) => store.delete_by_id(id),
            ItemStore::File(store) => store.delete_by_id(id),
            ItemStore::Mongo(store) => store.delete_by_id(id).await,
        }
    }
}
