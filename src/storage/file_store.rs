use super::generate_id;
use crate::{
    error::{ItemqlError, Result},
    model::{Item, ItemPatch, NewItem},
    validation,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each item as `<id>.json` inside a single directory.
pub struct FileStore {
    data_path: PathBuf,
}

impl FileStore {
    pub fn open(data_path: impl Into<PathBuf>) -> Result<Self> {
        let data_path = data_path.into();
        std::fs::create_dir_all(&data_path)?;
        Ok(Self { data_path })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn item_path(&self, id: &str) -> PathBuf {
        self.data_path.join(format!("{}.json", id))
    }

    pub fn find_all(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for entry in std::fs::read_dir(&self.data_path)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "json") {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match Self::read_item(&path, id) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Skipping unreadable item document"
                ),
            }
        }
        Ok(items)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        validation::validate_id(id)?;
        let path = self.item_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_item(&path, id).map(Some)
    }

    pub fn insert(&self, new_item: NewItem) -> Result<Item> {
        let mut id = generate_id();
        while self.item_path(&id).exists() {
            id = generate_id();
        }

        let item = Item::new(id, new_item);
        tracing::info!(id = %item.id, name = %item.name, "Creating item");
        self.write_item(&item)?;
        Ok(item)
    }

    pub fn update_by_id(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>> {
        let Some(mut item) = self.find_by_id(id)? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(item));
        }

        // No lock between read and write: a delete landing in between is
        // undone by this write. Last write wins.
        tracing::info!(id = %id, "Updating item");
        patch.apply(&mut item);
        self.write_item(&item)?;
        Ok(Some(item))
    }

    pub fn delete_by_id(&self, id: &str) -> Result<Option<Item>> {
        let Some(item) = self.find_by_id(id)? else {
            return Ok(None);
        };

        tracing::info!(id = %id, "Deleting item");
        match std::fs::remove_file(self.item_path(id)) {
            Ok(()) => Ok(Some(item)),
            // Lost a race with another delete.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read `<id>.json`; the document must carry the id its file is named by.
    fn read_item(path: &Path, id: &str) -> Result<Item> {
        let content = std::fs::read_to_string(path)?;
        let item: Item = serde_json::from_str(&content)?;
        if item.id != id {
            return Err(ItemqlError::Storage(format!(
                "{} holds item {}",
                path.display(),
                item.id
            )));
        }
        Ok(item)
    }

    fn write_item(&self, item: &Item) -> Result<()> {
        let content = serde_json::to_string_pretty(item)?;
        self.atomic_write(&self.item_path(&item.id), &content)
    }

    /// Write via temp file + rename so readers never see a partial document.
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new_in(&self.data_path)
            .map_err(|e| ItemqlError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| ItemqlError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| ItemqlError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| ItemqlError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}
