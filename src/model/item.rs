use serde::{Deserialize, Serialize};

/// A persisted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(id: String, new_item: NewItem) -> Self {
        Self {
            id,
            name: new_item.name,
            description: new_item.description,
        }
    }
}

/// Fields required to create an item. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Item {
        Item::new("abc".to_string(), NewItem::new("Pen", "Blue pen"))
    }

    #[test]
    fn test_patch_keeps_omitted_fields() {
        let mut item = pen();
        ItemPatch {
            name: Some("Pencil".to_string()),
            description: None,
        }
        .apply(&mut item);

        assert_eq!(item.name, "Pencil");
        assert_eq!(item.description, "Blue pen");
        assert_eq!(item.id, "abc");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let patch = ItemPatch::default();
        assert!(patch.is_empty());

        let mut item = pen();
        patch.apply(&mut item);
        assert_eq!(item, pen());
    }
}
