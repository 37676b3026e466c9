use crate::{
    error::{ItemqlError, Result},
    model::{Item, ItemPatch, NewItem},
};
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};

/// Collection holding item documents.
pub const COLLECTION: &str = "items";

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "test";

/// Item as laid out in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    description: String,
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Item {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
        }
    }
}

pub struct MongoStore {
    items: Collection<ItemDocument>,
}

impl MongoStore {
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        tracing::info!(
            database = %database.name(),
            collection = COLLECTION,
            "Connected to MongoDB"
        );

        Ok(Self {
            items: database.collection(COLLECTION),
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Item>> {
        let cursor = self.items.find(doc! {}).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Item::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        let oid = parse_object_id(id)?;
        let found = self.items.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Item::from))
    }

    pub async fn insert(&self, new_item: NewItem) -> Result<Item> {
        let document = ItemDocument {
            id: ObjectId::new(),
            name: new_item.name,
            description: new_item.description,
        };
        tracing::info!(id = %document.id, name = %document.name, "Creating item");
        self.items.insert_one(&document).await?;
        Ok(document.into())
    }

    pub async fn update_by_id(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>> {
        let oid = parse_object_id(id)?;
        let Some(set) = set_document(patch) else {
            // `$set: {}` is rejected by the server; an empty patch is a read.
            return Ok(self.items.find_one(doc! { "_id": oid }).await?.map(Item::from));
        };

        tracing::info!(id = %id, "Updating item");
        let updated = self
            .items
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Item::from))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Option<Item>> {
        let oid = parse_object_id(id)?;
        tracing::info!(id = %id, "Deleting item");
        let deleted = self.items.find_one_and_delete(doc! { "_id": oid }).await?;
        Ok(deleted.map(Item::from))
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| ItemqlError::InvalidId(format!("{}: {}", id, e)))
}

/// Build the `$set` body for a patch, or `None` when it changes nothing.
fn set_document(patch: ItemPatch) -> Option<Document> {
    let mut set = Document::new();
    if let Some(name) = patch.name {
        set.insert("name", name);
    }
    if let Some(description) = patch.description {
        set.insert("description", description);
    }
    (!set.is_empty()).then_some(set)
}
