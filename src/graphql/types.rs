use crate::model::Item as ModelItem;
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
pub struct Item {
    pub id: ID,
    pub name: String,
    pub description: String,
}

impl From<ModelItem> for Item {
    fn from(item: ModelItem) -> Self {
        Self {
            id: ID(item.id),
            name: item.name,
            description: item.description,
        }
    }
}
