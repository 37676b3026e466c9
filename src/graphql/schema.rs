use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema, extensions::Tracing};

use crate::model::{ItemPatch, NewItem};
use crate::storage::ItemStore;

use super::types::*;

pub type ItemsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Per-process state shared by every request.
pub struct AppState {
    pub store: ItemStore,
}

pub fn build_schema(store: ItemStore) -> ItemsSchema {
    let state = Arc::new(AppState { store });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(state)
        .finish()
}

/// SDL of the public schema.
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ItemStore> {
    Ok(&ctx.data::<Arc<AppState>>()?.store)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every item
    // Nullable list of nullable items, matching the published schema.
    async fn get_items(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Item>>>> {
        let items = get_store(ctx)?.find_all().await?;
        tracing::debug!(count = items.len(), "getItems");
        Ok(Some(items.into_iter().map(|i| Some(i.into())).collect()))
    }

    /// Get a single item by ID
    async fn get_item(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Item>> {
        tracing::debug!(id = %id.as_str(), "getItem");
        let item = get_store(ctx)?.find_by_id(&id).await?;
        Ok(item.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new item
    async fn add_item(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> async_graphql::Result<Option<Item>> {
        let item = get_store(ctx)?
            .insert(NewItem::new(name, description))
            .await?;
        Ok(Some(item.into()))
    }

    /// Replace the given fields of an item
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
    ) -> async_graphql::Result<Option<Item>> {
        let patch = ItemPatch { name, description };
        let item = get_store(ctx)?.update_by_id(&id, patch).await?;
        if item.is_none() {
            tracing::debug!(id = %id.as_str(), "updateItem: no such item");
        }
        Ok(item.map(Into::into))
    }

    /// Delete an item, returning its last state
    async fn delete_item(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Item>> {
        let item = get_store(ctx)?.delete_by_id(&id).await?;
        if item.is_none() {
            tracing::debug!(id = %id.as_str(), "deleteItem: no such item");
        }
        Ok(item.map(Into::into))
    }
}
