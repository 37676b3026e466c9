//! HTTP client for a running itemql endpoint.

use crate::{
    error::{ItemqlError, Result},
    model::Item,
    view::ViewState,
};
use serde::Deserialize;
use url::Url;

/// The one query the list view issues.
pub const GET_ITEMS_QUERY: &str = "query GetItems { getItems { id name description } }";

#[derive(Debug, Deserialize)]
struct ResponseBody<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetItemsData {
    get_items: Option<Vec<Option<Item>>>,
}

pub struct ItemsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ItemsClient {
    pub fn new(endpoint: Url) -> Result<Self> {
        // reqwest is built without a bundled provider; an Err here means one
        // is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, endpoint })
    }

    /// Issue `getItems` once and turn the outcome into a view state.
    pub async fn fetch_view(&self) -> ViewState {
        match self.get_items().await {
            Ok(items) => ViewState::Loaded(items),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }

    pub async fn get_items(&self) -> Result<Vec<Item>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching items");
        let body: ResponseBody<GetItemsData> = self
            .http
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "query": GET_ITEMS_QUERY }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        items_from_response(body)
    }
}

fn items_from_response(body: ResponseBody<GetItemsData>) -> Result<Vec<Item>> {
    if let Some(error) = body.errors.into_iter().next() {
        return Err(ItemqlError::Remote(error.message));
    }
    let Some(data) = body.data else {
        return Err(ItemqlError::Remote(
            "Response carried neither data nor errors".to_string(),
        ));
    };
    let items = data
        .get_items
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect();
    Ok(items)
}
