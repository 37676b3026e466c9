use crate::config::StoreConfig;
use crate::graphql::build_schema;
use crate::storage::ItemStore;
use anyhow::{Context, Result};

/// Parse `--variables` JSON, defaulting to no variables.
pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run a GraphQL document against the store named by `store_uri` and
/// print the response as JSON.
pub fn execute_and_print(
    store_uri: &str,
    document: String,
    variables: Option<String>,
) -> Result<()> {
    let store_config = StoreConfig::parse(store_uri)?;
    let vars = parse_variables(variables)?;

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let store = ItemStore::connect(&store_config)
            .await
            .context("Failed to open item store")?;
        let schema = build_schema(store);
        let request = async_graphql::Request::new(document).variables(vars);
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
