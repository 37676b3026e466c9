use crate::config::ServeConfig;
use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use crate::storage::ItemStore;
use anyhow::{Context, Result};

pub fn handle_serve(addr: String, store_uri: String) -> Result<()> {
    let config = ServeConfig::new(&addr, &store_uri)?;
    tracing::info!(backend = config.store.backend_name(), "Starting itemql");

    tokio::runtime::Runtime::new()?.block_on(async {
        let store = ItemStore::connect(&config.store)
            .await
            .context("Failed to connect to item store")?;
        let schema = build_schema(store);

        println!(
            "Starting GraphQL server on http://{}{}",
            config.addr, GRAPHQL_PATH
        );
        println!("Item list: http://{}/", config.addr);

        run_server(schema, config.addr).await?;
        anyhow::Ok(())
    })
}
