use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::trace::TraceLayer;

use super::ItemsSchema;
use crate::error::Result;

/// Route serving GraphQL: POST executes, GET opens GraphiQL.
pub const GRAPHQL_PATH: &str = "/api/graphql";

const INDEX_HTML: &str = include_str!("../../assets/index.html");

async fn graphql_handler(
    State(schema): State<ItemsSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Item list page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "OK"
}

/// Build the HTTP router. The schema, and the store inside it, is built by
/// the caller once and shared by every request.
pub fn router(schema: ItemsSchema) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

pub async fn run_server(schema: ItemsSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, path = GRAPHQL_PATH, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
