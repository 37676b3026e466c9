//! GraphQL schema, resolvers and HTTP endpoint for items.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server
//! MONGODB_URI=mongodb://localhost:27017/shop itemql serve
//!
//! # Execute a query from the CLI
//! itemql query '{ getItems { id name description } }'
//!
//! # Execute a mutation from the CLI
//! itemql mutate 'addItem(name: "Pen", description: "Blue pen") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getItems`, `getItem`
//! - **Mutations**: `addItem`, `updateItem`, `deleteItem`

mod schema;
mod server;
mod types;

pub use schema::{AppState, ItemsSchema, MutationRoot, QueryRoot, build_schema, export_sdl};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
