//! # itemql - a GraphQL CRUD service for items
//!
//! A single `Item` entity (id, name, description) exposed through a GraphQL
//! API and persisted in a document store, plus a list view that consumes
//! that API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API backed by MongoDB
//! MONGODB_URI=mongodb://localhost:27017/shop itemql serve
//!
//! # Or keep items as JSON files on disk
//! itemql serve --store-uri file://./data
//!
//! # Print the item list from the running server
//! itemql list
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`client`]: HTTP client issuing the list query
//! - [`config`]: Connection string and server configuration
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Item record and typed request structs
//! - [`storage`]: Document store backends
//! - [`view`]: Text rendering of the item list

/// Command-line interface using clap.
pub mod cli;

pub mod client;

/// Configuration parsing.
///
/// Turns the store connection string into a [`config::StoreConfig`].
pub mod config;

/// Error types and result aliases.
///
/// Defines `ItemqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

pub mod logging;

/// Data models for items.
pub mod model;

/// Document store layer.
///
/// MongoDB, JSON files on disk, or process memory behind one [`storage::ItemStore`].
pub mod storage;

/// Input validation utilities.
pub mod validation;

pub mod view;
