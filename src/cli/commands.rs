use crate::config::{DEFAULT_ADDR, DEFAULT_ENDPOINT, ENDPOINT_ENV, STORE_URI_ENV};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "itemql")]
#[command(
    author,
    version,
    about = "A GraphQL CRUD service for items backed by a document store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "ITEMQL_ADDR", default_value = DEFAULT_ADDR)]
        addr: String,

        /// Document store connection string (mongodb://, file://<dir> or memory://)
        #[arg(long, env = STORE_URI_ENV)]
        store_uri: String,
    },

    /// Fetch and print the item list from a running server
    #[command(visible_alias = "ls")]
    List {
        /// GraphQL endpoint of the server
        #[arg(long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
        endpoint: Url,
    },

    /// Execute a GraphQL query directly against the store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Document store connection string
        #[arg(long, env = STORE_URI_ENV)]
        store_uri: String,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Document store connection string
        #[arg(long, env = STORE_URI_ENV)]
        store_uri: String,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
