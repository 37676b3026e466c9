use crate::error::{ItemqlError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the document store connection string.
pub const STORE_URI_ENV: &str = "MONGODB_URI";

/// Environment variable holding the GraphQL endpoint used by the client.
pub const ENDPOINT_ENV: &str = "ITEMQL_ENDPOINT";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/graphql";

/// Which document store backs the API, derived from the connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// `mongodb://` or `mongodb+srv://`, passed to the driver verbatim.
    Mongo { uri: String },
    /// `file://<dir>`: one JSON document per item.
    File { path: PathBuf },
    /// `memory://`: nothing survives the process.
    Memory,
}

impl StoreConfig {
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        let Some((scheme, rest)) = uri.split_once("://") else {
            return Err(ItemqlError::Config(format!(
                "Store URI has no scheme: '{}'",
                uri
            )));
        };

        match scheme.to_ascii_lowercase().as_str() {
            "mongodb" | "mongodb+srv" => Ok(StoreConfig::Mongo {
                uri: uri.to_string(),
            }),
            "file" => {
                if rest.is_empty() {
                    return Err(ItemqlError::Config(
                        "file:// store URI needs a directory".to_string(),
                    ));
                }
                Ok(StoreConfig::File {
                    path: PathBuf::from(rest),
                })
            }
            "memory" => Ok(StoreConfig::Memory),
            other => Err(ItemqlError::Config(format!(
                "Unsupported store scheme '{}' (expected mongodb, mongodb+srv, file or memory)",
                other
            ))),
        }
    }

    /// Short label for logs. Never includes credentials.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Mongo { .. } => "mongodb",
            StoreConfig::File { .. } => "file",
            StoreConfig::Memory => "memory",
        }
    }
}

/// Everything `serve` needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub store: StoreConfig,
}

impl ServeConfig {
    pub fn new(addr: &str, store_uri: &str) -> Result<Self> {
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| ItemqlError::Config(format!("Invalid listen address '{}': {}", addr, e)))?;
        let store = StoreConfig::parse(store_uri)?;
        Ok(Self { addr, store })
    }
}
