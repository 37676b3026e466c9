use anyhow::Result;

use super::utils::execute_and_print;

pub fn handle_query(query: String, variables: Option<String>, store_uri: String) -> Result<()> {
    execute_and_print(&store_uri, query, variables)
}
