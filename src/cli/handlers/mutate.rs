use anyhow::Result;

use super::utils::execute_and_print;

pub fn handle_mutate(
    mutation: String,
    variables: Option<String>,
    store_uri: String,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    execute_and_print(&store_uri, document, variables)
}
